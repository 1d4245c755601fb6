/// Index of a simulation step, 1-based inside a run
pub type Step = u32;

/// Order number handed to every admitted customer
pub type OrderNumber = u64;

/// Minutes of simulated time that pass during one step
pub const STEP_MINUTES: u32 = 5;

/// Fixed time a customer spends eating once the food is cooked
pub const EATING_MINUTES: u32 = 15;

/// Number of independent arrival trials per restaurant per step
pub const ARRIVAL_TRIALS_PER_STEP: u32 = 4;

/// Chef count at which menu cook times apply unchanged
pub const BASELINE_CHEFS: u32 = 3;

/// Minutes each chef above or below the baseline shifts a cook time
pub const MINUTES_PER_CHEF: u32 = 5;

/// Largest total reduction extra chefs can give a cook time
pub const MAX_CHEF_SPEEDUP_MINUTES: u32 = 10;

/// Identifier for a restaurant in a run (0-based position in the engine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RestaurantId(pub usize);

impl RestaurantId {
    /// Number shown to users, counting from 1
    pub fn display_number(&self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_number())
    }
}
