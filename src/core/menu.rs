use super::types::{BASELINE_CHEFS, EATING_MINUTES, MAX_CHEF_SPEEDUP_MINUTES, MINUTES_PER_CHEF};
use std::str::FromStr;

/// Items a customer can order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Food {
    Steak,
    ChickenWings,
    Cheeseburger,
    ChickenTenders,
    GrilledCheese,
}

impl Food {
    /// Menu in selection order; a random pick indexes into this table
    pub const ALL: [Food; 5] = [
        Food::Steak,
        Food::ChickenWings,
        Food::Cheeseburger,
        Food::ChickenTenders,
        Food::GrilledCheese,
    ];

    /// Full menu name as printed in the seating line
    pub fn name(&self) -> &'static str {
        match self {
            Food::Steak => "Steak",
            Food::ChickenWings => "Chicken Wings",
            Food::Cheeseburger => "Cheeseburger",
            Food::ChickenTenders => "Chicken Tenders",
            Food::GrilledCheese => "Grilled Cheese",
        }
    }

    /// Short code used in queue listings
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Food::Steak => "S",
            Food::ChickenWings => "CW",
            Food::Cheeseburger => "C",
            Food::ChickenTenders => "CT",
            Food::GrilledCheese => "GC",
        }
    }

    /// Cook time in minutes with the baseline kitchen staff
    pub fn base_cook_time(&self) -> u32 {
        match self {
            Food::Steak | Food::ChickenWings => 30,
            Food::Cheeseburger | Food::ChickenTenders => 25,
            Food::GrilledCheese => 15,
        }
    }

    /// Price in dollars
    pub fn price(&self) -> u32 {
        match self {
            Food::Steak => 25,
            Food::ChickenWings => 20,
            Food::Cheeseburger => 15,
            Food::ChickenTenders | Food::GrilledCheese => 10,
        }
    }

    /// Cook time for this item given the number of chefs on shift.
    ///
    /// Every chef above the baseline saves 5 minutes, up to 10 minutes in total.
    /// Every chef below it adds 5 minutes with no cap. Never negative.
    pub fn adjusted_cook_time(&self, chefs: u32) -> u32 {
        let base = i64::from(self.base_cook_time());
        let diff = i64::from(chefs) - i64::from(BASELINE_CHEFS);
        let mut cook = base - diff * i64::from(MINUTES_PER_CHEF);

        if diff > 0 {
            cook = cook.max(base - i64::from(MAX_CHEF_SPEEDUP_MINUTES));
        }

        u32::try_from(cook.max(0)).unwrap_or(u32::MAX)
    }

    /// Minutes from seating until the customer leaves: cooking plus eating
    pub fn time_to_serve(&self, chefs: u32) -> u32 {
        self.adjusted_cook_time(chefs).saturating_add(EATING_MINUTES)
    }
}

impl std::fmt::Display for Food {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Food {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Food::ALL
            .iter()
            .find(|food| food.name() == s)
            .copied()
            .ok_or_else(|| format!("'{}' is not on the menu", s))
    }
}

/// Abbreviate a menu name; names not on the menu come back unchanged
pub fn abbreviate(name: &str) -> &str {
    match name.parse::<Food>() {
        Ok(food) => food.abbreviation(),
        Err(_) => name,
    }
}
