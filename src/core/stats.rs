/// Running totals for one simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Customers turned away because their restaurant was full
    pub customers_lost: u64,
    /// Customers seated
    pub customers_admitted: u64,
    /// Customers whose meal finished
    pub customers_served: u64,
    /// Minutes between arrival step and finishing step, summed over served customers
    pub total_service_time: u64,
    /// Dollars earned from served customers
    pub profit: u64,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Average minutes per served customer, 0 when nobody was served
    pub fn average_service_time(&self) -> f64 {
        if self.customers_served == 0 {
            0.0
        } else {
            self.total_service_time as f64 / self.customers_served as f64
        }
    }

    /// Successful arrival trials, seated or not
    pub fn arrivals(&self) -> u64 {
        self.customers_admitted + self.customers_lost
    }
}
