//! Configuration for a dining simulation run
//!
//! Holds the five values that shape a run: how many restaurants there are, how
//! many customers each can seat, how likely an arrival trial is to succeed, how
//! many chefs are cooking, and how many steps the run lasts.

use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of restaurants simulated side by side
    pub restaurants: usize,
    /// Maximum number of customers a restaurant seats at once
    pub max_customers: usize,
    /// Probability that a single arrival trial brings a customer
    pub arrival_probability: f64,
    /// Chefs on shift; 3 is the baseline the menu times assume
    pub chefs: u32,
    /// Number of steps to simulate
    pub duration: u32,
}

impl SimulationConfig {
    /// Create a configuration with default values
    ///
    /// Defaults: one restaurant seating five, even odds per arrival trial,
    /// baseline kitchen staff and ten steps.
    pub fn new() -> Self {
        Self {
            restaurants: 1,
            max_customers: 5,
            arrival_probability: 0.5,
            chefs: 3,
            duration: 10,
        }
    }

    /// Set the number of restaurants
    pub fn with_restaurants(mut self, restaurants: usize) -> Self {
        self.restaurants = restaurants;
        self
    }

    /// Set the seating capacity of every restaurant
    pub fn with_max_customers(mut self, max_customers: usize) -> Self {
        self.max_customers = max_customers;
        self
    }

    /// Set the success probability of each arrival trial
    ///
    /// # Arguments
    /// * `probability` - Expected to lie in `[0, 1]`; see [`SimulationConfig::validate`]
    pub fn with_arrival_probability(mut self, probability: f64) -> Self {
        self.arrival_probability = probability;
        self
    }

    /// Set the number of chefs
    pub fn with_chefs(mut self, chefs: u32) -> Self {
        self.chefs = chefs;
        self
    }

    /// Set the number of steps to simulate
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Check the configuration before a run
    ///
    /// The engine itself runs any configuration without panicking; this is for
    /// callers that want to reject nonsensical input up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.arrival_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidProbability(p));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a configuration from JSON text; missing fields take defaults
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
