pub mod cli;
pub mod core;

// Re-export commonly used types
pub use crate::core::config::SimulationConfig;
pub use crate::core::customer::{Customer, OrderNumberGenerator};
pub use crate::core::errors::{ConfigError, PromptError};
pub use crate::core::menu::Food;
pub use crate::core::observer::{ConsoleReporter, EventRecorder, SimulationEvent, SimulationObserver};
pub use crate::core::random::{RandomSource, ScriptedRandom, SeededRandom};
pub use crate::core::restaurant::Restaurant;
pub use crate::core::simulation_engine::SimulationEngine;
pub use crate::core::stats::SimulationStats;
pub use crate::core::types::{OrderNumber, RestaurantId, Step};
