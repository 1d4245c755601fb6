pub mod config;
pub mod customer;
pub mod errors;
pub mod menu;
pub mod observer;
pub mod random;
pub mod restaurant;
pub mod simulation_engine;
pub mod stats;
pub mod types;
