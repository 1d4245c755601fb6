//! Command-line front end
//!
//! Without arguments the simulator runs an interactive console session. With
//! `--config` it runs a single simulation from a JSON file and exits.

mod session;

pub use session::Session;

use crate::core::config::SimulationConfig;
use crate::core::observer::ConsoleReporter;
use crate::core::random::SeededRandom;
use crate::core::simulation_engine::SimulationEngine;
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Turn-based simulation of restaurants seating and serving customers
#[derive(Parser, Debug)]
#[command(name = "dinesim")]
#[command(version)]
#[command(about = "Turn-based simulation of restaurants seating and serving customers")]
pub struct Cli {
    /// Seed for the random source; the same seed and inputs reproduce a session
    #[arg(short, long, env = "DINESIM_SEED")]
    pub seed: Option<u64>,

    /// Run one simulation from a JSON configuration file instead of prompting
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Run the program as described by the parsed arguments
pub fn execute(cli: Cli) -> Result<(), String> {
    let random = Box::new(SeededRandom::new(cli.seed));
    if let Some(seed) = cli.seed {
        info!("Using seed {}", seed);
    }

    match cli.config {
        Some(path) => {
            let config = SimulationConfig::from_json_file(&path).map_err(|e| e.to_string())?;
            info!("Loaded configuration from {}", path.display());

            let mut engine = SimulationEngine::new(config, random);
            engine.add_observer(Box::new(ConsoleReporter::stdout()));
            engine.simulate();
            Ok(())
        }
        None => {
            let stdin = std::io::stdin();
            let mut session = Session::new(stdin.lock(), std::io::stdout());
            session
                .run(random, Box::new(ConsoleReporter::stdout()))
                .map_err(|e| e.to_string())
        }
    }
}
