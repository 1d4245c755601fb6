use clap::Parser;
use dinesim::cli::{self, Cli};

fn main() -> Result<(), String> {
    env_logger::init();
    cli::execute(Cli::parse())
}
