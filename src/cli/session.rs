use crate::core::config::SimulationConfig;
use crate::core::errors::PromptError;
use crate::core::observer::SimulationObserver;
use crate::core::random::RandomSource;
use crate::core::simulation_engine::SimulationEngine;
use log::{info, warn};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Interactive console session: asks for a configuration, runs it, and offers
/// another run until the user declines.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run simulations until the user answers anything but "y".
    ///
    /// All runs share one engine, so order numbers keep increasing across runs.
    /// Closing the input ends the session like a "n" answer.
    pub fn run(
        &mut self,
        random: Box<dyn RandomSource>,
        observer: Box<dyn SimulationObserver>,
    ) -> Result<(), PromptError> {
        let mut engine = SimulationEngine::new(SimulationConfig::default(), random);
        engine.add_observer(observer);

        loop {
            writeln!(self.output, "Starting simulator...")?;
            writeln!(self.output)?;

            let config = match self.read_config() {
                Ok(config) => config,
                Err(PromptError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            engine.configure(config);
            engine.simulate();
            self.output.flush()?;

            let answer = match self.ask("Do you want to try another simulation? (y/n): ") {
                Ok(answer) => answer,
                Err(PromptError::InputClosed) => String::new(),
                Err(e) => return Err(e),
            };
            writeln!(self.output)?;

            if !answer.eq_ignore_ascii_case("y") {
                break;
            }
        }

        writeln!(self.output, "Program terminating normally...")?;
        self.output.flush()?;
        info!("Session ended");
        Ok(())
    }

    /// Ask for the five configuration values in order
    pub fn read_config(&mut self) -> Result<SimulationConfig, PromptError> {
        let restaurants: usize = self.prompt("Enter the number of restaurants: ", "restaurant count", |_| true)?;
        let max_customers: usize = self.prompt(
            "Enter the maximum number of customers a restaurant can serve: ",
            "customer limit",
            |_| true,
        )?;
        let arrival_probability: f64 = self.prompt(
            "Enter the arrival probability of a customer: ",
            "probability between 0 and 1",
            |p: &f64| (0.0..=1.0).contains(p),
        )?;
        let chefs: u32 = self.prompt("Enter the number of chefs: ", "chef count", |_| true)?;
        let duration: u32 = self.prompt("Enter the number of simulation units: ", "number of units", |_| true)?;

        Ok(SimulationConfig {
            restaurants,
            max_customers,
            arrival_probability,
            chefs,
            duration,
        })
    }

    /// Ask until the answer parses and passes `accept`
    fn prompt<T: FromStr>(
        &mut self,
        question: &str,
        field: &'static str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    let error = PromptError::Parse {
                        field,
                        input: answer,
                    };
                    warn!("Rejected console input: {}", error);
                    writeln!(self.output, "{}. Please try again.", error)?;
                }
            }
        }
    }

    /// Print a question and read one trimmed line
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
