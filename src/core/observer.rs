use super::config::SimulationConfig;
use super::menu::Food;
use super::stats::SimulationStats;
use super::types::{OrderNumber, RestaurantId, Step};
use log::warn;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Something that happened during a run, in the order it happened
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    RunStarted {
        config: SimulationConfig,
    },
    StepStarted {
        step: Step,
    },
    CustomerSeated {
        restaurant: RestaurantId,
        order_number: OrderNumber,
        food: Food,
    },
    CustomerRejected {
        restaurant: RestaurantId,
    },
    /// Queue of every restaurant after the step's arrivals, rendered head to tail
    QueuesReported {
        step: Step,
        queues: Vec<String>,
    },
    CustomerServed {
        restaurant: RestaurantId,
        order_number: OrderNumber,
        price: u32,
        time_spent: u64,
    },
    StepFinished {
        step: Step,
    },
    RunFinished {
        stats: SimulationStats,
    },
}

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called for every event, synchronously, as the engine produces it
    fn on_event(&mut self, event: &SimulationEvent);
}

/// Prints the run as the console transcript users read
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer, e.g. to inspect a buffer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &SimulationEvent) -> std::io::Result<()> {
        let out = &mut self.out;
        match event {
            SimulationEvent::RunStarted { .. } => writeln!(out)?,
            SimulationEvent::StepStarted { step } => writeln!(out, "Time: {}", step)?,
            SimulationEvent::CustomerSeated {
                restaurant,
                order_number,
                food,
            } => {
                writeln!(out, "Customer #{} has entered Restaurant {}.", order_number, restaurant)?;
                writeln!(
                    out,
                    "Customer #{} has been seated with order \"{}\".",
                    order_number, food
                )?;
            }
            SimulationEvent::CustomerRejected { restaurant } => writeln!(
                out,
                "A customer cannot be seated at Restaurant {}! They have left the restaurant.",
                restaurant
            )?,
            SimulationEvent::QueuesReported { queues, .. } => {
                for (i, queue) in queues.iter().enumerate() {
                    writeln!(out, "R{}: {}", i + 1, queue)?;
                }
                writeln!(out)?;
            }
            SimulationEvent::CustomerServed {
                order_number, price, ..
            } => writeln!(
                out,
                "Customer #{} has enjoyed their food! ${} profit.",
                order_number, price
            )?,
            SimulationEvent::StepFinished { .. } => writeln!(out)?,
            SimulationEvent::RunFinished { stats } => {
                writeln!(out, "Simulation ending...")?;
                writeln!(out)?;
                writeln!(out, "Total customer time: {} minutes", stats.total_service_time)?;
                writeln!(out, "Total customers served: {}", stats.customers_served)?;
                writeln!(
                    out,
                    "Average customer time lapse: {:.2} minutes per order",
                    stats.average_service_time()
                )?;
                writeln!(out, "Total Profit: ${}", stats.profit)?;
                writeln!(out, "Customers that left: {}", stats.customers_lost)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> SimulationObserver for ConsoleReporter<W> {
    fn on_event(&mut self, event: &SimulationEvent) {
        if let Err(e) = self.render(event) {
            warn!("Failed to write simulation report: {}", e);
        }
    }
}

/// Keeps every event in memory; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<SimulationEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<SimulationEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SimulationObserver for EventRecorder {
    fn on_event(&mut self, event: &SimulationEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(events: &[SimulationEvent]) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new());
        for event in events {
            reporter.on_event(event);
        }
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_arrival_lines() {
        let text = render(&[
            SimulationEvent::StepStarted { step: 1 },
            SimulationEvent::CustomerSeated {
                restaurant: RestaurantId(0),
                order_number: 1,
                food: Food::ChickenWings,
            },
            SimulationEvent::CustomerRejected {
                restaurant: RestaurantId(1),
            },
        ]);

        assert_eq!(
            text,
            "Time: 1\n\
             Customer #1 has entered Restaurant 1.\n\
             Customer #1 has been seated with order \"Chicken Wings\".\n\
             A customer cannot be seated at Restaurant 2! They have left the restaurant.\n"
        );
    }

    #[test]
    fn test_queue_and_served_lines() {
        let text = render(&[
            SimulationEvent::QueuesReported {
                step: 2,
                queues: vec!["{[#1, S, 40 min.]}".to_string(), "{}".to_string()],
            },
            SimulationEvent::CustomerServed {
                restaurant: RestaurantId(0),
                order_number: 3,
                price: 15,
                time_spent: 30,
            },
            SimulationEvent::StepFinished { step: 2 },
        ]);

        assert_eq!(
            text,
            "R1: {[#1, S, 40 min.]}\nR2: {}\n\nCustomer #3 has enjoyed their food! $15 profit.\n\n"
        );
    }

    #[test]
    fn test_summary_block() {
        let stats = SimulationStats {
            customers_lost: 2,
            customers_admitted: 5,
            customers_served: 3,
            total_service_time: 100,
            profit: 45,
        };
        let text = render(&[SimulationEvent::RunFinished { stats }]);

        assert_eq!(
            text,
            "Simulation ending...\n\n\
             Total customer time: 100 minutes\n\
             Total customers served: 3\n\
             Average customer time lapse: 33.33 minutes per order\n\
             Total Profit: $45\n\
             Customers that left: 2\n\n"
        );
    }

    #[test]
    fn test_recorder_clones_share_log() {
        let recorder = EventRecorder::new();
        let mut handle = recorder.clone();
        handle.on_event(&SimulationEvent::StepStarted { step: 4 });

        assert_eq!(recorder.events(), vec![SimulationEvent::StepStarted { step: 4 }]);
        recorder.clear();
        assert!(handle.events().is_empty());
    }
}
