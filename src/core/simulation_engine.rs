use super::config::SimulationConfig;
use super::customer::{Customer, OrderNumberGenerator};
use super::menu::Food;
use super::observer::{SimulationEvent, SimulationObserver};
use super::random::RandomSource;
use super::restaurant::Restaurant;
use super::stats::SimulationStats;
use super::types::{RestaurantId, Step, ARRIVAL_TRIALS_PER_STEP, STEP_MINUTES};
use log::{debug, info};

/// Drives the restaurants through a run, one step at a time.
///
/// An engine is one session: its order-number generator and random source live as
/// long as the engine, across every run started with [`SimulationEngine::configure`].
pub struct SimulationEngine {
    config: SimulationConfig,
    restaurants: Vec<Restaurant>,
    order_numbers: OrderNumberGenerator,
    random: Box<dyn RandomSource>,
    observers: Vec<Box<dyn SimulationObserver>>,
    stats: SimulationStats,
}

impl SimulationEngine {
    /// Create an engine for a new session with empty restaurants
    pub fn new(config: SimulationConfig, random: Box<dyn RandomSource>) -> Self {
        let restaurants = Self::open_restaurants(&config);
        Self {
            config,
            restaurants,
            order_numbers: OrderNumberGenerator::new(),
            random,
            observers: Vec::new(),
            stats: SimulationStats::new(),
        }
    }

    fn open_restaurants(config: &SimulationConfig) -> Vec<Restaurant> {
        (0..config.restaurants).map(|_| Restaurant::new()).collect()
    }

    /// Prepare the next run of this session: new configuration, empty restaurants.
    /// Order numbers keep counting from where the previous run stopped.
    pub fn configure(&mut self, config: SimulationConfig) {
        self.restaurants = Self::open_restaurants(&config);
        self.config = config;
        self.stats = SimulationStats::new();
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, event: SimulationEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    /// Run every step of the configured duration and return the average
    /// service time in minutes per served customer (0 if nobody was served).
    pub fn simulate(&mut self) -> f64 {
        self.stats = SimulationStats::new();
        info!(
            "Starting simulation: {} restaurant(s), capacity {}, arrival probability {}, {} chef(s), {} step(s)",
            self.config.restaurants,
            self.config.max_customers,
            self.config.arrival_probability,
            self.config.chefs,
            self.config.duration
        );
        self.notify(SimulationEvent::RunStarted {
            config: self.config.clone(),
        });

        for step in 1..=self.config.duration {
            self.step(step);
        }

        let average = self.stats.average_service_time();
        info!(
            "Simulation finished: {} served, {} lost, ${} profit, {:.2} min average",
            self.stats.customers_served, self.stats.customers_lost, self.stats.profit, average
        );
        self.notify(SimulationEvent::RunFinished {
            stats: self.stats.clone(),
        });

        average
    }

    /// Process one step: arrivals, queue report, then the service tick
    fn step(&mut self, step: Step) {
        debug!("=== Simulation Step {} ===", step);
        self.notify(SimulationEvent::StepStarted { step });

        // 1. Arrivals
        for index in 0..self.restaurants.len() {
            for _ in 0..ARRIVAL_TRIALS_PER_STEP {
                if self.random.uniform_f64() <= self.config.arrival_probability {
                    self.admit(RestaurantId(index), step);
                }
            }
        }

        // 2. Report queues with full times for the new arrivals
        let queues = self.restaurants.iter().map(|r| r.to_string()).collect();
        self.notify(SimulationEvent::QueuesReported { step, queues });

        // 3. Service tick
        for index in 0..self.restaurants.len() {
            self.serve(RestaurantId(index), step);
        }

        self.notify(SimulationEvent::StepFinished { step });
    }

    /// Seat one arriving customer, or turn them away if the restaurant is full.
    /// Turned-away customers never get an order number.
    fn admit(&mut self, restaurant: RestaurantId, step: Step) {
        if self.restaurants[restaurant.0].size() >= self.config.max_customers {
            self.stats.customers_lost += 1;
            debug!("Restaurant {} full, customer lost", restaurant);
            self.notify(SimulationEvent::CustomerRejected { restaurant });
            return;
        }

        let last = Food::ALL.len() as i64 - 1;
        let pick = self.random.uniform_int(0, last).clamp(0, last);
        let food = Food::ALL[pick as usize];

        let order_number = self.order_numbers.next_order_number();
        let customer = Customer::new(
            order_number,
            food,
            step,
            food.time_to_serve(self.config.chefs),
            food.price(),
        );
        debug!("Seating {} at restaurant {}", customer, restaurant);

        self.restaurants[restaurant.0].enqueue(customer);
        self.stats.customers_admitted += 1;
        self.notify(SimulationEvent::CustomerSeated {
            restaurant,
            order_number,
            food,
        });
    }

    /// Advance every customer of a restaurant by one step quantum.
    /// Unfinished customers go back in their original order.
    fn serve(&mut self, restaurant: RestaurantId, step: Step) {
        let mut waiting = Vec::with_capacity(self.restaurants[restaurant.0].size());

        while let Some(mut customer) = self.restaurants[restaurant.0].dequeue() {
            customer.set_remaining_time(customer.remaining_time() - i64::from(STEP_MINUTES));

            if customer.is_finished() {
                let time_spent =
                    u64::from(step.saturating_sub(customer.arrival_step())) * u64::from(STEP_MINUTES);
                self.stats.profit += u64::from(customer.price());
                self.stats.total_service_time += time_spent;
                self.stats.customers_served += 1;
                self.notify(SimulationEvent::CustomerServed {
                    restaurant,
                    order_number: customer.order_number(),
                    price: customer.price(),
                    time_spent,
                });
            } else {
                waiting.push(customer);
            }
        }

        for customer in waiting {
            self.restaurants[restaurant.0].enqueue(customer);
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Totals of the current (or most recent) run
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Restaurants in configuration order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Customers still seated across all restaurants
    pub fn customers_waiting(&self) -> usize {
        self.restaurants.iter().map(Restaurant::size).sum()
    }

    /// Customers created so far in this session
    pub fn customers_created(&self) -> u64 {
        self.order_numbers.issued()
    }
}
