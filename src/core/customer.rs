use super::menu::Food;
use super::types::{OrderNumber, Step};

/// A diner seated at a restaurant.
///
/// The order number is fixed at creation; the remaining time counts down by one
/// step quantum per step until the customer is served.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    order_number: OrderNumber,
    food: Food,
    price: u32,
    arrival_step: Step,
    remaining_time: i64,
}

impl Customer {
    /// Create a customer with an order number issued by an [`OrderNumberGenerator`]
    pub fn new(
        order_number: OrderNumber,
        food: Food,
        arrival_step: Step,
        total_time_to_serve: u32,
        price: u32,
    ) -> Self {
        Self {
            order_number,
            food,
            price,
            arrival_step,
            remaining_time: i64::from(total_time_to_serve),
        }
    }

    pub fn order_number(&self) -> OrderNumber {
        self.order_number
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn set_food(&mut self, food: Food) {
        self.food = food;
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn set_price(&mut self, price: u32) {
        self.price = price;
    }

    pub fn arrival_step(&self) -> Step {
        self.arrival_step
    }

    pub fn set_arrival_step(&mut self, step: Step) {
        self.arrival_step = step;
    }

    /// Minutes left until the customer has cooked food eaten
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    pub fn set_remaining_time(&mut self, minutes: i64) {
        self.remaining_time = minutes;
    }

    /// Whether the countdown has run out
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[#{}, {}, {} min.]",
            self.order_number,
            self.food.abbreviation(),
            self.remaining_time
        )
    }
}

/// Issues order numbers for one session.
///
/// Numbers start at 1 and increase by one per admitted customer. A generator is
/// owned by the engine, so every run of that engine shares the same sequence and a
/// new engine starts a fresh one.
#[derive(Debug, Default, Clone)]
pub struct OrderNumberGenerator {
    issued: OrderNumber,
}

impl OrderNumberGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next order number
    pub fn next_order_number(&mut self) -> OrderNumber {
        self.issued += 1;
        self.issued
    }

    /// Total number of customers created so far in this session
    pub fn issued(&self) -> OrderNumber {
        self.issued
    }
}
