use super::customer::Customer;
use std::collections::VecDeque;

/// Seating queue of a single restaurant.
///
/// Plain FIFO: customers are appended at the tail and leave from the head.
/// The queue does not know its capacity; the engine checks `size()` before seating.
#[derive(Debug, Default, Clone)]
pub struct Restaurant {
    customers: VecDeque<Customer>,
}

impl Restaurant {
    /// Create an empty restaurant
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a customer at the tail of the queue
    pub fn enqueue(&mut self, customer: Customer) {
        self.customers.push_back(customer);
    }

    /// Remove and return the customer at the head, if any
    pub fn dequeue(&mut self) -> Option<Customer> {
        self.customers.pop_front()
    }

    /// Customer at the head without removing it
    pub fn peek(&self) -> Option<&Customer> {
        self.customers.front()
    }

    pub fn size(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Customers from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }
}

impl std::fmt::Display for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, customer) in self.customers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", customer)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::Food;

    fn customer(order: u64) -> Customer {
        Customer::new(order, Food::GrilledCheese, 1, 30, 10)
    }

    #[test]
    fn test_empty_queue() {
        let mut restaurant = Restaurant::new();
        assert!(restaurant.is_empty());
        assert_eq!(restaurant.size(), 0);
        assert!(restaurant.peek().is_none());
        assert!(restaurant.dequeue().is_none());
        assert_eq!(restaurant.to_string(), "{}");
    }

    #[test]
    fn test_fifo_order() {
        let mut restaurant = Restaurant::new();
        for order in 1..=3 {
            restaurant.enqueue(customer(order));
        }

        assert_eq!(restaurant.size(), 3);
        assert_eq!(restaurant.peek().map(|c| c.order_number()), Some(1));
        assert_eq!(restaurant.size(), 3, "peek must not remove");

        let drained: Vec<_> = std::iter::from_fn(|| restaurant.dequeue())
            .map(|c| c.order_number())
            .collect();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(restaurant.is_empty());
    }

    #[test]
    fn test_display_lists_head_to_tail() {
        let mut restaurant = Restaurant::new();
        restaurant.enqueue(Customer::new(1, Food::Steak, 1, 45, 25));
        restaurant.enqueue(Customer::new(2, Food::GrilledCheese, 1, 30, 10));
        assert_eq!(restaurant.to_string(), "{[#1, S, 45 min.], [#2, GC, 30 min.]}");

        restaurant.dequeue();
        assert_eq!(restaurant.to_string(), "{[#2, GC, 30 min.]}");
    }

    #[test]
    fn test_no_capacity_limit_in_queue() {
        let mut restaurant = Restaurant::new();
        for order in 1..=100 {
            restaurant.enqueue(customer(order));
        }
        assert_eq!(restaurant.size(), 100);
    }
}
