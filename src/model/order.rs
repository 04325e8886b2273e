use crate::model::Pizza;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderNumber(pub u32);

impl From<u32> for OrderNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer order: a numbered, ordered list of pizzas.
///
/// Totals and mutation live in [`crate::order`]. Orders are normally opened
/// through an [`OrderSession`](crate::lifecycle::OrderSession), which hands
/// out the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub(crate) number: OrderNumber,
    pub(crate) pizzas: Vec<Pizza>,
}

impl Order {
    /// Creates an empty order.
    ///
    /// # Arguments
    /// * `number` - Order number (typically issued by the session)
    pub fn new(number: OrderNumber) -> Self {
        Self {
            number,
            pizzas: Vec::new(),
        }
    }

    pub fn number(&self) -> OrderNumber {
        self.number
    }

    /// The pizzas in the order they were added.
    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }
}

/// Receipt block: the number, one line per pizza, then the taxed total.
impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Order Number: {}", self.number)?;
        for pizza in &self.pizzas {
            writeln!(f, "{pizza}")?;
        }
        write!(f, "Total with Tax: ${:.2}", self.total_with_tax())
    }
}
