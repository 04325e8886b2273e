//! Order-specific logic: pizza management, totals, numbering and export.

pub mod entity;
pub mod error;
pub mod export;

pub use entity::*;
pub use error::*;
pub use export::*;

use crate::model::{Order, OrderNumber};

/// Hands out increasing order numbers. Numbers are never reused.
///
/// Once `u32::MAX` has been issued the generator is exhausted and every
/// further request fails with [`OrderError::NumbersExhausted`].
#[derive(Debug, Clone)]
pub struct OrderNumberGenerator {
    next: Option<u32>,
}

impl OrderNumberGenerator {
    pub fn starting_at(first: OrderNumber) -> Self {
        Self { next: Some(first.0) }
    }

    /// A generator whose first number follows `issued`.
    pub fn after(issued: OrderNumber) -> Self {
        Self {
            next: issued.0.checked_add(1),
        }
    }

    /// The number the next order will get, if any are left.
    pub fn peek(&self) -> Option<OrderNumber> {
        self.next.map(OrderNumber)
    }

    pub fn next_number(&mut self) -> Result<OrderNumber, OrderError> {
        let number = self.next.ok_or(OrderError::NumbersExhausted)?;
        self.next = number.checked_add(1);
        Ok(OrderNumber(number))
    }

    /// Opens an empty order under the next number.
    pub fn new_order(&mut self) -> Result<Order, OrderError> {
        Ok(Order::new(self.next_number()?))
    }
}

impl Default for OrderNumberGenerator {
    fn default() -> Self {
        Self::starting_at(OrderNumber(1))
    }
}
