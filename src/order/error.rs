//! Error types for order operations.

use crate::model::OrderNumber;
use crate::pizza::PizzaError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A pizza request arrived without a pizza.
    #[error("Cannot add a missing pizza to the order.")]
    MissingPizza,

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderNumber),

    /// Every order number has been handed out.
    #[error("No order numbers left")]
    NumbersExhausted,

    /// The pizza could not be built.
    #[error(transparent)]
    Pizza(#[from] PizzaError),
}
