//! Error types for pizza construction and pricing.

use crate::model::PizzaKind;
use thiserror::Error;

/// Errors that can occur while building or pricing a pizza.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PizzaError {
    /// A Build Your Own pizza already carries the maximum number of toppings.
    #[error("Maximum of {max} toppings allowed.")]
    TooManyToppings { max: usize },

    /// Preset pizzas keep the recipe they were made with.
    #[error("{0} toppings are fixed")]
    FixedToppings(PizzaKind),

    /// The pizza type label is not on the menu.
    #[error("Unknown pizza type: {0}")]
    UnknownPizzaKind(String),

    #[error("Invalid size: {0}")]
    UnknownSize(String),

    #[error("Invalid crust: {0}")]
    UnknownCrust(String),

    #[error("Invalid topping: {0}")]
    UnknownTopping(String),

    #[error("Invalid style: {0}")]
    UnknownStyle(String),

    /// Build Your Own is priced per topping, so the topping list is required.
    #[error("Topping list is required to price a Build Your Own pizza")]
    MissingToppings,
}
