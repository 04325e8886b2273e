//! Plain-text export of placed orders.
//!
//! Each order is written as its receipt block followed by a blank line:
//!
//! ```text
//! Order Number: 1
//! Deluxe (Chicago Style), LARGE DEEP_DISH, Toppings: [...] | Price: $20.99
//! Total with Tax: $22.38
//!
//! ```

use crate::model::Order;
use std::io::Write;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There are no orders to export.")]
    NoOrders,

    #[error("Failed to export orders: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes every order to `writer` in placement order.
///
/// # Errors
/// - [`ExportError::NoOrders`] when `orders` is empty; nothing is written
/// - [`ExportError::Io`] when the writer fails
pub fn write_orders<W: Write>(orders: &[Order], writer: &mut W) -> Result<(), ExportError> {
    if orders.is_empty() {
        warn!("Nothing to export");
        return Err(ExportError::NoOrders);
    }
    for order in orders {
        writeln!(writer, "{order}")?;
        writeln!(writer)?;
    }
    writer.flush()?;
    info!(count = orders.len(), "Orders exported");
    Ok(())
}
