//! Pizza management and totals for [`Order`].

use super::OrderError;
use crate::model::{Order, Pizza, PizzaCreate};
use crate::pizza::round_to_cents;
use tracing::{debug, info};

/// New Jersey sales tax.
pub const SALES_TAX_RATE: f64 = 0.06625;

impl Order {
    pub fn add_pizza(&mut self, pizza: Pizza) {
        debug!(order_number = %self.number, ?pizza, "add_pizza called");
        self.pizzas.push(pizza);
        info!(order_number = %self.number, size = self.pizzas.len(), "Pizza added");
    }

    /// Builds a pizza from a menu request and adds it.
    ///
    /// # Errors
    /// - [`OrderError::MissingPizza`] when `request` is `None`
    /// - [`OrderError::Pizza`] when the pizza cannot be built
    pub fn add_pizza_request(&mut self, request: Option<PizzaCreate>) -> Result<(), OrderError> {
        let request = request.ok_or(OrderError::MissingPizza)?;
        let pizza = Pizza::from_create_params(request)?;
        self.add_pizza(pizza);
        Ok(())
    }

    /// Removes the first pizza equal to `pizza`, returning it.
    /// Leaves the order untouched when nothing matches.
    pub fn remove_pizza(&mut self, pizza: &Pizza) -> Option<Pizza> {
        let position = self.pizzas.iter().position(|p| p == pizza)?;
        self.remove_pizza_at(position)
    }

    /// Removes the pizza at `index` (as listed by [`pizzas`](Self::pizzas)).
    pub fn remove_pizza_at(&mut self, index: usize) -> Option<Pizza> {
        if index >= self.pizzas.len() {
            return None;
        }
        let removed = self.pizzas.remove(index);
        info!(order_number = %self.number, size = self.pizzas.len(), "Pizza removed");
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.pizzas.clear();
        info!(order_number = %self.number, "Order cleared");
    }

    /// Sum of pizza prices, rounded to cents.
    pub fn subtotal(&self) -> f64 {
        round_to_cents(self.pizzas.iter().map(Pizza::price).sum())
    }

    /// The tax charged on [`subtotal`](Self::subtotal).
    pub fn sales_tax(&self) -> f64 {
        round_to_cents(self.total_with_tax() - self.subtotal())
    }

    /// Subtotal with sales tax, rounded to cents.
    pub fn total_with_tax(&self) -> f64 {
        let subtotal = self.subtotal();
        round_to_cents(subtotal + subtotal * SALES_TAX_RATE)
    }
}
