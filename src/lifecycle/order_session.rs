use crate::model::{Order, OrderNumber};
use crate::order::{write_orders, ExportError, OrderError, OrderNumberGenerator};
use std::io::Write;
use tracing::{debug, info, warn};

/// One customer's ordering session.
///
/// `OrderSession` owns everything the ordering screens share:
/// - **Current order**: the order being built, opened lazily on first use
/// - **Placed orders**: orders that were handed to the kitchen, in placement order
/// - **Order numbers**: the generator every new order draws from
///
/// The caller owns the session and passes it to whatever needs it; there is no
/// process-wide registry.
///
/// # Example
///
/// ```
/// use pizzeria::lifecycle::OrderSession;
/// use pizzeria::model::Style;
///
/// let mut session = OrderSession::new();
/// session.current_order_mut().add_pizza(Style::Ny.factory().create_deluxe());
///
/// let placed = session.place_current_order()?;
/// assert_eq!(placed.map(|n| n.0), Some(1));
/// assert_eq!(session.placed_orders().len(), 1);
/// # Ok::<(), pizzeria::order::OrderError>(())
/// ```
#[derive(Debug)]
pub struct OrderSession {
    current: Option<Order>,
    placed: Vec<Order>,
    first: OrderNumber,
    numbers: OrderNumberGenerator,
}

impl OrderSession {
    /// Creates a session whose first order is number 1.
    pub fn new() -> Self {
        Self::starting_at(OrderNumber(1))
    }

    /// Creates a session whose first order gets `first`.
    pub fn starting_at(first: OrderNumber) -> Self {
        Self {
            current: None,
            placed: Vec::new(),
            first,
            numbers: OrderNumberGenerator::after(first),
        }
    }

    /// The order being built, opened on first use.
    pub fn current_order(&mut self) -> &Order {
        self.current_order_mut()
    }

    pub fn current_order_mut(&mut self) -> &mut Order {
        let first = self.first;
        self.current.get_or_insert_with(|| {
            info!(order_number = %first, "Order opened");
            Order::new(first)
        })
    }

    /// Opens the order that follows the current one. Before anything was
    /// opened that is the session's first order.
    fn open_next(&mut self) -> Result<Order, OrderError> {
        if self.current.is_none() {
            return Ok(Order::new(self.first));
        }
        self.numbers.new_order().inspect_err(|e| warn!(error = %e, "Cannot open order"))
    }

    /// Throws away the current order and opens a fresh one.
    ///
    /// # Errors
    /// [`OrderError::NumbersExhausted`] when no order number is left; the
    /// current order is kept.
    pub fn reset_current_order(&mut self) -> Result<OrderNumber, OrderError> {
        let order = self.open_next()?;
        let number = order.number();
        if let Some(discarded) = self.current.replace(order) {
            info!(order_number = %discarded.number(), size = discarded.len(), "Order discarded");
        }
        info!(order_number = %number, "Order opened");
        Ok(number)
    }

    /// Moves the current order to the placed list and opens a fresh one.
    ///
    /// Returns the placed order's number. An empty or not yet opened current
    /// order is left alone and no order number is used up.
    ///
    /// # Errors
    /// [`OrderError::NumbersExhausted`] when no number is left for the next
    /// order; nothing is placed.
    pub fn place_current_order(&mut self) -> Result<Option<OrderNumber>, OrderError> {
        let Some(current) = self.current.as_ref() else {
            warn!("No current order to place");
            return Ok(None);
        };
        if current.is_empty() {
            warn!(order_number = %current.number(), "Cannot place an empty order");
            return Ok(None);
        }

        let next = self.open_next()?;
        let next_number = next.number();
        let Some(placed) = self.current.replace(next) else {
            return Ok(None);
        };
        let number = placed.number();
        info!(order_number = %number, size = placed.len(), total = placed.total_with_tax(), "Order placed");
        info!(order_number = %next_number, "Order opened");
        self.placed.push(placed);
        Ok(Some(number))
    }

    /// Records an order built outside the session as placed.
    pub fn add_placed_order(&mut self, order: Order) {
        debug!(order_number = %order.number(), "add_placed_order called");
        self.placed.push(order);
    }

    pub fn placed_orders(&self) -> &[Order] {
        &self.placed
    }

    pub fn find_placed_order(&self, number: OrderNumber) -> Option<&Order> {
        self.placed.iter().find(|order| order.number() == number)
    }

    /// Cancels a placed order, returning it.
    ///
    /// # Errors
    /// [`OrderError::NotFound`] when no placed order has that number.
    pub fn cancel_placed_order(&mut self, number: OrderNumber) -> Result<Order, OrderError> {
        let Some(position) = self.placed.iter().position(|order| order.number() == number) else {
            warn!(order_number = %number, "Not found");
            return Err(OrderError::NotFound(number));
        };
        let order = self.placed.remove(position);
        info!(order_number = %number, remaining = self.placed.len(), "Order cancelled");
        Ok(order)
    }

    /// Writes every placed order to `writer`, see [`write_orders`].
    pub fn export_placed_orders<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        write_orders(&self.placed, writer)
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}
