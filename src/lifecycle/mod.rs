//! # Session Lifecycle
//!
//! Everything a front end needs to run an ordering session:
//!
//! - [`OrderSession`] - the caller-owned container for the current order,
//!   the placed orders and the order-number generator
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure
//!
//! ## Passing the session around
//!
//! The session is an ordinary value. Screens that need it borrow it:
//!
//! ```rust
//! use pizzeria::lifecycle::OrderSession;
//! use pizzeria::model::{Size, Style};
//!
//! fn add_large_deluxe(session: &mut OrderSession, style: Style) {
//!     let mut pizza = style.factory().create_deluxe();
//!     pizza.set_size(Size::Large);
//!     session.current_order_mut().add_pizza(pizza);
//! }
//!
//! let mut session = OrderSession::new();
//! add_large_deluxe(&mut session, Style::Chicago);
//! assert_eq!(session.current_order().subtotal(), 20.99);
//! ```
//!
//! Two sessions never share numbers or orders.

pub mod order_session;
pub mod tracing;

pub use order_session::*;
pub use self::tracing::setup_tracing;
