#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pizzeria
//!
//! > **The order and pricing domain behind a pizza-ordering front end.**
//!
//! This crate models the menu (toppings, crusts, sizes, styles), the four pizza
//! types, their prices, and customer orders with sales tax. Screens, dialogs and
//! file pickers live in the front end; everything they compute lives here.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One pizza type, tagged by kind
//! Deluxe, Meatzza, BBQ Chicken and Build Your Own share a single
//! [`Pizza`](model::Pizza) struct tagged with a [`PizzaKind`](model::PizzaKind).
//! The kind supplies the default toppings and the price table, so a price is one
//! `match` away and the set of pizzas is closed at compile time.
//!
//! ### Sessions instead of globals
//! The current order and the placed orders belong to an
//! [`OrderSession`](lifecycle::OrderSession) that the caller owns and passes
//! around. Order numbers come from the session's generator, never from a static.
//!
//! ### Type-Safe Error Handling
//! Each module defines its own error type ([`PizzaError`](pizza::PizzaError),
//! [`OrderError`](order::OrderError), [`ExportError`](order::ExportError)).
//! The `#[from]` attribute lets pizza failures bubble up through order operations with `?`.
//!
//! ### Observability
//! We use `tracing` everywhere with structured fields. See the
//! [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Menu ([`model`])
//! Pure data: [`Topping`](model::Topping), [`Crust`](model::Crust),
//! [`Size`](model::Size), [`Style`](model::Style), [`Pizza`](model::Pizza),
//! [`Order`](model::Order) and the [`PizzaCreate`](model::PizzaCreate) request payload.
//!
//! ### 2. The Kitchen ([`pizza`])
//! Topping rules (at most seven on a Build Your Own, presets are fixed),
//! [`PriceCalculator`](pizza::PriceCalculator), and the
//! [`PizzaFactory`](pizza::PizzaFactory) strategies for Chicago and NY style.
//!
//! ### 3. The Till ([`order`])
//! Adding and removing pizzas, subtotal, 6.625% sales tax, order numbering and
//! the plain-text export of placed orders.
//!
//! ### 4. The Session ([`lifecycle`])
//! [`OrderSession`](lifecycle::OrderSession) and [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use pizzeria::lifecycle::OrderSession;
//! use pizzeria::model::{Crust, Pizza, PizzaKind, Size, Topping};
//!
//! let mut pizza = Pizza::new(PizzaKind::BuildYourOwn, Crust::HandTossed, Size::Small, "NY Style");
//! pizza.add_topping(Topping::Pepperoni)?;
//! pizza.add_topping(Topping::Mushroom)?;
//! assert_eq!(pizza.price(), 12.37);
//!
//! let mut session = OrderSession::new();
//! session.current_order_mut().add_pizza(pizza);
//! assert_eq!(session.current_order().total_with_tax(), 13.19);
//! # Ok::<(), pizzeria::pizza::PizzaError>(())
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod order;
pub mod pizza;
