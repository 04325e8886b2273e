//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. Output uses the
//! compact format without module paths (`with_target(false)`), so lines stay
//! short while structured fields such as `order_number` remain visible.
//!
//! ```bash
//! # State changes only: orders opened, pizzas added, orders placed
//! RUST_LOG=info cargo run
//!
//! # Full payloads at entry points, plus every price lookup
//! RUST_LOG=debug cargo run
//!
//! # Just the pricing module
//! RUST_LOG=pizzeria::pizza::pricing=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Orders**: opened, pizza added/removed, cleared, placed, cancelled, exported
//! - **Pizzas**: made by a style factory, toppings added/removed
//! - **Rejections**: topping ceiling, fixed preset recipes, empty place attempts
//!   (logged at `warn`)
//!
//! With `RUST_LOG=info` the demo prints something like:
//!
//! ```text
//! INFO order_building: Order opened order_number=1
//! INFO order_building: Pizza added order_number=1 size=1
//! INFO order_building: Pizza added order_number=1 size=2
//! INFO order_building: Current order order_number=1 subtotal=37.05 tax=2.45 total=39.5
//! INFO checkout: Order placed order_number=1 size=2 total=39.5
//! INFO checkout: Order opened order_number=2
//! ```
//!
//! Entry points log their full payload once at `debug`:
//!
//! ```rust,ignore
//! debug!(?pizza, "add_pizza called");
//! ```

/// Initializes the tracing subscriber for the application.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
