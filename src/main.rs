//! Demo: one customer session from menu to exported receipts.
//!
//! 1. Build a Chicago Deluxe and a NY Build Your Own into the current order.
//! 2. Place it, then build and place a second order from menu requests.
//! 3. Export every placed order to stdout.

use pizzeria::lifecycle::{setup_tracing, OrderSession};
use pizzeria::model::{PizzaCreate, PizzaKind, Size, Style, Topping};
use tracing::{error, info};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting pizzeria demo session");

    let mut session = OrderSession::new();

    let span = tracing::info_span!("order_building");
    span.in_scope(|| -> Result<(), String> {
        let mut deluxe = Style::Chicago.factory().create_deluxe();
        deluxe.set_size(Size::Large);

        let mut custom = Style::Ny.factory().create_build_your_own();
        for topping in [Topping::Pepperoni, Topping::Sausage, Topping::Olive] {
            custom.add_topping(topping).map_err(|e| e.to_string())?;
        }

        let order = session.current_order_mut();
        order.add_pizza(deluxe);
        order.add_pizza(custom);
        info!(
            order_number = %order.number(),
            subtotal = order.subtotal(),
            tax = order.sales_tax(),
            total = order.total_with_tax(),
            "Current order"
        );
        Ok(())
    })?;

    let span = tracing::info_span!("checkout");
    span.in_scope(|| -> Result<(), String> {
        if session.place_current_order().map_err(|e| e.to_string())?.is_none() {
            error!("First order was empty");
        }
        Ok(())
    })?;

    let requests = [
        PizzaCreate {
            kind: PizzaKind::Meatzza,
            style: Style::Ny,
            size: Size::Small,
            crust: None,
            toppings: Vec::new(),
        },
        PizzaCreate {
            kind: PizzaKind::BuildYourOwn,
            style: Style::Chicago,
            size: Size::Medium,
            crust: None,
            toppings: vec![Topping::Spinach, Topping::Mushroom],
        },
    ];

    let span = tracing::info_span!("menu_requests");
    span.in_scope(|| -> Result<(), String> {
        for request in requests {
            session
                .current_order_mut()
                .add_pizza_request(Some(request))
                .map_err(|e| e.to_string())?;
        }
        Ok(())
    })?;

    match session.place_current_order().map_err(|e| e.to_string())? {
        Some(number) => info!(order_number = %number, "Second order placed"),
        None => error!("Second order was empty"),
    }

    let mut stdout = std::io::stdout().lock();
    session
        .export_placed_orders(&mut stdout)
        .map_err(|e| e.to_string())?;

    info!(placed = session.placed_orders().len(), "Demo completed successfully");
    Ok(())
}
