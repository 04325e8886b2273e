//! Price tables and the label-driven price calculator.
//!
//! Every price in the crate comes from [`PriceTable`]; [`Pizza::price`](crate::model::Pizza::price)
//! and [`PriceCalculator`] both read from it.

use super::PizzaError;
use crate::model::{PizzaKind, Size, Topping};
use tracing::debug;

/// Charge per topping on a Build Your Own pizza.
pub const TOPPING_PRICE: f64 = 1.69;

/// Size-indexed base prices for one pizza kind, plus the per-topping charge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTable {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    /// Zero for presets, whose price ignores the topping count.
    pub per_topping: f64,
}

impl PriceTable {
    pub fn base(&self, size: Size) -> f64 {
        match size {
            Size::Small => self.small,
            Size::Medium => self.medium,
            Size::Large => self.large,
        }
    }
}

impl PizzaKind {
    pub fn price_table(self) -> PriceTable {
        match self {
            PizzaKind::Deluxe => PriceTable {
                small: 16.99,
                medium: 18.99,
                large: 20.99,
                per_topping: 0.0,
            },
            PizzaKind::Meatzza => PriceTable {
                small: 17.99,
                medium: 19.99,
                large: 21.99,
                per_topping: 0.0,
            },
            PizzaKind::BbqChicken => PriceTable {
                small: 14.99,
                medium: 16.99,
                large: 19.99,
                per_topping: 0.0,
            },
            PizzaKind::BuildYourOwn => PriceTable {
                small: 8.99,
                medium: 10.99,
                large: 12.99,
                per_topping: TOPPING_PRICE,
            },
        }
    }
}

/// Rounds a dollar amount to whole cents, halves away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Stateless price lookup.
pub struct PriceCalculator;

impl PriceCalculator {
    /// Price of a pizza of `kind` and `size` carrying `topping_count` toppings,
    /// rounded to cents. The count only matters for Build Your Own.
    pub fn price(kind: PizzaKind, size: Size, topping_count: usize) -> f64 {
        let table = kind.price_table();
        round_to_cents(table.base(size) + table.per_topping * topping_count as f64)
    }

    /// Prices a pizza from its menu label.
    ///
    /// `toppings` is required for `"Build Your Own"` and ignored otherwise.
    ///
    /// Labels are matched loosely: case is ignored, spaces and dashes count as
    /// underscores, and the run-together forms `"BBQCHICKEN"` and
    /// `"BUILDYOUROWN"` are accepted, so the enum names parse as well as the
    /// menu labels.
    ///
    /// # Errors
    /// - [`PizzaError::UnknownPizzaKind`] for a label that is not on the menu
    /// - [`PizzaError::MissingToppings`] for Build Your Own without a topping list
    pub fn calculate_price(
        pizza_type: &str,
        size: Size,
        toppings: Option<&[Topping]>,
    ) -> Result<f64, PizzaError> {
        let kind: PizzaKind = pizza_type.parse()?;
        let topping_count = match (kind, toppings) {
            (PizzaKind::BuildYourOwn, Some(toppings)) => toppings.len(),
            (PizzaKind::BuildYourOwn, None) => return Err(PizzaError::MissingToppings),
            _ => 0,
        };
        let price = Self::price(kind, size, topping_count);
        debug!(%kind, %size, topping_count, price, "Priced");
        Ok(price)
    }

    /// Same as [`calculate_price`](Self::calculate_price), with the size given as a label too.
    ///
    /// # Errors
    /// Additionally fails with [`PizzaError::UnknownSize`] for an unrecognized size.
    pub fn calculate_price_for_labels(
        pizza_type: &str,
        size: &str,
        toppings: Option<&[Topping]>,
    ) -> Result<f64, PizzaError> {
        Self::calculate_price(pizza_type, size.parse()?, toppings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Deluxe", Size::Small, 16.99)]
    #[case("Deluxe", Size::Medium, 18.99)]
    #[case("Deluxe", Size::Large, 20.99)]
    #[case("Meatzza", Size::Small, 17.99)]
    #[case("Meatzza", Size::Medium, 19.99)]
    #[case("Meatzza", Size::Large, 21.99)]
    #[case("BBQ Chicken", Size::Small, 14.99)]
    #[case("BBQ Chicken", Size::Medium, 16.99)]
    #[case("BBQ Chicken", Size::Large, 19.99)]
    fn preset_prices(#[case] label: &str, #[case] size: Size, #[case] expected: f64) {
        assert_eq!(PriceCalculator::calculate_price(label, size, None), Ok(expected));
    }

    #[test]
    fn presets_ignore_toppings() {
        let toppings = [Topping::Ham, Topping::Olive];
        assert_eq!(
            PriceCalculator::calculate_price("Deluxe", Size::Large, Some(&toppings)),
            Ok(20.99)
        );
    }

    #[rstest]
    fn build_your_own_adds_per_topping(
        #[values(Size::Small, Size::Medium, Size::Large)] size: Size,
        #[values(0, 1, 3, 7)] count: usize,
    ) {
        let toppings = vec![Topping::Onion; count];
        let base = PizzaKind::BuildYourOwn.price_table().base(size);
        assert_eq!(
            PriceCalculator::calculate_price("Build Your Own", size, Some(&toppings)),
            Ok(round_to_cents(base + TOPPING_PRICE * count as f64))
        );
    }

    #[test]
    fn build_your_own_needs_toppings() {
        assert_eq!(
            PriceCalculator::calculate_price("Build Your Own", Size::Small, None),
            Err(PizzaError::MissingToppings)
        );
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!(
            PriceCalculator::calculate_price("Calzone", Size::Small, None),
            Err(PizzaError::UnknownPizzaKind("Calzone".to_string()))
        );
        assert_eq!(
            PriceCalculator::calculate_price_for_labels("Deluxe", "JUMBO", None),
            Err(PizzaError::UnknownSize("JUMBO".to_string()))
        );
        assert_eq!(
            PriceCalculator::calculate_price_for_labels("Meatzza", "medium", None),
            Ok(19.99)
        );
    }

    #[test]
    fn rounds_half_cents_up() {
        assert_eq!(round_to_cents(14.059999999999999), 14.06);
        assert_eq!(round_to_cents(43.694925), 43.69);
        assert_eq!(round_to_cents(1.005000001), 1.01);
    }
}
