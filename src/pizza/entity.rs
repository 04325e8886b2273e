//! Topping rules, sizing and pricing for [`Pizza`].

use super::{PizzaError, PriceCalculator};
use crate::model::{Pizza, PizzaCreate, Size, Topping};
use tracing::{debug, warn};

/// Most toppings a Build Your Own pizza can carry.
pub const MAX_TOPPINGS: usize = 7;

impl Pizza {
    /// Builds a pizza from a menu selection.
    ///
    /// The style's factory supplies the crust unless the request names one.
    /// Requested toppings go through [`add_topping`](Self::add_topping), so the
    /// ceiling applies. A preset only accepts an empty list or its own recipe.
    pub fn from_create_params(params: PizzaCreate) -> Result<Self, PizzaError> {
        debug!(?params, "Create");
        let crust = params
            .crust
            .unwrap_or_else(|| params.style.factory().crust_for(params.kind));
        let mut pizza = Pizza::new(params.kind, crust, params.size, params.style.label());

        if params.kind.is_preset() {
            if !params.toppings.is_empty() && params.toppings != pizza.toppings {
                warn!(kind = %params.kind, "Preset toppings cannot be changed");
                return Err(PizzaError::FixedToppings(params.kind));
            }
        } else {
            for topping in params.toppings {
                pizza.add_topping(topping)?;
            }
        }
        Ok(pizza)
    }

    /// Adds a topping to a Build Your Own pizza.
    ///
    /// # Errors
    /// - [`PizzaError::TooManyToppings`] once [`MAX_TOPPINGS`] are on; the list is left as is
    /// - [`PizzaError::FixedToppings`] for presets
    pub fn add_topping(&mut self, topping: Topping) -> Result<(), PizzaError> {
        if self.kind.is_preset() {
            return Err(PizzaError::FixedToppings(self.kind));
        }
        if self.toppings.len() >= MAX_TOPPINGS {
            warn!(%topping, count = self.toppings.len(), "Topping rejected");
            return Err(PizzaError::TooManyToppings { max: MAX_TOPPINGS });
        }
        self.toppings.push(topping);
        debug!(%topping, count = self.toppings.len(), "Topping added");
        Ok(())
    }

    /// Removes the first matching topping. Absent toppings are ignored.
    ///
    /// # Errors
    /// [`PizzaError::FixedToppings`] for presets.
    pub fn remove_topping(&mut self, topping: Topping) -> Result<(), PizzaError> {
        if self.kind.is_preset() {
            return Err(PizzaError::FixedToppings(self.kind));
        }
        if let Some(position) = self.toppings.iter().position(|t| *t == topping) {
            self.toppings.remove(position);
            debug!(%topping, count = self.toppings.len(), "Topping removed");
        }
        Ok(())
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Price in dollars, rounded to cents.
    pub fn price(&self) -> f64 {
        PriceCalculator::price(self.kind, self.size, self.toppings.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Crust, PizzaKind, Style};

    fn build_your_own(crust: Crust, size: Size) -> Pizza {
        Pizza::new(PizzaKind::BuildYourOwn, crust, size, "Build Your Own")
    }

    #[test]
    fn price_updates_after_removing_a_topping() {
        let mut pizza = build_your_own(Crust::HandTossed, Size::Large);
        for topping in [Topping::Pepperoni, Topping::Sausage, Topping::Olive, Topping::Mushroom] {
            pizza.add_topping(topping).unwrap();
        }
        assert_eq!(pizza.price(), 19.75);

        pizza.remove_topping(Topping::Mushroom).unwrap();
        assert_eq!(pizza.price(), 18.06);
    }

    #[test]
    fn small_with_three_toppings() {
        let mut pizza = build_your_own(Crust::HandTossed, Size::Small);
        pizza.add_topping(Topping::Pepperoni).unwrap();
        pizza.add_topping(Topping::Sausage).unwrap();
        pizza.add_topping(Topping::Olive).unwrap();
        assert_eq!(pizza.price(), 14.06);
    }

    #[test]
    fn large_with_max_toppings() {
        let mut pizza = build_your_own(Crust::DeepDish, Size::Large);
        for topping in &Topping::ALL[..MAX_TOPPINGS] {
            pizza.add_topping(*topping).unwrap();
        }
        assert_eq!(pizza.price(), 24.82);
    }

    #[test]
    fn eighth_topping_is_rejected() {
        let mut pizza = build_your_own(Crust::HandTossed, Size::Small);
        for topping in &Topping::ALL[..MAX_TOPPINGS] {
            pizza.add_topping(*topping).unwrap();
        }
        let before = pizza.toppings().to_vec();

        let err = pizza.add_topping(Topping::Ham).unwrap_err();
        assert_eq!(err, PizzaError::TooManyToppings { max: 7 });
        assert_eq!(err.to_string(), "Maximum of 7 toppings allowed.");
        assert_eq!(pizza.toppings(), before.as_slice());
    }

    #[test]
    fn removing_an_absent_topping_is_a_no_op() {
        let mut pizza = build_your_own(Crust::Thin, Size::Medium);
        pizza.add_topping(Topping::Spinach).unwrap();
        pizza.remove_topping(Topping::Pineapple).unwrap();
        assert_eq!(pizza.toppings(), &[Topping::Spinach]);
    }

    #[test]
    fn duplicate_toppings_are_allowed_and_removed_one_at_a_time() {
        let mut pizza = build_your_own(Crust::Thin, Size::Medium);
        pizza.add_topping(Topping::Cheddar).unwrap();
        pizza.add_topping(Topping::Cheddar).unwrap();
        pizza.remove_topping(Topping::Cheddar).unwrap();
        assert_eq!(pizza.toppings(), &[Topping::Cheddar]);
    }

    #[test]
    fn preset_toppings_are_fixed() {
        let mut pizza = Pizza::new(PizzaKind::Deluxe, Crust::Brooklyn, Size::Medium, "NY Style");
        assert_eq!(
            pizza.add_topping(Topping::Ham),
            Err(PizzaError::FixedToppings(PizzaKind::Deluxe))
        );
        assert_eq!(
            pizza.remove_topping(Topping::Onion),
            Err(PizzaError::FixedToppings(PizzaKind::Deluxe))
        );
        assert_eq!(pizza.toppings(), PizzaKind::Deluxe.default_toppings());
    }

    #[test]
    fn resizing_reprices() {
        let mut pizza = Pizza::new(PizzaKind::Meatzza, Crust::Stuffed, Size::Medium, "Chicago Style");
        assert_eq!(pizza.price(), 19.99);
        pizza.set_size(Size::Large);
        assert_eq!(pizza.price(), 21.99);
    }

    #[test]
    fn create_params_fall_back_to_style_crust() {
        let pizza = Pizza::from_create_params(PizzaCreate {
            kind: PizzaKind::BbqChicken,
            style: Style::Chicago,
            size: Size::Large,
            crust: None,
            toppings: Vec::new(),
        })
        .unwrap();
        assert_eq!(pizza.crust(), Crust::Pan);
        assert_eq!(pizza.style(), "Chicago Style");
        assert_eq!(pizza.price(), 19.99);
    }

    #[test]
    fn create_params_enforce_topping_ceiling() {
        let result = Pizza::from_create_params(PizzaCreate {
            kind: PizzaKind::BuildYourOwn,
            style: Style::Ny,
            size: Size::Small,
            crust: Some(Crust::Thin),
            toppings: vec![Topping::Olive; 8],
        });
        assert_eq!(result, Err(PizzaError::TooManyToppings { max: 7 }));
    }

    #[test]
    fn create_params_reject_altered_preset_recipe() {
        let result = Pizza::from_create_params(PizzaCreate {
            kind: PizzaKind::Meatzza,
            style: Style::Ny,
            size: Size::Small,
            crust: None,
            toppings: vec![Topping::Pineapple],
        });
        assert_eq!(result, Err(PizzaError::FixedToppings(PizzaKind::Meatzza)));
    }
}
