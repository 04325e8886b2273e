//! Style strategies: which crust each pizza type is baked on.

use crate::model::{Crust, Pizza, PizzaKind, Size, Style};
use tracing::debug;

/// Makes the four menu pizzas for one style.
///
/// Implementors only supply the crust table; every pizza comes out MEDIUM and
/// stamped with the style's label. Resize with [`Pizza::set_size`].
pub trait PizzaFactory {
    fn style(&self) -> Style;

    fn crust_for(&self, kind: PizzaKind) -> Crust;

    fn create(&self, kind: PizzaKind) -> Pizza {
        let pizza = Pizza::new(kind, self.crust_for(kind), Size::Medium, self.style().label());
        debug!(style = %self.style(), %kind, crust = %pizza.crust(), "Pizza made");
        pizza
    }

    fn create_deluxe(&self) -> Pizza {
        self.create(PizzaKind::Deluxe)
    }

    fn create_meatzza(&self) -> Pizza {
        self.create(PizzaKind::Meatzza)
    }

    fn create_bbq_chicken(&self) -> Pizza {
        self.create(PizzaKind::BbqChicken)
    }

    fn create_build_your_own(&self) -> Pizza {
        self.create(PizzaKind::BuildYourOwn)
    }
}

pub struct ChicagoPizza;

impl PizzaFactory for ChicagoPizza {
    fn style(&self) -> Style {
        Style::Chicago
    }

    fn crust_for(&self, kind: PizzaKind) -> Crust {
        match kind {
            PizzaKind::Deluxe => Crust::DeepDish,
            PizzaKind::BbqChicken | PizzaKind::BuildYourOwn => Crust::Pan,
            PizzaKind::Meatzza => Crust::Stuffed,
        }
    }
}

pub struct NyPizza;

impl PizzaFactory for NyPizza {
    fn style(&self) -> Style {
        Style::Ny
    }

    fn crust_for(&self, kind: PizzaKind) -> Crust {
        match kind {
            PizzaKind::Deluxe => Crust::Brooklyn,
            PizzaKind::BbqChicken => Crust::Thin,
            PizzaKind::Meatzza | PizzaKind::BuildYourOwn => Crust::HandTossed,
        }
    }
}

impl Style {
    pub fn factory(self) -> &'static dyn PizzaFactory {
        match self {
            Style::Chicago => &ChicagoPizza,
            Style::Ny => &NyPizza,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topping;

    #[test]
    fn chicago_crusts() {
        let factory = Style::Chicago.factory();
        assert_eq!(factory.create_deluxe().crust(), Crust::DeepDish);
        assert_eq!(factory.create_bbq_chicken().crust(), Crust::Pan);
        assert_eq!(factory.create_meatzza().crust(), Crust::Stuffed);
        assert_eq!(factory.create_build_your_own().crust(), Crust::Pan);
    }

    #[test]
    fn ny_crusts() {
        let factory = Style::Ny.factory();
        assert_eq!(factory.create_deluxe().crust(), Crust::Brooklyn);
        assert_eq!(factory.create_bbq_chicken().crust(), Crust::Thin);
        assert_eq!(factory.create_meatzza().crust(), Crust::HandTossed);
        assert_eq!(factory.create_build_your_own().crust(), Crust::HandTossed);
    }

    #[test]
    fn factory_pizzas_are_medium_and_labelled() {
        for style in [Style::Chicago, Style::Ny] {
            for kind in PizzaKind::ALL {
                let pizza = style.factory().create(kind);
                assert_eq!(pizza.size(), Size::Medium);
                assert_eq!(pizza.style(), style.label());
                assert_eq!(pizza.kind(), kind);
                assert_eq!(pizza.crust().style(), style);
            }
        }
    }

    #[test]
    fn factory_presets_carry_their_recipe() {
        let pizza = NyPizza.create_bbq_chicken();
        assert_eq!(
            pizza.toppings(),
            &[Topping::BbqChicken, Topping::GreenPepper, Topping::Provolone, Topping::Cheddar]
        );
        assert_eq!(pizza.price(), 16.99);
    }
}
