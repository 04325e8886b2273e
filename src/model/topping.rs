use crate::model::normalize_label;
use crate::pizza::PizzaError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The closed set of toppings the kitchen stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topping {
    Sausage,
    Pepperoni,
    GreenPepper,
    Onion,
    Mushroom,
    BbqChicken,
    Provolone,
    Cheddar,
    Beef,
    Ham,
    Olive,
    Spinach,
    Pineapple,
}

impl Topping {
    /// Every topping, in menu order.
    pub const ALL: [Topping; 13] = [
        Topping::Sausage,
        Topping::Pepperoni,
        Topping::GreenPepper,
        Topping::Onion,
        Topping::Mushroom,
        Topping::BbqChicken,
        Topping::Provolone,
        Topping::Cheddar,
        Topping::Beef,
        Topping::Ham,
        Topping::Olive,
        Topping::Spinach,
        Topping::Pineapple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topping::Sausage => "SAUSAGE",
            Topping::Pepperoni => "PEPPERONI",
            Topping::GreenPepper => "GREEN_PEPPER",
            Topping::Onion => "ONION",
            Topping::Mushroom => "MUSHROOM",
            Topping::BbqChicken => "BBQ_CHICKEN",
            Topping::Provolone => "PROVOLONE",
            Topping::Cheddar => "CHEDDAR",
            Topping::Beef => "BEEF",
            Topping::Ham => "HAM",
            Topping::Olive => "OLIVE",
            Topping::Spinach => "SPINACH",
            Topping::Pineapple => "PINEAPPLE",
        }
    }
}

impl Display for Topping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topping {
    type Err = PizzaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Topping::ALL
            .into_iter()
            .find(|topping| topping.as_str() == normalized)
            .ok_or_else(|| PizzaError::UnknownTopping(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_labels() {
        assert_eq!("Green Pepper".parse::<Topping>(), Ok(Topping::GreenPepper));
        assert_eq!("bbq-chicken".parse::<Topping>(), Ok(Topping::BbqChicken));
        assert_eq!(
            "anchovy".parse::<Topping>(),
            Err(PizzaError::UnknownTopping("anchovy".to_string()))
        );
    }

    #[test]
    fn every_topping_round_trips_through_its_label() {
        for topping in Topping::ALL {
            assert_eq!(topping.to_string().parse::<Topping>(), Ok(topping));
        }
    }
}
