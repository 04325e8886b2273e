use crate::model::normalize_label;
use crate::pizza::PizzaError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Crust types. The first three belong to Chicago style, the last three to NY style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Crust {
    DeepDish,
    Pan,
    Stuffed,
    Brooklyn,
    Thin,
    HandTossed,
}

impl Crust {
    pub const ALL: [Crust; 6] = [
        Crust::DeepDish,
        Crust::Pan,
        Crust::Stuffed,
        Crust::Brooklyn,
        Crust::Thin,
        Crust::HandTossed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Crust::DeepDish => "DEEP_DISH",
            Crust::Pan => "PAN",
            Crust::Stuffed => "STUFFED",
            Crust::Brooklyn => "BROOKLYN",
            Crust::Thin => "THIN",
            Crust::HandTossed => "HAND_TOSSED",
        }
    }

    /// The style this crust is conventionally served with.
    pub fn style(self) -> Style {
        match self {
            Crust::DeepDish | Crust::Pan | Crust::Stuffed => Style::Chicago,
            Crust::Brooklyn | Crust::Thin | Crust::HandTossed => Style::Ny,
        }
    }
}

impl Display for Crust {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Crust {
    type Err = PizzaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Crust::ALL
            .into_iter()
            .find(|crust| crust.as_str() == normalized)
            .ok_or_else(|| PizzaError::UnknownCrust(s.to_string()))
    }
}

/// A crust/recipe convention. Selects which crust each pizza type is baked on,
/// see [`PizzaFactory`](crate::pizza::PizzaFactory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Style {
    Chicago,
    Ny,
}

impl Style {
    /// The label stamped on pizzas produced for this style.
    pub fn label(self) -> &'static str {
        match self {
            Style::Chicago => "Chicago Style",
            Style::Ny => "NY Style",
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Style {
    type Err = PizzaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "CHICAGO" | "CHICAGO_STYLE" => Ok(Style::Chicago),
            "NY" | "NY_STYLE" | "NEW_YORK" | "NEW_YORK_STYLE" => Ok(Style::Ny),
            _ => Err(PizzaError::UnknownStyle(s.to_string())),
        }
    }
}
