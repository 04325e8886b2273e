use crate::model::{normalize_label, Crust, Size, Style, Topping};
use crate::pizza::{PizzaError, MAX_TOPPINGS};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Which menu item a pizza is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PizzaKind {
    Deluxe,
    Meatzza,
    BbqChicken,
    BuildYourOwn,
}

impl PizzaKind {
    pub const ALL: [PizzaKind; 4] = [
        PizzaKind::Deluxe,
        PizzaKind::Meatzza,
        PizzaKind::BbqChicken,
        PizzaKind::BuildYourOwn,
    ];

    /// Menu label, also the key accepted by
    /// [`PriceCalculator::calculate_price`](crate::pizza::PriceCalculator::calculate_price).
    pub fn label(self) -> &'static str {
        match self {
            PizzaKind::Deluxe => "Deluxe",
            PizzaKind::Meatzza => "Meatzza",
            PizzaKind::BbqChicken => "BBQ Chicken",
            PizzaKind::BuildYourOwn => "Build Your Own",
        }
    }

    /// Preset pizzas come with a fixed recipe; Build Your Own does not.
    pub fn is_preset(self) -> bool {
        !matches!(self, PizzaKind::BuildYourOwn)
    }

    /// Toppings a freshly made pizza of this kind carries.
    pub fn default_toppings(self) -> &'static [Topping] {
        match self {
            PizzaKind::Deluxe => &[
                Topping::Sausage,
                Topping::Pepperoni,
                Topping::GreenPepper,
                Topping::Onion,
                Topping::Mushroom,
            ],
            PizzaKind::Meatzza => &[
                Topping::Sausage,
                Topping::Pepperoni,
                Topping::Beef,
                Topping::Ham,
            ],
            PizzaKind::BbqChicken => &[
                Topping::BbqChicken,
                Topping::GreenPepper,
                Topping::Provolone,
                Topping::Cheddar,
            ],
            PizzaKind::BuildYourOwn => &[],
        }
    }
}

impl Display for PizzaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PizzaKind {
    type Err = PizzaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "DELUXE" => Ok(PizzaKind::Deluxe),
            "MEATZZA" => Ok(PizzaKind::Meatzza),
            "BBQ_CHICKEN" | "BBQCHICKEN" => Ok(PizzaKind::BbqChicken),
            "BUILD_YOUR_OWN" | "BUILDYOUROWN" => Ok(PizzaKind::BuildYourOwn),
            _ => Err(PizzaError::UnknownPizzaKind(s.to_string())),
        }
    }
}

/// A pizza on an order.
///
/// The four menu items share one struct tagged with a [`PizzaKind`]. The kind
/// decides the default toppings and the price table.
///
/// See [`crate::pizza`] for topping rules ([`Pizza::add_topping`]),
/// pricing ([`Pizza::price`]) and request handling ([`Pizza::from_create_params`]).
///
/// Deserializing re-checks the topping rules: a preset must carry exactly its
/// recipe and a Build Your Own at most [`MAX_TOPPINGS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PizzaSnapshot")]
pub struct Pizza {
    pub(crate) kind: PizzaKind,
    pub(crate) crust: Crust,
    pub(crate) size: Size,
    pub(crate) style: String,
    pub(crate) toppings: Vec<Topping>,
}

impl Pizza {
    /// Creates a pizza of the given kind, loaded with the kind's default toppings.
    ///
    /// # Arguments
    /// * `kind` - Menu item
    /// * `crust` - Crust to bake on
    /// * `size` - Pizza size
    /// * `style` - Free-text style label (e.g. "Chicago Style")
    pub fn new(kind: PizzaKind, crust: Crust, size: Size, style: impl Into<String>) -> Self {
        Self {
            kind,
            crust,
            size,
            style: style.into(),
            toppings: kind.default_toppings().to_vec(),
        }
    }

    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    pub fn crust(&self) -> Crust {
        self.crust
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
}

/// Unchecked wire form of a [`Pizza`].
#[derive(Deserialize)]
struct PizzaSnapshot {
    kind: PizzaKind,
    crust: Crust,
    size: Size,
    style: String,
    #[serde(default)]
    toppings: Vec<Topping>,
}

impl TryFrom<PizzaSnapshot> for Pizza {
    type Error = PizzaError;

    fn try_from(snapshot: PizzaSnapshot) -> Result<Self, Self::Error> {
        if snapshot.kind.is_preset() {
            if snapshot.toppings != snapshot.kind.default_toppings() {
                return Err(PizzaError::FixedToppings(snapshot.kind));
            }
        } else if snapshot.toppings.len() > MAX_TOPPINGS {
            return Err(PizzaError::TooManyToppings { max: MAX_TOPPINGS });
        }

        Ok(Self {
            kind: snapshot.kind,
            crust: snapshot.crust,
            size: snapshot.size,
            style: snapshot.style,
            toppings: snapshot.toppings,
        })
    }
}

impl Display for Pizza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}), {} {}, Toppings: ",
            self.kind, self.style, self.size, self.crust
        )?;
        if self.toppings.is_empty() {
            f.write_str("None")?;
        } else {
            let names: Vec<&str> = self.toppings.iter().map(|t| t.as_str()).collect();
            write!(f, "[{}]", names.join(", "))?;
        }
        write!(f, " | Price: ${:.2}", self.price())
    }
}

/// Payload for making a pizza from a menu selection.
///
/// A missing `crust` falls back to the crust `style` uses for `kind`.
/// `toppings` only matter for Build Your Own; presets accept either nothing
/// or exactly their own recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaCreate {
    pub kind: PizzaKind,
    pub style: Style,
    pub size: Size,
    #[serde(default)]
    pub crust: Option<Crust>,
    #[serde(default)]
    pub toppings: Vec<Topping>,
}
