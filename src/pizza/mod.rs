//! Pizza behaviour: topping rules, pricing and style factories.

pub mod entity;
pub mod error;
pub mod factory;
pub mod pricing;

pub use entity::*;
pub use error::*;
pub use factory::*;
pub use pricing::*;
