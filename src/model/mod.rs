//! Pure data structures for the pizzeria domain.
//!
//! Behaviour lives next door: topping rules and pricing in [`crate::pizza`],
//! order aggregation in [`crate::order`].

pub mod crust;
pub mod order;
pub mod pizza;
pub mod size;
pub mod topping;

pub use crust::*;
pub use order::*;
pub use pizza::*;
pub use size::*;
pub use topping::*;

/// Normalizes a user-facing label ("Hand-tossed", "green pepper") into the
/// constant form used by the enums ("HAND_TOSSED", "GREEN_PEPPER").
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_label;

    #[test]
    fn normalizes_spaces_hyphens_and_case() {
        assert_eq!(normalize_label("Hand-tossed"), "HAND_TOSSED");
        assert_eq!(normalize_label(" green pepper "), "GREEN_PEPPER");
        assert_eq!(normalize_label("BBQ Chicken"), "BBQ_CHICKEN");
    }
}
