#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod group;
pub mod item;
pub mod validation;

pub use group::{Group, GroupParseError};
pub use item::{Field, FieldValue, Item};
pub use validation::rules::{
    ConstraintRule, ITEM_RULES, PRICE_MAX, PRICE_MIN, QUANTITY_MAX, RuleKind,
};
pub use validation::{ValidationResult, Validator, Violation, validate, validate_all};

/// Returns the crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
