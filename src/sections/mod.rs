//! New-password policy sections
//!
//! Each section checks one rule of the password policy. The validator runs
//! them in order and reports only the first failure.

mod length;
mod variety;

pub use length::{length_section, password_length, LONG_LENGTH, MIN_LENGTH};
pub use variety::{
    digit_section, has_digit, has_lowercase, has_symbol, has_uppercase, lowercase_section,
    symbol_section, uppercase_section,
};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;

/// A named policy section, in the order the validator runs them.
pub type Section = (&'static str, fn(&str) -> SectionResult);

/// The new-password sections, in evaluation order.
pub const NEW_PASSWORD_SECTIONS: [Section; 5] = [
    ("length", length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
];
