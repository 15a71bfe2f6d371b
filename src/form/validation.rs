use thiserror::Error;

use crate::support::constraint::{Constrained, NonNegative};

/// Reasons the form refuses to run a conversion.
///
/// The display text of each variant is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// No text was entered.
    #[error("Please enter a value")]
    Empty,

    /// The text is not a finite number, or the number is negative.
    #[error("Please enter a valid positive number")]
    Invalid,
}

/// Validates raw input text before it reaches the converter.
///
/// Emptiness is checked on the raw text, so whitespace-only input is not
/// empty and is rejected as [`InputError::Invalid`] instead. Leading and
/// trailing control characters and spaces around a number are ignored.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for empty text and [`InputError::Invalid`]
/// for text that does not parse, is infinite or `NaN`, or is negative.
///
/// # Example
///
/// ```
/// use length_converter::form::{validate, InputError};
///
/// assert_eq!(validate("2.5").unwrap().into_inner(), 2.5);
/// assert_eq!(validate(""), Err(InputError::Empty));
/// assert_eq!(validate("-5"), Err(InputError::Invalid));
/// ```
pub fn validate(input: &str) -> Result<Constrained<f64, NonNegative>, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    let value: f64 = input
        .trim_matches(|c: char| c <= ' ')
        .parse()
        .map_err(|_| InputError::Invalid)?;
    if !value.is_finite() {
        return Err(InputError::Invalid);
    }

    NonNegative::new(value).map_err(|_| InputError::Invalid)
}
