//! Interactive conversion form.
//!
//! [`Form`] holds the state of a single conversion screen: the text typed by
//! the user, the two selected units, the current error message, and the last
//! result line. Front ends drive it through setters and [`Form::submit`], and
//! read back whatever they need to render.
//!
//! Validation happens here, in front of the converter: the converter itself
//! never fails, so a submission either stops at [`validate`] or produces a
//! result.
//!
//! ```
//! use length_converter::form::{Form, InputError};
//! use length_converter::support::units::Unit;
//!
//! let mut form = Form::default();
//! form.set_input("1");
//! form.select_from(Unit::Mile);
//! form.select_to(Unit::Foot);
//! assert!(form.submit().is_ok());
//! assert!(form.result().starts_with("1.0 Mile = 5280.00"));
//!
//! form.set_input("abc");
//! assert!(form.submit().is_err());
//! assert_eq!(form.error(), Some(InputError::Invalid));
//! ```

mod config;
mod validation;

pub use config::FormConfig;
pub use validation::{InputError, validate};

use tracing::debug;
use twine_core::Model;

use crate::{
    models::length::{Conversion, ConversionRequest, LengthConverter},
    support::units::{Measurement, Unit},
};

/// Result text shown before the first successful conversion.
pub const RESULT_PLACEHOLDER: &str = "Result will be shown here";

/// State of the conversion form.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    input: String,
    from: Unit,
    to: Unit,
    error: Option<InputError>,
    result: String,
}

impl Form {
    /// Creates an empty form with the configured initial selections.
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self {
            input: String::new(),
            from: config.from,
            to: config.to,
            error: None,
            result: RESULT_PLACEHOLDER.to_owned(),
        }
    }

    /// Replaces the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Selects the unit the input is expressed in.
    pub fn select_from(&mut self, unit: Unit) {
        self.from = unit;
    }

    /// Selects the unit to convert into.
    pub fn select_to(&mut self, unit: Unit) {
        self.to = unit;
    }

    /// Validates the input and, if it passes, converts it.
    ///
    /// On success the error is cleared and the result line is replaced.
    /// On failure the error message is set and the previous result line is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the input text fails validation.
    pub fn submit(&mut self) -> Result<Conversion, InputError> {
        let value = match validate(&self.input) {
            Ok(value) => value,
            Err(err) => {
                debug!(input = %self.input, %err, "rejected form input");
                self.error = Some(err);
                return Err(err);
            }
        };

        self.error = None;
        let measurement = Measurement::from_constrained(value, self.from);
        let request = ConversionRequest::from_measurement(measurement, self.to);
        let Ok(conversion) = LengthConverter.call(&request);
        self.result = conversion.to_string();
        Ok(conversion)
    }

    /// Returns the current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the selected source unit.
    #[must_use]
    pub fn from(&self) -> Unit {
        self.from
    }

    /// Returns the selected target unit.
    #[must_use]
    pub fn to(&self) -> Unit {
        self.to
    }

    /// Returns the error of the last failed submission, if it has not been
    /// cleared by a successful one. Its display text is the user-facing message.
    #[must_use]
    pub fn error(&self) -> Option<InputError> {
        self.error
    }

    /// Returns the current result line.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let form = Form::default();
        assert_eq!(form.input(), "");
        assert_eq!(form.from(), Unit::Metre);
        assert_eq!(form.to(), Unit::Metre);
        assert_eq!(form.error(), None);
        assert_eq!(form.result(), RESULT_PLACEHOLDER);
    }

    #[test]
    fn converts_valid_input() {
        let mut form = Form::new(FormConfig {
            from: Unit::Metre,
            to: Unit::Millimetre,
        });
        form.set_input("1");

        let conversion = form.submit().unwrap();
        assert_eq!(conversion.result, 1000.0);
        assert_eq!(form.result(), "1.0 Metre = 1000.0 Millimetre");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn empty_input_keeps_previous_result() {
        let mut form = Form::default();
        form.select_from(Unit::Millimetre);
        form.set_input("1000");
        form.submit().unwrap();
        assert_eq!(form.result(), "1000.0 Millimetre = 1.0 Metre");

        form.set_input("");
        assert_eq!(form.submit(), Err(InputError::Empty));
        assert_eq!(form.error(), Some(InputError::Empty));
        assert_eq!(form.result(), "1000.0 Millimetre = 1.0 Metre");
    }

    #[test]
    fn invalid_inputs_set_error() {
        let mut form = Form::default();
        for text in ["-5", "abc"] {
            form.set_input(text);
            assert_eq!(form.submit(), Err(InputError::Invalid));
            assert_eq!(form.error(), Some(InputError::Invalid));
            assert_eq!(form.result(), RESULT_PLACEHOLDER);
        }
    }

    #[test]
    fn padded_input_converts() {
        let mut form = Form::default();
        form.select_to(Unit::Millimetre);
        form.set_input(" 5 ");
        assert_eq!(form.submit().map(|c| c.result), Ok(5000.0));
        assert_eq!(form.result(), "5.0 Metre = 5000.0 Millimetre");
    }

    #[test]
    fn large_results_use_scientific_notation() {
        let mut form = Form::new(FormConfig {
            from: Unit::Metre,
            to: Unit::Millimetre,
        });
        form.set_input("20000");
        form.submit().unwrap();
        assert_eq!(form.result(), "20000.0 Metre = 2.0E7 Millimetre");
    }

    #[test]
    fn success_clears_error() {
        let mut form = Form::default();
        form.submit().unwrap_err();
        assert!(form.error().is_some());

        form.set_input("0");
        form.select_from(Unit::Foot);
        form.submit().unwrap();
        assert_eq!(form.error(), None);
        assert_eq!(form.result(), "0.0 Foot = 0.0 Metre");
    }
}
