use std::fmt;

use crate::support::units::{Measurement, Notation, Unit};

/// Input to the [`LengthConverter`](super::LengthConverter) model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    /// Magnitude to convert, in `from` units.
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

impl ConversionRequest {
    #[must_use]
    pub fn new(value: f64, from: Unit, to: Unit) -> Self {
        Self { value, from, to }
    }

    /// Builds a request converting `measurement` into `to`.
    #[must_use]
    pub fn from_measurement(measurement: Measurement, to: Unit) -> Self {
        Self::new(measurement.magnitude(), measurement.unit(), to)
    }
}

/// Output of the [`LengthConverter`](super::LengthConverter) model.
///
/// Displays as `"{value} {from} = {result} {to}"`, with both numbers printed
/// through [`Notation`]: whole numbers show as `1.0`, and very small or large
/// magnitudes switch to scientific notation such as `6.21371E-4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub from: Unit,
    pub result: f64,
    pub to: Unit,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            Notation(self.value),
            self.from,
            Notation(self.result),
            self.to
        )
    }
}
