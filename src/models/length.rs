//! Length conversion model.
//!
//! This module provides the [`twine_core::Model`] implementation for length
//! conversion. The arithmetic lives in the internal `core` module and is also
//! re-exported as the free functions [`convert`] and [`convert_labelled`].

mod core;
mod request;

pub use self::core::{convert, convert_labelled};
pub use request::{Conversion, ConversionRequest};

use std::convert::Infallible;

use tracing::debug;
use twine_core::Model;

/// Stateless length converter exposed as a [`Model`].
///
/// # Example
///
/// ```
/// use length_converter::models::length::{ConversionRequest, LengthConverter};
/// use length_converter::support::units::Unit;
/// use twine_core::Model;
///
/// let request = ConversionRequest::new(1000.0, Unit::Millimetre, Unit::Metre);
/// let conversion = LengthConverter.call(&request).unwrap();
/// assert_eq!(conversion.result, 1.0);
/// assert_eq!(conversion.to_string(), "1000.0 Millimetre = 1.0 Metre");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthConverter;

impl Model for LengthConverter {
    type Input = ConversionRequest;
    type Output = Conversion;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let result = convert(input.value, input.from, input.to);
        debug!(value = input.value, from = %input.from, to = %input.to, result, "converted length");
        Ok(Conversion {
            value: input.value,
            from: input.from,
            result,
            to: input.to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::Unit;

    #[test]
    fn model_delegates_to_core() {
        let request = ConversionRequest::new(2.0, Unit::Mile, Unit::Foot);
        let conversion = LengthConverter.call(&request).unwrap();

        assert_eq!(conversion.value, 2.0);
        assert_eq!(conversion.from, Unit::Mile);
        assert_eq!(conversion.to, Unit::Foot);
        assert_relative_eq!(conversion.result, convert(2.0, Unit::Mile, Unit::Foot));
    }

    #[test]
    fn zero_stays_zero() {
        for from in Unit::ALL {
            for to in Unit::ALL {
                let request = ConversionRequest::new(0.0, from, to);
                assert_eq!(LengthConverter.call(&request).unwrap().result, 0.0);
            }
        }
    }
}
