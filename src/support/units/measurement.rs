use std::fmt;

use uom::si::{f64::Length, length::meter};

use crate::{
    models::length::convert,
    support::constraint::{Constrained, ConstraintResult, NonNegative},
};

use super::{Notation, Unit};

/// A non-negative length expressed in one of the supported [units](Unit).
///
/// Measurements are transient: one is built per conversion request and
/// dropped once the result has been produced.
///
/// # Example
///
/// ```
/// use length_converter::support::units::{Measurement, Unit};
///
/// let m = Measurement::new(2.0, Unit::Metre).unwrap();
/// let mm = m.in_unit(Unit::Millimetre);
/// assert_eq!(mm.magnitude(), 2000.0);
///
/// assert!(Measurement::new(-1.0, Unit::Foot).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    magnitude: Constrained<f64, NonNegative>,
    unit: Unit,
}

impl Measurement {
    /// Constructs a measurement, checking that the magnitude is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if `magnitude` is negative or `NaN`.
    pub fn new(magnitude: f64, unit: Unit) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(NonNegative::new(magnitude)?, unit))
    }

    /// Constructs a measurement from a pre-validated magnitude.
    #[must_use]
    pub fn from_constrained(magnitude: Constrained<f64, NonNegative>, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Expresses a [`uom`] length in the given unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is negative or `NaN`.
    pub fn from_length(length: Length, unit: Unit) -> ConstraintResult<Self> {
        Self::new(length.get::<meter>() * unit.per_metre(), unit)
    }

    /// Returns the magnitude in this measurement's unit.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude.into_inner()
    }

    /// Returns the unit the magnitude is expressed in.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the same length expressed in `target`.
    #[must_use]
    pub fn in_unit(&self, target: Unit) -> Self {
        // Every per-metre factor is positive, so the sign is preserved.
        let value = convert(self.magnitude(), self.unit, target);
        Self::from_constrained(Constrained::new_unchecked(value), target)
    }

    /// Returns this measurement as a [`uom`] length.
    ///
    /// The fixed per-metre factor of [`Unit`] is used, so a mile converts to
    /// `1 / 0.000621371` metres rather than the exact 1609.344.
    #[must_use]
    pub fn to_length(&self) -> Length {
        Length::new::<meter>(self.magnitude() / self.unit.per_metre())
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Notation(self.magnitude()), self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{foot, millimeter};

    #[test]
    fn to_length_uses_fixed_factors() {
        let mm = Measurement::new(250.0, Unit::Millimetre).unwrap();
        assert_relative_eq!(mm.to_length().get::<meter>(), 0.25);
        assert_relative_eq!(mm.to_length().get::<millimeter>(), 250.0, epsilon = 1e-9);

        let mile = Measurement::new(1.0, Unit::Mile).unwrap();
        assert_relative_eq!(mile.to_length().get::<meter>(), 1.0 / 0.000_621_371);
    }

    #[test]
    fn from_length() {
        let length = Length::new::<meter>(10.0);
        let feet = Measurement::from_length(length, Unit::Foot).unwrap();
        assert_eq!(feet.unit(), Unit::Foot);
        assert_relative_eq!(feet.magnitude(), 32.8084);

        // The fixed foot factor is within 1e-6 of the exact definition.
        assert_relative_eq!(feet.magnitude(), length.get::<foot>(), max_relative = 1e-6);

        assert!(Measurement::from_length(Length::new::<meter>(-1.0), Unit::Metre).is_err());
    }

    #[test]
    fn in_unit_round_trips() {
        let start = Measurement::new(3.5, Unit::Foot).unwrap();
        let back = start.in_unit(Unit::Mile).in_unit(Unit::Foot);
        assert_relative_eq!(back.magnitude(), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn in_unit_keeps_zero_and_small_values() {
        let zero = Measurement::new(0.0, Unit::Mile).unwrap().in_unit(Unit::Millimetre);
        assert_eq!(zero.magnitude(), 0.0);

        let tiny = Measurement::new(1e-300, Unit::Millimetre).unwrap().in_unit(Unit::Mile);
        assert!(tiny.magnitude() >= 0.0);
        assert_eq!(tiny.unit(), Unit::Mile);
    }

    #[test]
    fn display() {
        let m = Measurement::new(1.0, Unit::Millimetre).unwrap();
        assert_eq!(m.to_string(), "1.0 Millimetre");

        let m = Measurement::new(2.5e7, Unit::Foot).unwrap();
        assert_eq!(m.to_string(), "2.5E7 Foot");
    }
}
