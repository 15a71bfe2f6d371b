//! Length conversion through the metre.

use crate::support::units::Unit;

/// Converts `value` from one unit to another.
///
/// The value is first expressed in metres, then in the target unit, using the
/// fixed factors of [`Unit::per_metre`]. No rounding is applied. The function
/// is linear, so zero and negative inputs convert like any other value.
///
/// ```
/// use length_converter::models::length::convert;
/// use length_converter::support::units::Unit;
///
/// assert_eq!(convert(1.0, Unit::Metre, Unit::Millimetre), 1000.0);
/// assert_eq!(convert(0.0, Unit::Foot, Unit::Metre), 0.0);
/// ```
#[must_use]
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    scale(value, from.per_metre(), to.per_metre())
}

/// Converts `value` between units named by their labels.
///
/// Labels are parsed as in [`Unit`]'s `FromStr`. A side whose label is not a
/// supported unit is taken to be in metres, so an unknown label on both sides
/// returns `value` unchanged.
///
/// ```
/// use length_converter::models::length::convert_labelled;
///
/// assert_eq!(convert_labelled(2.0, "Metre", "Millimetre"), 2000.0);
/// assert_eq!(convert_labelled(2.0, "Cubit", "Millimetre"), 2000.0);
/// assert_eq!(convert_labelled(2.0, "Cubit", "Cubit"), 2.0);
/// ```
#[must_use]
pub fn convert_labelled(value: f64, from: &str, to: &str) -> f64 {
    scale(value, per_metre_or_base(from), per_metre_or_base(to))
}

fn per_metre_or_base(label: &str) -> f64 {
    label
        .parse::<Unit>()
        .map_or(Unit::BASE.per_metre(), Unit::per_metre)
}

fn scale(value: f64, from_per_metre: f64, to_per_metre: f64) -> f64 {
    let metres = value / from_per_metre;
    metres * to_per_metre
}
