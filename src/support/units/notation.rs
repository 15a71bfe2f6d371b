use std::fmt;

/// Displays a magnitude the way the result line prints numbers.
///
/// Values with an absolute value in `[1e-3, 1e7)` print in plain decimal
/// notation; all others print in scientific notation with an upper-case `E`.
/// The mantissa always has a fractional part and uses the shortest digits
/// that round-trip, so no precision is lost.
///
/// ```
/// use length_converter::support::units::Notation;
///
/// assert_eq!(Notation(1000.0).to_string(), "1000.0");
/// assert_eq!(Notation(1e7).to_string(), "1.0E7");
/// assert_eq!(Notation(6.21371e-7).to_string(), "6.21371E-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notation(pub f64);

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return if value.is_nan() {
                f.write_str("NaN")
            } else if value > 0.0 {
                f.write_str("Infinity")
            } else {
                f.write_str("-Infinity")
            };
        }

        let magnitude = value.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            // Debug output is shortest round-trip and keeps a trailing `.0`.
            return write!(f, "{value:?}");
        }

        let scientific = format!("{value:e}");
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        if mantissa.contains('.') {
            write!(f, "{mantissa}E{exponent}")
        } else {
            write!(f, "{mantissa}.0E{exponent}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(value: f64) -> String {
        Notation(value).to_string()
    }

    #[test]
    fn plain_range() {
        assert_eq!(show(0.0), "0.0");
        assert_eq!(show(1.0), "1.0");
        assert_eq!(show(0.001), "0.001");
        assert_eq!(show(5280.001_802_465_837_5), "5280.0018024658375");
        assert_eq!(show(9_999_999.5), "9999999.5");
    }

    #[test]
    fn scientific_range() {
        assert_eq!(show(1e7), "1.0E7");
        assert_eq!(show(1.5e9), "1.5E9");
        assert_eq!(show(6.21371e-7), "6.21371E-7");
        assert_eq!(show(0.000_999), "9.99E-4");
        assert_eq!(show(-2e8), "-2.0E8");
    }

    #[test]
    fn non_finite() {
        assert_eq!(show(f64::NAN), "NaN");
        assert_eq!(show(f64::INFINITY), "Infinity");
        assert_eq!(show(f64::NEG_INFINITY), "-Infinity");
    }
}
