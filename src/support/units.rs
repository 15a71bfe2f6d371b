//! Supported length units and their conversion factors.
//!
//! The metre is the base unit. Each [`Unit`] carries a fixed factor saying how
//! many of that unit make up one metre:
//!
//! | Unit         | Symbol | Per metre   |
//! |--------------|--------|-------------|
//! | Metre        | `m`    | 1           |
//! | Millimetre   | `mm`   | 1000        |
//! | Mile         | `mi`   | 0.000621371 |
//! | Foot         | `ft`   | 3.28084     |
//!
//! The mile and foot factors are the rounded values used by the converter and
//! intentionally differ slightly from the exact international definitions in
//! [`uom`]. Interop with [`uom`] goes through [`Measurement::to_length`].

mod measurement;
mod notation;

use std::{fmt, str::FromStr};

use thiserror::Error;

pub use measurement::Measurement;
pub use notation::Notation;

/// A supported length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Metre,
    Millimetre,
    Mile,
    Foot,
}

/// Per-unit data, in the order of [`Unit::ALL`].
static TABLE: [UnitInfo; 4] = [
    UnitInfo {
        label: "Metre",
        plural: "Metres",
        symbol: "m",
        per_metre: 1.0,
    },
    UnitInfo {
        label: "Millimetre",
        plural: "Millimetres",
        symbol: "mm",
        per_metre: 1000.0,
    },
    UnitInfo {
        label: "Mile",
        plural: "Miles",
        symbol: "mi",
        per_metre: 0.000_621_371,
    },
    UnitInfo {
        label: "Foot",
        plural: "Feet",
        symbol: "ft",
        per_metre: 3.280_84,
    },
];

struct UnitInfo {
    label: &'static str,
    plural: &'static str,
    symbol: &'static str,
    per_metre: f64,
}

impl Unit {
    /// All supported units, in display order.
    pub const ALL: [Unit; 4] = [Unit::Metre, Unit::Millimetre, Unit::Mile, Unit::Foot];

    /// The base unit all conversions pass through.
    pub const BASE: Unit = Unit::Metre;

    const fn index(self) -> usize {
        match self {
            Unit::Metre => 0,
            Unit::Millimetre => 1,
            Unit::Mile => 2,
            Unit::Foot => 3,
        }
    }

    fn info(self) -> &'static UnitInfo {
        &TABLE[self.index()]
    }

    /// Returns how many of this unit make up one metre.
    #[must_use]
    pub fn per_metre(self) -> f64 {
        self.info().per_metre
    }

    /// Returns the display label, such as `"Millimetre"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Returns the abbreviated symbol, such as `"mm"`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text does not name a supported unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit `{text}` (expected one of: Metre, Millimetre, Mile, Foot)")]
pub struct UnitParseError {
    /// The rejected text.
    pub text: String,
}

/// Parses a unit from its label, plural label, or symbol.
///
/// Matching ignores ASCII case and surrounding whitespace.
///
/// ```
/// use length_converter::support::units::Unit;
///
/// assert_eq!("Foot".parse(), Ok(Unit::Foot));
/// assert_eq!(" MM ".parse(), Ok(Unit::Millimetre));
/// assert_eq!("miles".parse(), Ok(Unit::Mile));
/// assert!("furlong".parse::<Unit>().is_err());
/// ```
impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| {
                let info = unit.info();
                [info.label, info.plural, info.symbol]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(text))
            })
            .ok_or_else(|| UnitParseError {
                text: s.to_owned(),
            })
    }
}
