//! # Length Converter
//!
//! Converts a length between metres, millimetres, miles, and feet.
//!
//! ## Crate layout
//!
//! - [`models`]: The conversion [`twine_core::Model`] and its pure core.
//! - [`support`]: Units, conversion factors, and numeric constraints.
//! - [`form`]: Interactive form state and the input validation gate.
//!
//! ## Conversion
//!
//! Every conversion goes through the metre: the value is first divided by the
//! source unit's per-metre factor and then multiplied by the target unit's.
//!
//! ```
//! use length_converter::{models::length::convert, support::units::Unit};
//!
//! assert_eq!(convert(1.0, Unit::Metre, Unit::Millimetre), 1000.0);
//! ```

pub mod form;
pub mod models;
pub mod support;
