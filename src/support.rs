//! Supporting utilities used by models and the form.

pub mod constraint;
pub mod units;
