use crate::support::units::Unit;

/// Initial selections for a [`Form`](super::Form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Unit the entered value is expressed in.
    pub from: Unit,

    /// Unit the result is expressed in.
    pub to: Unit,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            from: Unit::Metre,
            to: Unit::Metre,
        }
    }
}
