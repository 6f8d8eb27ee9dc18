use std::fmt;

use crate::error::{ensure_non_negative, Result};

/// A non-negative clearance between an item and a wall or neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gap(f64);

impl Gap {
    /// No clearance.
    pub const ZERO: Self = Self(0.0);

    /// Creates a gap of `value`, returning [`Gap::ZERO`] for zero.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Negative` if `value` is negative or NaN.
    pub fn of(value: f64) -> Result<Self> {
        ensure_non_negative("gap", value)?;
        if value <= 0.0 {
            return Ok(Self::ZERO);
        }
        Ok(Self(value))
    }

    /// Returns the clearance distance.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gap({:.2}m)", self.0)
    }
}
