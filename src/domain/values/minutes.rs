//! Minute-precision durations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-negative duration with minute precision
///
/// Used for lateness and working-hours figures. The unsigned representation
/// makes negative durations unrepresentable; signed arithmetic coming from
/// instant subtraction goes through `from_signed`, which clamps at zero.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Minutes(u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Clamp a signed minute count at zero.
    pub fn from_signed(value: i64) -> Self {
        Self(value.max(0).min(u32::MAX as i64) as u32)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn add(&self, other: Minutes) -> Minutes {
        Minutes(self.0.saturating_add(other.0))
    }

    /// Subtraction clamps at zero.
    pub fn saturating_sub(&self, other: Minutes) -> Minutes {
        Minutes(self.0.saturating_sub(other.0))
    }

    /// Format as "H hours M minutes", suppressing whichever unit is zero.
    pub fn to_hours_and_minutes(&self) -> String {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        match (hours, minutes) {
            (0, m) => format!("{} minutes", m),
            (h, 0) => format!("{} hours", h),
            (h, m) => format!("{} hours {} minutes", h, m),
        }
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hours_and_minutes())
    }
}
