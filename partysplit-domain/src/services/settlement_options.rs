//! Tuning knobs for a settlement run.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Residual below which a debtor or creditor counts as settled.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvalidTolerance {
    /// Zero, negative and non-finite tolerances would never close a cursor.
    #[error("Tolerance must be a finite value greater than zero (found {0})")]
    NotPositive(f64),
    #[error("Tolerance is not a number: {0:?}")]
    Unparsable(String),
}

impl Tolerance {
    /// One cent in a two-decimal currency.
    pub const DEFAULT: Self = Self(0.01);

    pub fn new(value: f64) -> Result<Self, InvalidTolerance> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(InvalidTolerance::NotPositive(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_settled(self, remaining: f64) -> bool {
        remaining.abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tolerance {
    type Err = InvalidTolerance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidTolerance::Unparsable(s.to_string()))?;
        Self::new(value)
    }
}

/// Options for [`SettlementEngine`](crate::SettlementEngine).
///
/// # Example
/// ```
/// use partysplit_domain::services::{SettlementOptions, Tolerance};
///
/// let options = SettlementOptions {
///     tolerance: Tolerance::new(0.5).unwrap(),
/// };
/// assert_eq!(options.tolerance.value(), 0.5);
/// assert_eq!(SettlementOptions::default().tolerance, Tolerance::DEFAULT);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SettlementOptions {
    pub tolerance: Tolerance,
}

impl SettlementOptions {
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }
}
