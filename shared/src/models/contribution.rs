//! Contribution percentage

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A member's contribution as a whole percentage, always within `0..=100`.
///
/// The only way to build a non-zero value is [`TryFrom<i64>`], so a
/// `Contribution` held anywhere in the program is in range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Contribution(u8);

/// Rejected contribution value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contribution {0} is outside 0..=100")]
pub struct ContributionOutOfRange(pub i64);

impl Contribution {
    /// Upper bound (inclusive)
    pub const MAX: u8 = 100;

    /// Value assigned to every new member
    pub const ZERO: Self = Self(0);

    /// The percentage value
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Contribution {
    type Error = ContributionOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or(ContributionOutOfRange(value))
    }
}

impl From<Contribution> for i64 {
    fn from(value: Contribution) -> Self {
        i64::from(value.0)
    }
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
