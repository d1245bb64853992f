//! Loyalty programs a card's sign-up bonus can earn into.
//!
//! The set is closed: callers pick one of these values and the ranker never
//! has to cope with an unknown program. Text only becomes a
//! [`RewardsProgram`] through [`FromStr`], which is where unknown names are
//! rejected.
//!
//! # Examples
//! ```
//! use churner_core::RewardsProgram;
//!
//! assert_eq!(RewardsProgram::Velocity.as_str(), "velocity");
//! assert_eq!(RewardsProgram::Qantas.to_string(), "qantas");
//! assert_eq!(RewardsProgram::default(), RewardsProgram::Qantas);
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A loyalty currency that bonus points and scores are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RewardsProgram {
    /// Qantas Frequent Flyer points.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "Qantas", alias = "QANTAS"))]
    Qantas,
    /// Velocity Frequent Flyer points.
    #[cfg_attr(feature = "serde", serde(alias = "Velocity", alias = "VELOCITY"))]
    Velocity,
}

impl RewardsProgram {
    /// Every program, in the order a program picker offers them.
    pub const ALL: [Self; 2] = [Self::Qantas, Self::Velocity];

    /// Return the program as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use churner_core::RewardsProgram;
    ///
    /// assert_eq!(RewardsProgram::Qantas.as_str(), "qantas");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qantas => "qantas",
            Self::Velocity => "velocity",
        }
    }
}

impl fmt::Display for RewardsProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known [`RewardsProgram`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown rewards program '{name}'")]
pub struct ParseRewardsProgramError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for RewardsProgram {
    type Err = ParseRewardsProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|program| program.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseRewardsProgramError { name: s.to_owned() })
    }
}
