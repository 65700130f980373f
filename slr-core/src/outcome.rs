use crate::error::{LaunchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary launch outcome, stored in the dataset's `class` column as 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map a numeric class to an outcome. Only 0 and 1 are valid.
    pub fn from_class(class: i64) -> Result<Outcome> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(LaunchError::InvalidClass(other.to_string())),
        }
    }

    /// Parse the raw `class` cell. Accepts "1" as well as "1.0".
    pub fn parse_class(ess: &str) -> Result<Outcome> {
        let trimmed = ess.trim();
        if let Ok(class) = trimmed.parse::<i64>() {
            return Outcome::from_class(class);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v == 0.0 => Ok(Outcome::Failure),
            Ok(v) if v == 1.0 => Ok(Outcome::Success),
            _ => Err(LaunchError::InvalidClass(trimmed.to_string())),
        }
    }

    /// The numeric class (1 for success, 0 for failure).
    pub fn class(&self) -> i64 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}
