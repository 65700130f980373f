/// Error types for launch record parsing
use thiserror::Error;

/// Main error type for launch record operations
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A column the dashboard depends on is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A required cell is empty
    #[error("Missing value for column: {0}")]
    MissingValue(&'static str),

    /// Outcome class is neither 0 nor 1
    #[error("Invalid outcome class: {0}")]
    InvalidClass(String),

    /// Payload mass is not a non-negative number
    #[error("Invalid payload mass: {0}")]
    InvalidPayload(String),
}

/// Type alias for Results using LaunchError
pub type Result<T> = std::result::Result<T, LaunchError>;
