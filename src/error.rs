//! Error types for candidate validation and sampler configuration
//!
//! Errors are classified by kind:
//! - InvalidArgument: length mismatches, bad counts or priors, Gamma shape < 1
//! - Configuration: config file present but unusable
//! - Io: config file could not be read or written

use thiserror::Error;

/// Error types for sampling and ranking
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    // Invalid arguments
    #[error("Length mismatch: {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid observation count {field}[{index}] = {value} (must be finite and >= 0)")]
    InvalidObservation {
        field: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Invalid prior {field}[{index}] = {value} (must be finite and > 0)")]
    InvalidPrior {
        field: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Gamma shape must be finite and >= 1, got {0}")]
    ShapeBelowOne(f64),

    #[error("Uniform value {0} is outside [0, 1)")]
    UniformOutOfRange(f64),

    #[error("Replay source needs at least one uniform value")]
    EmptyReplay,

    // Configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    // I/O
    #[error("IO error: {0}")]
    IoError(String),
}

/// Coarse classification of a [`SamplingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    InvalidArgument,
    Configuration,
    Io,
}

impl SamplingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SamplingError::LengthMismatch { .. }
            | SamplingError::InvalidObservation { .. }
            | SamplingError::InvalidPrior { .. }
            | SamplingError::ShapeBelowOne(_)
            | SamplingError::UniformOutOfRange(_)
            | SamplingError::EmptyReplay => ErrorKind::InvalidArgument,
            SamplingError::ConfigurationError(_) | SamplingError::ParseError(_) => {
                ErrorKind::Configuration
            }
            SamplingError::IoError(_) => ErrorKind::Io,
        }
    }

    /// Returns true if the caller passed malformed input
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Get a caller-facing recovery suggestion
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SamplingError::LengthMismatch { .. } => {
                "Pass one observation and prior entry per candidate key."
            }
            SamplingError::InvalidObservation { .. } => {
                "Observation counts must be non-negative finite numbers."
            }
            SamplingError::InvalidPrior { .. } => "Prior pseudo-counts must be positive.",
            SamplingError::ShapeBelowOne(_) => {
                "Raise the prior so that observations plus prior is at least 1."
            }
            SamplingError::UniformOutOfRange(_) => "Replay values must lie in [0, 1).",
            SamplingError::EmptyReplay => "Provide at least one replay value.",
            SamplingError::ConfigurationError(_) => "Check the sampler configuration values.",
            SamplingError::ParseError(_) => "Check the config file is valid JSON.",
            SamplingError::IoError(_) => "Check file permissions and disk space.",
        }
    }
}

impl From<std::io::Error> for SamplingError {
    fn from(err: std::io::Error) -> Self {
        SamplingError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for SamplingError {
    fn from(err: serde_json::Error) -> Self {
        SamplingError::ParseError(err.to_string())
    }
}

/// Serializable error representation for callers that forward errors as JSON
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub message: String,
    pub kind: ErrorKind,
    pub recovery_suggestion: String,
}

impl From<&SamplingError> for ErrorReport {
    fn from(err: &SamplingError) -> Self {
        ErrorReport {
            message: err.to_string(),
            kind: err.kind(),
            recovery_suggestion: err.recovery_suggestion().to_string(),
        }
    }
}
