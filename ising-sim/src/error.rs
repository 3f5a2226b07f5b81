use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised by the simulation core.
///
/// Every failure is detected while validating inputs, before the first sweep.
/// Once a run has started it cannot fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<validator::ValidationErrors> for SimError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::InvalidConfiguration(errors.to_string())
    }
}
