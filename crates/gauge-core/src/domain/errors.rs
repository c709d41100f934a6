//! Errors raised by the policy functions.

use thiserror::Error;

/// GaugeError is the single failure kind of the core.
///
/// The message names the rejected value, so callers and tests may assert on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaugeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GaugeError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type GaugeResult<T> = Result<T, GaugeError>;
