use alloc::string::String;

use thiserror::Error;

/// Result type for observer registration.
pub type HuntResult<T> = Result<T, HuntError>;

/// Errors returned when registering targets.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum HuntError {
    /// The target or options have the wrong shape. No state was created.
    #[error("hunt: invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("target at index {index} is not an element")]
    NotAnElement { index: usize },

    #[error("offset must be a finite number, got {offset}")]
    NonFiniteOffset { offset: f64 },
}

/// A malformed per-element attribute override.
///
/// Never fatal: the option keeps its previous value and registration continues.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("hunt: invalid {attribute} value {value:?} on target {target_index}: {reason}")]
pub struct ConfigParseWarning {
    /// Position of the target within its registration call.
    pub target_index: usize,
    pub attribute: &'static str,
    pub value: String,
    pub reason: String,
}
