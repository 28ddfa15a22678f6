use thiserror::Error;

/// Top-level error type for the solidkin crate.
#[derive(Debug, Error)]
pub enum SolidkinError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Errors raised while building shape geometry.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("{kind} expects {expected} size parameters, got {actual}")]
    Arity {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Errors related to kinematic chain lookups.
#[derive(Debug, Error, PartialEq)]
pub enum ChainError {
    #[error("part not found: {0}")]
    PartNotFound(&'static str),

    #[error("part is not a {expected} part")]
    RoleMismatch { expected: &'static str },
}

/// Convenience type alias for results using [`SolidkinError`].
pub type Result<T> = std::result::Result<T, SolidkinError>;
