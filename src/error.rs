//! Errors returned by the integrator and stepping strategies.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `solve` was called before any initial condition was set.
    #[error("initial conditions have not been set")]
    UninitializedState,
    /// The time grid has no points.
    #[error("time grid is empty")]
    EmptyTimeGrid,
    #[error("invalid initial condition: {0}")]
    InvalidInitialCondition(String),
    /// A stepping strategy returned a state of the wrong length.
    #[error("stepping strategy returned {found} values, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
    /// The stepping strategy does not provide an `advance` rule.
    #[error("stepping strategy `{0}` does not implement advance")]
    NotImplemented(String),
}
