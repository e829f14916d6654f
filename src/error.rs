//! Error type shared by the route primitives, the optimizers, and the
//! orchestration cycle.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors raised while building or mutating routing state.
///
/// Every variant is fatal for the operation that produced it: callers
/// propagate it rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// A route primitive was called with arguments that break its contract
    /// (depot removal, out-of-range or misordered indices, invalid route).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A solution failed its validity check after an optimization pass.
    #[error("found invalid solution after {stage}: {detail}")]
    InvariantViolation {
        /// Pass after which the check failed.
        stage: &'static str,
        /// Rendering of the offending solution.
        detail: String,
    },

    /// Problem data is inconsistent.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// Strategy or solver options are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl RoutingError {
    pub(crate) fn invalid_op(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}
