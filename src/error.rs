//! Class resolution errors.

use thiserror::Error;

/// Error returned when a node's classes cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A node mixes itself in, directly or through other mixes.
    ///
    /// `path` holds the base classes along the cycle, starting and ending
    /// with the node that was re-entered.
    #[error("cycle detected in mixes: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}
