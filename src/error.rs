//! Crate-wide error types.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Errors surfaced by the solver core.
///
/// Every fallible operation in the crate returns this type; the caller
/// (typically a transport layer) is responsible for turning it into a
/// user-visible response. A failed operation never leaves partial state
/// behind.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum SolverError {
    /// Input failed validation before any search or mutation started:
    /// malformed equation, out-of-range board position, or non-positive
    /// tree parameters.
    #[display("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// The requested transition is not allowed in the current state:
    /// a move on a finished game, a move onto an occupied square, or a
    /// best-move request when no legal moves remain.
    #[display("illegal state transition: {reason}")]
    IllegalStateTransition {
        /// Why the transition was rejected.
        reason: String,
    },

    /// The search space was exhausted without finding a satisfying
    /// assignment.
    #[display("no solution satisfies the equation")]
    NoSolution,

    /// The puzzle cannot be solved by any assignment: more distinct
    /// letters than available digits.
    #[display("infeasible puzzle: {letters} distinct letters but only {digits} digits")]
    Infeasible {
        /// Distinct letters in the equation.
        letters: usize,
        /// Digits available for assignment (always 10).
        digits: usize,
    },
}

impl SolverError {
    /// Creates a [`SolverError::InvalidInput`] from any message.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a [`SolverError::IllegalStateTransition`] from any message.
    pub fn illegal_state(reason: impl Into<String>) -> Self {
        Self::IllegalStateTransition {
            reason: reason.into(),
        }
    }
}
