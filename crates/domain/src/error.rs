//! Unified error types for the domain layer
//!
//! Domain errors are programming or validation failures, not user-facing
//! workflow states. The app crate maps workflow failures separately.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Address is not valid hex
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Answer submitted past the end of the branch's prompt list
    #[error("Branch '{path}' has only {prompt_count} prompts")]
    BranchExhausted {
        path: &'static str,
        prompt_count: usize,
    },

    /// Finalize called before every prompt was answered
    #[error("Story incomplete: {answered}/{expected} prompts answered")]
    StoryIncomplete { answered: usize, expected: usize },

    /// Mojo score outside 0..=100
    #[error("Mojo score {0} outside 0..=100")]
    MojoOutOfRange(u32),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}
