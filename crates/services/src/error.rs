//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no question is active")]
    NoActiveQuestion,
}
