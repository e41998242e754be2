use thiserror::Error;

/// Errors raised while building questions or a question bank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("answer {index} cannot be empty")]
    EmptyAnswer { index: usize },

    #[error("answer index must be in 0..=3, got {0}")]
    InvalidAnswerIndex(u8),

    #[error("question bank must contain at least one question")]
    EmptyBank,
}
