#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::QuizError;
pub use quiz::{AnswerOutcome, QuizPhase, QuizProgress, QuizService, QuizSession};
