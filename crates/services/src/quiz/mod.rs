mod progress;
mod service;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::{AnswerOutcome, QuizPhase, QuizProgress};
pub use service::QuizService;
pub use session::QuizSession;
