use std::sync::Arc;

use quiz_core::model::QuestionBank;

use super::session::QuizSession;

/// Hands out quiz sessions that all play the same shared bank.
#[derive(Debug, Clone)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// Creates a fresh session in the not-started state.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(Arc::clone(&self.bank))
    }
}
