/// Where a quiz session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress { index: usize },
    Finished,
}

impl QuizPhase {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::InProgress { .. })
    }
}

/// Result of grading a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub finished: bool,
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    pub is_complete: bool,
}
