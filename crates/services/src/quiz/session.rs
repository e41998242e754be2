use std::sync::Arc;

use quiz_core::model::{Question, QuestionBank};
use tracing::{debug, info};

use super::progress::{AnswerOutcome, QuizPhase, QuizProgress};
use crate::error::QuizError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Progress of one playthrough over a shared [`QuestionBank`].
///
/// `cursor` is `None` before the quiz starts, `Some(i)` while question `i`
/// is on screen and `Some(len)` once every question has been answered.
/// `score` never exceeds the number of questions already answered.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    cursor: Option<usize>,
    score: usize,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            cursor: None,
            score: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self.cursor {
            None => QuizPhase::NotStarted,
            Some(index) if index < self.bank.len() => QuizPhase::InProgress { index },
            Some(_) => QuizPhase::Finished,
        }
    }

    /// Index of the active question in its integer form: `-1` before the
    /// quiz starts and `total_questions()` once it is finished.
    #[must_use]
    pub fn current_index(&self) -> i64 {
        self.cursor
            .map_or(-1, |index| i64::try_from(index).unwrap_or(i64::MAX))
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.cursor.and_then(|index| self.bank.get(index))
    }

    /// 1-based number of the active question.
    #[must_use]
    pub fn question_number(&self) -> Option<usize> {
        match self.phase() {
            QuizPhase::InProgress { index } => Some(index + 1),
            QuizPhase::NotStarted | QuizPhase::Finished => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total_questions();
        QuizProgress {
            total,
            answered: self.cursor.unwrap_or(0).min(total),
            score: self.score,
            is_complete: self.phase() == QuizPhase::Finished,
        }
    }

    /// Begin (or restart) the quiz at the first question with a zero score.
    pub fn start(&mut self) {
        self.cursor = Some(0);
        self.score = 0;
        debug!(total = self.bank.len(), "quiz started");
    }

    /// Grade `selected` against the active question and move to the next one.
    ///
    /// A selection outside the answer list counts as wrong.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveQuestion` before `start` or after the last
    /// question; the session is left untouched.
    pub fn check_answer(&mut self, selected: usize) -> Result<AnswerOutcome, QuizError> {
        let QuizPhase::InProgress { index } = self.phase() else {
            return Err(QuizError::NoActiveQuestion);
        };
        let correct = self
            .bank
            .get(index)
            .is_some_and(|question| question.is_correct(selected));

        if correct {
            self.score += 1;
        }
        self.cursor = Some(index + 1);

        let finished = self.phase() == QuizPhase::Finished;
        debug!(index, selected, correct, score = self.score, "answer checked");
        if finished {
            info!(score = self.score, total = self.bank.len(), "quiz finished");
        }

        Ok(AnswerOutcome { correct, finished })
    }

    /// Return to the not-started state.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.score = 0;
        debug!("quiz reset");
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
