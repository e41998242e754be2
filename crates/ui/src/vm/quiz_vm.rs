use services::{QuizPhase, QuizSession};
use tracing::debug;

use crate::views::ViewError;
use crate::vm::question_vm::{QuestionVm, map_question};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Answer(usize),
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed { score: usize, total: usize },
    Idle,
}

/// UI-facing wrapper around a single quiz session.
#[derive(Clone, Debug)]
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session.score()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        let question = self.session.current_question()?;
        let number = self.session.question_number()?;
        Some(map_question(question, number, self.total_questions()))
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoActiveQuestion` when an answer arrives while no
    /// question is on screen.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        debug!(?intent, phase = ?self.session.phase(), "dispatch quiz intent");
        match intent {
            QuizIntent::Start => {
                self.session.start();
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Answer(selected) => {
                let outcome = self
                    .session
                    .check_answer(selected)
                    .map_err(ViewError::from)?;
                if outcome.finished {
                    return Ok(QuizOutcome::Completed {
                        score: self.session.score(),
                        total: self.total_questions(),
                    });
                }
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Restart => {
                self.session.reset();
                Ok(QuizOutcome::Idle)
            }
        }
    }
}
