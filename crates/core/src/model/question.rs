use std::fmt;

use crate::error::QuestionError;

/// Every question offers exactly this many answers.
pub const ANSWER_COUNT: usize = 4;

//
// ─── ANSWER INDEX ──────────────────────────────────────────────────────────────
//

/// Position of an answer within a question, always in `0..ANSWER_COUNT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerIndex(u8);

impl AnswerIndex {
    pub const FIRST: Self = Self(0);
    pub const SECOND: Self = Self(1);
    pub const THIRD: Self = Self(2);
    pub const FOURTH: Self = Self(3);

    /// Creates a new `AnswerIndex`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidAnswerIndex` if the value is not in the range 0-3.
    pub fn new(value: u8) -> Result<Self, QuestionError> {
        if usize::from(value) < ANSWER_COUNT {
            Ok(Self(value))
        } else {
            Err(QuestionError::InvalidAnswerIndex(value))
        }
    }

    /// Returns the index as a `usize`, ready for slice access.
    #[must_use]
    pub fn value(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Debug for AnswerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnswerIndex({})", self.0)
    }
}

impl fmt::Display for AnswerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice quiz item.
///
/// Immutable once built; the correct answer is stored as an [`AnswerIndex`]
/// so it can never point outside `answers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answers: [String; ANSWER_COUNT],
    correct: AnswerIndex,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank.
    /// Returns `QuestionError::EmptyAnswer` if any answer is blank.
    pub fn new(
        prompt: impl Into<String>,
        answers: [String; ANSWER_COUNT],
        correct: AnswerIndex,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if let Some(index) = answers.iter().position(|answer| answer.trim().is_empty()) {
            return Err(QuestionError::EmptyAnswer { index });
        }

        Ok(Self::trusted(prompt, answers, correct))
    }

    // Built-in data is known to be well formed.
    pub(crate) fn trusted(
        prompt: impl Into<String>,
        answers: [String; ANSWER_COUNT],
        correct: AnswerIndex,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
            correct,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answers(&self) -> &[String; ANSWER_COUNT] {
        &self.answers
    }

    #[must_use]
    pub fn correct(&self) -> AnswerIndex {
        self.correct
    }

    /// Returns true if `selected` points at the correct answer.
    ///
    /// Out-of-range selections are never correct.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct.value()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
