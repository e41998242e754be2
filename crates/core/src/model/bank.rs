use crate::error::QuestionError;
use crate::model::question::{AnswerIndex, Question};

/// Fixed, ordered collection of questions played in sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Creates a bank from an ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyBank` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptyBank);
        }
        Ok(Self { questions })
    }

    /// The built-in general knowledge questions.
    #[must_use]
    pub fn reference() -> Self {
        let questions = vec![
            Question::trusted(
                "What is the capital city of Australia?",
                answers(["Sydney", "Melbourne", "Canberra", "Brisbane"]),
                AnswerIndex::THIRD,
            ),
            Question::trusted(
                "Which planet is known as the Red Planet?",
                answers(["Venus", "Mars", "Jupiter", "Mercury"]),
                AnswerIndex::SECOND,
            ),
            Question::trusted(
                "Who wrote the play 'Romeo and Juliet'?",
                answers(["Charles Dickens", "William Shakespeare", "Mark Twain", "Jane Austen"]),
                AnswerIndex::SECOND,
            ),
            Question::trusted(
                "What is the chemical symbol for gold?",
                answers(["Au", "Ag", "Fe", "Go"]),
                AnswerIndex::FIRST,
            ),
        ];
        Self { questions }
    }

    #[must_use]
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn answers(items: [&str; 4]) -> [String; 4] {
    items.map(str::to_string)
}
