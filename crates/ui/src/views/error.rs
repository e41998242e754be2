use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NoActiveQuestion,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoActiveQuestion => "There is no question to answer right now.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::NoActiveQuestion => Self::NoActiveQuestion,
            _ => Self::Unknown,
        }
    }
}
