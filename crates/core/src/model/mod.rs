mod bank;
mod question;

pub use bank::QuestionBank;
pub use question::{ANSWER_COUNT, AnswerIndex, Question};
