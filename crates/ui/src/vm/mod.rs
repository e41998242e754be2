mod question_vm;
mod quiz_vm;

pub use question_vm::{AnswerOptionVm, QuestionVm, map_question};
pub use quiz_vm::{QuizIntent, QuizOutcome, QuizVm};
