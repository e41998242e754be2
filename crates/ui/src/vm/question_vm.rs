use quiz_core::model::Question;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub index: usize,
    pub label: String,
}

/// Display data for the question currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub title: String,
    pub options: Vec<AnswerOptionVm>,
    pub progress_label: String,
}

/// `number` is 1-based.
#[must_use]
pub fn map_question(question: &Question, number: usize, total: usize) -> QuestionVm {
    let options = question
        .answers()
        .iter()
        .enumerate()
        .map(|(index, label)| AnswerOptionVm {
            index,
            label: label.clone(),
        })
        .collect();

    QuestionVm {
        title: format!("{number}. {}", question.prompt()),
        options,
        progress_label: format!("Question {number} of {total}"),
    }
}
