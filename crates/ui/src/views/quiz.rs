use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::QuizPhase;
use tracing::{debug, info, warn};

use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{QuestionVm, QuizIntent, QuizOutcome, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let navigator = use_navigator();
    let mut quiz = use_context::<Signal<QuizVm>>();
    let mut error = use_signal(|| None::<ViewError>);

    // Nothing to answer outside an active quiz: send the player to the right screen.
    use_effect(move || match quiz.read().phase() {
        QuizPhase::NotStarted => {
            debug!("quiz not started, redirecting to welcome");
            let _ = navigator.replace(Route::Welcome {});
        }
        QuizPhase::Finished => {
            let _ = navigator.replace(Route::GameOver {});
        }
        QuizPhase::InProgress { .. } => {}
    });

    let on_answer = use_callback(move |selected: usize| {
        let result = quiz.write().dispatch(QuizIntent::Answer(selected));
        match result {
            Ok(QuizOutcome::Completed { score, total }) => {
                info!(score, total, "quiz completed");
                error.set(None);
                let _ = navigator.replace(Route::GameOver {});
            }
            Ok(QuizOutcome::Continue | QuizOutcome::Idle) => error.set(None),
            Err(err) => {
                warn!(?err, selected, "answer rejected");
                error.set(Some(err));
            }
        }
    });

    let question = quiz.read().question();

    rsx! {
        div { class: "quiz",
            if let Some(question) = question {
                QuestionCard { question, on_answer }
            }
            if let Some(err) = error() {
                p { class: "quiz__error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_answer: EventHandler<usize>) -> Element {
    rsx! {
        h2 { class: "quiz__title", "{question.title}" }
        div { class: "quiz__answers",
            for option in question.options.iter() {
                AnswerButton {
                    key: "{option.index}",
                    index: option.index,
                    label: option.label.clone(),
                    on_answer,
                }
            }
        }
        p { class: "quiz__progress", "{question.progress_label}" }
    }
}

#[component]
fn AnswerButton(index: usize, label: String, on_answer: EventHandler<usize>) -> Element {
    rsx! {
        button {
            class: "quiz__answer",
            id: "quiz-answer-{index}",
            r#type: "button",
            onclick: move |_| on_answer.call(index),
            "{label}"
        }
    }
}
