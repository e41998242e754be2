use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{QuizIntent, QuizVm};

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut quiz = use_context::<Signal<QuizVm>>();
    let host_name = ctx.host_name().to_string();

    let on_start = move |_| {
        let target = start_quiz(&mut quiz.write());
        if let Some(route) = target {
            let _ = navigator.push(route);
        }
    };

    rsx! {
        div { class: "welcome",
            div { class: "welcome__headline",
                h2 { "Welcome to" }
                h2 { "{host_name}'s" }
                h2 { "awesome" }
                h1 { class: "welcome__title", "QUIZ" }
            }
            button {
                class: "welcome__start",
                id: "welcome-start",
                r#type: "button",
                onclick: on_start,
                "START"
            }
        }
    }
}

/// Starts the quiz and returns the screen to show next.
pub(crate) fn start_quiz(quiz: &mut QuizVm) -> Option<Route> {
    match quiz.dispatch(QuizIntent::Start) {
        Ok(_) => Some(Route::Quiz {}),
        Err(err) => {
            warn!(?err, "quiz failed to start");
            None
        }
    }
}
