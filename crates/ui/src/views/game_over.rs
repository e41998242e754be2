use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use crate::routes::Route;
use crate::vm::{QuizIntent, QuizVm};

#[component]
pub fn GameOverView() -> Element {
    let navigator = use_navigator();
    let mut quiz = use_context::<Signal<QuizVm>>();
    let score = quiz.read().score();

    let on_play_again = move |_| {
        let route = play_again(&mut quiz.write());
        let _ = navigator.replace(route);
    };

    rsx! {
        div { class: "game-over",
            h1 { class: "game-over__title", "GAME OVER!" }
            p { class: "game-over__score", "YOUR SCORE: {score}" }
            button {
                class: "game-over__again",
                id: "game-over-again",
                r#type: "button",
                onclick: on_play_again,
                "Play Again"
            }
        }
    }
}

/// Resets the finished quiz and returns the screen to show next.
pub(crate) fn play_again(quiz: &mut QuizVm) -> Route {
    if let Err(err) = quiz.dispatch(QuizIntent::Restart) {
        warn!(?err, "quiz failed to reset");
    }
    Route::Welcome {}
}
