use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{GameOverView, QuizView, WelcomeView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/game-over", GameOverView)] GameOver {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "quiz-shell",
            Outlet::<Route> {}
        }
    }
}
