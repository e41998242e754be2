use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::QuizVm;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    // One quiz session per UI session; every screen reads and drives this signal.
    use_context_provider(|| Signal::new(QuizVm::new(ctx.quiz_service().new_session())));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
