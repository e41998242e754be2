use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuestionBank;
use services::QuizService;

use crate::context::{UiApp, build_app_context};
use crate::views::{GameOverView, QuizView, WelcomeView};
use crate::vm::QuizVm;

pub const TEST_HOST_NAME: &str = "Marija";

#[derive(Clone)]
struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn host_name(&self) -> String {
        TEST_HOST_NAME.to_string()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Quiz,
    GameOver,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz: QuizVm,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let quiz = props.quiz.clone();
    use_context_provider(|| Signal::new(quiz));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::GameOver => rsx! { GameOverView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Builds a harness over the reference bank; `prepare` puts the quiz in the
/// state the view should render.
pub fn setup_view_harness(view: ViewKind, prepare: impl FnOnce(&mut QuizVm)) -> ViewHarness {
    let quiz_service = Arc::new(QuizService::new(Arc::new(QuestionBank::reference())));
    let mut quiz = QuizVm::new(quiz_service.new_session());
    prepare(&mut quiz);

    let app = Arc::new(TestApp { quiz_service });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, quiz });

    ViewHarness { dom }
}
