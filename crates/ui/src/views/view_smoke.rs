use crate::vm::QuizIntent;

use super::test_harness::{TEST_HOST_NAME, ViewKind, setup_view_harness};

#[test]
fn welcome_view_smoke_renders_greeting_and_start() {
    let mut harness = setup_view_harness(ViewKind::Welcome, |_| {});

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to"), "missing greeting in {html}");
    assert!(html.contains(TEST_HOST_NAME), "missing host name in {html}");
    assert!(html.contains("QUIZ"), "missing title in {html}");
    assert!(html.contains("START"), "missing start button in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |vm| {
        vm.dispatch(QuizIntent::Start).unwrap();
    });

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("1. What is the capital city of Australia?"),
        "missing question title in {html}"
    );
    for answer in ["Sydney", "Melbourne", "Canberra", "Brisbane"] {
        assert!(html.contains(answer), "missing {answer} in {html}");
    }
    assert!(html.contains("Question 1 of 4"), "missing progress in {html}");
}

#[test]
fn quiz_view_smoke_renders_later_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |vm| {
        vm.dispatch(QuizIntent::Start).unwrap();
        vm.dispatch(QuizIntent::Answer(2)).unwrap();
        vm.dispatch(QuizIntent::Answer(0)).unwrap();
    });

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("3. Who wrote the play"), "missing question title in {html}");
    assert!(html.contains("William Shakespeare"), "missing answer in {html}");
    assert!(!html.contains("Sydney"), "stale answer in {html}");
}

#[test]
fn game_over_view_smoke_renders_final_score() {
    let mut harness = setup_view_harness(ViewKind::GameOver, |vm| {
        vm.dispatch(QuizIntent::Start).unwrap();
        for selected in [2, 0, 1, 0] {
            vm.dispatch(QuizIntent::Answer(selected)).unwrap();
        }
    });

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("GAME OVER!"), "missing title in {html}");
    assert!(html.contains("YOUR SCORE: 3"), "missing score in {html}");
    assert!(html.contains("Play Again"), "missing restart button in {html}");
}

const REFERENCE_ANSWERS: [&str; 4] = ["Sydney", "Melbourne", "Canberra", "Brisbane"];

fn assert_no_answer_buttons(html: &str) {
    assert!(!html.contains("quiz-answer-"), "unexpected answer button in {html}");
    for answer in REFERENCE_ANSWERS.iter().chain(["William Shakespeare", "Jane Austen"].iter()) {
        assert!(!html.contains(answer), "unexpected {answer} in {html}");
    }
}

#[test]
fn quiz_view_smoke_renders_no_answers_before_start() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |_| {});

    harness.rebuild();
    let html = harness.render();
    assert_no_answer_buttons(&html);
}

#[test]
fn quiz_view_smoke_renders_no_answers_after_finish() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |vm| {
        vm.dispatch(QuizIntent::Start).unwrap();
        for selected in [2, 0, 1, 0] {
            vm.dispatch(QuizIntent::Answer(selected)).unwrap();
        }
    });

    harness.rebuild();
    let html = harness.render();
    assert_no_answer_buttons(&html);
}
