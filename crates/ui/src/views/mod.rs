mod error;
mod game_over;
mod quiz;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use error::ViewError;
pub use game_over::GameOverView;
pub use quiz::QuizView;
pub use welcome::WelcomeView;
