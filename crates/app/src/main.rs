use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuestionBank;
use services::QuizService;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Multiple-choice quiz desktop app.
#[derive(Debug, Parser)]
#[command(name = "quiz", version, about)]
struct Cli {
    /// Name shown on the welcome screen
    #[arg(long, env = "QUIZ_HOST_NAME", default_value = "Marija")]
    host_name: String,

    /// Title of the desktop window
    #[arg(long, env = "QUIZ_WINDOW_TITLE", default_value = "Quiz")]
    window_title: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn validate(&self) -> Result<()> {
        if self.host_name.trim().is_empty() {
            bail!("--host-name cannot be blank");
        }
        if self.window_title.trim().is_empty() {
            bail!("--window-title cannot be blank");
        }
        Ok(())
    }
}

struct DesktopApp {
    host_name: String,
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn host_name(&self) -> String {
        self.host_name.clone()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG wins over -v so filters can target individual crates.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;
    init_logging(cli.verbose);

    let bank = Arc::new(QuestionBank::reference());
    info!(questions = bank.len(), "starting quiz");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        host_name: cli.host_name.trim().to_string(),
        quiz_service: Arc::new(QuizService::new(bank)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(cli.window_title.trim())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}
