#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use intake_core::IntakeConfig;

/// Global intake configuration, set from command line
static CONFIG: OnceLock<IntakeConfig> = OnceLock::new();

/// Get the intake configuration (set from command line or default)
pub fn get_config() -> IntakeConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Therapist-matching intake questionnaire
#[derive(Parser, Debug)]
#[command(name = "intake-desktop")]
#[command(about = "Therapist-matching intake questionnaire")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Intake endpoint URL the answers are posted to
    #[arg(long)]
    endpoint: Option<String>,

    /// Page opened after a successful submission
    #[arg(long)]
    redirect_url: Option<String>,

    /// Country preselected in the phone input (ISO code, e.g. "in")
    #[arg(long)]
    country: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    intake_core::logging::init(args.verbose);

    let config =
        IntakeConfig::from_overrides(args.endpoint, args.redirect_url, args.country.as_deref())?;

    tracing::info!(
        endpoint = %config.endpoint,
        country = config.default_country.iso,
        "Starting intake questionnaire"
    );

    let _ = CONFIG.set(config);

    // Window size: single card column, nearly full height
    let window_width = 700.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(intake_core::catalog::HEADLINE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
