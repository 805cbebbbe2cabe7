//! Intake Questionnaire CLI
//!
//! Thin wrapper around intake-core for answering the questionnaire from a
//! terminal.
//!
//! ## Usage
//!
//! ```bash
//! # List the questions and their choices
//! intake questions
//!
//! # Answer interactively (`:back` to go to the previous question)
//! intake fill
//!
//! # Submit in one go; choices accept the label or a 1-based number
//! intake submit --name Alice --age 34 --phone 9876543210 --gender 2 \
//!     --q1 1 --q2 "Mostly true" --q3 3
//!
//! # Show what would be sent without posting
//! intake submit ... --dry-run
//! ```

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use intake_core::catalog::{catalog, question_count, HEADLINE};
use intake_core::phone;
use intake_core::{
    Field, FormPayload, HttpTransport, IntakeConfig, QuestionKind, QuestionSpec, Redirector,
    SubmissionOutcome, Submitter, WizardEvent, WizardState,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Intake questionnaire - therapist matching
#[derive(Parser)]
#[command(name = "intake")]
#[command(version = "0.1.0")]
#[command(about = "Intake questionnaire - therapist matching")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Intake endpoint URL
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Link shown after a successful submission
    #[arg(long, global = true)]
    redirect_url: Option<String>,

    /// Country for phone numbers without a +code (ISO, e.g. "in")
    #[arg(long, global = true)]
    country: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the questions in order
    Questions,

    /// Answer the questions one at a time on stdin
    Fill {
        /// Print the form body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Submit all answers from flags
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        q1: String,
        #[arg(long)]
        q2: String,
        #[arg(long)]
        q3: String,
        /// Print the form body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Prints the follow-up link instead of navigating.
struct PrintRedirect;

impl Redirector for PrintRedirect {
    fn redirect(&self, url: &str) {
        println!("Continue to payment: {}", url);
    }
}

/// Turn raw text into the value stored for `question`.
fn answer_for(question: &QuestionSpec, raw: &str, config: &IntakeConfig) -> Result<String> {
    let value = match question.kind {
        QuestionKind::ChoiceButtons => question.resolve_choice(raw)?.to_string(),
        QuestionKind::Phone => phone::from_input(raw, config.default_country),
        QuestionKind::FreeText | QuestionKind::NumericText if raw.trim().is_empty() => {
            String::new()
        }
        QuestionKind::FreeText | QuestionKind::NumericText => raw.to_string(),
    };
    Ok(value)
}

fn print_questions() {
    println!("{}", HEADLINE);
    println!();
    for question in catalog() {
        println!(
            "{}. {} [{}]",
            question.id + 1,
            question.prompt,
            question.field
        );
        for (i, choice) in question.choices.iter().enumerate() {
            println!("     {}) {}", i + 1, choice);
        }
    }
}

fn print_payload(payload: &FormPayload) {
    println!("Form payload (not sent):");
    for (key, value) in payload.pairs() {
        println!("  {}={}", key, value);
    }
}

fn prompt(state: &WizardState, config: &IntakeConfig) -> std::io::Result<()> {
    let question = state.current_question();
    println!();
    println!("[{}] {}", state.position_label(), question.prompt);
    for (i, choice) in question.choices.iter().enumerate() {
        println!("  {}) {}", i + 1, choice);
    }
    if question.kind == QuestionKind::Phone {
        println!(
            "  (national number for {}, or +code to override)",
            config.default_country
        );
    }
    let current = state.current_answer();
    if !current.is_empty() {
        let shown = match question.kind {
            QuestionKind::Phone => phone::display(current, config.default_country),
            _ => current.to_string(),
        };
        println!("  current: {} (press Enter to keep)", shown);
    }
    if state.can_go_back() {
        println!("  (:back for previous question)");
    }
    print!("> ");
    std::io::stdout().flush()
}

async fn next_line(lines: &mut Lines<BufReader<Stdin>>) -> Result<String> {
    match lines.next_line().await? {
        Some(line) => Ok(line),
        None => anyhow::bail!("input ended before the questionnaire was complete"),
    }
}

/// Walk the wizard on stdin. Returns once the last question is answered.
async fn fill_interactive(
    state: &mut WizardState,
    config: &IntakeConfig,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<()> {
    loop {
        prompt(state, config)?;
        let line = next_line(lines).await?;
        let input = line.trim();

        if input == ":back" {
            state.apply(WizardEvent::Previous);
            continue;
        }

        if !input.is_empty() {
            let question = state.current_question();
            match answer_for(question, &line, config) {
                Ok(value) => state.apply(WizardEvent::Answer {
                    field: question.field,
                    value,
                }),
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            }
        }

        if !state.is_current_satisfied() {
            println!("An answer is required.");
            continue;
        }

        if state.is_last() {
            return Ok(());
        }
        state.apply(WizardEvent::Next);
    }
}

/// Send the answers, or print them on a dry run.
async fn finish(
    state: &mut WizardState,
    config: IntakeConfig,
    dry_run: bool,
    mut retry: Option<&mut Lines<BufReader<Stdin>>>,
) -> Result<()> {
    if !state.answers().is_complete() {
        anyhow::bail!("answers are incomplete; nothing was sent");
    }
    if dry_run {
        print_payload(&state.answers().to_payload());
        return Ok(());
    }

    let submitter = Submitter::new(config, HttpTransport::new(), PrintRedirect);
    loop {
        println!("Submitting to {}...", submitter.config().endpoint);
        match submitter.submit(state).await {
            SubmissionOutcome::Accepted => {
                println!("Submitted. Thank you!");
                return Ok(());
            }
            SubmissionOutcome::Skipped => {
                anyhow::bail!("answers are incomplete; nothing was sent");
            }
            SubmissionOutcome::Failed(err) => {
                let Some(lines) = retry.as_deref_mut() else {
                    anyhow::bail!(err.user_message());
                };
                println!("{}", err.user_message());
                print!("Retry submission? [y/N] ");
                std::io::stdout().flush()?;
                let answer = next_line(lines).await?;
                if !answer.trim().eq_ignore_ascii_case("y") {
                    anyhow::bail!(err.user_message());
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    intake_core::logging::init(cli.verbose);

    let config = IntakeConfig::from_overrides(cli.endpoint, cli.redirect_url, cli.country.as_deref())?;

    match cli.command {
        Commands::Questions => print_questions(),

        Commands::Fill { dry_run } => {
            println!("{}", HEADLINE);
            println!("{} questions. Type :back to revisit the previous one.", question_count());

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut state = WizardState::new();
            fill_interactive(&mut state, &config, &mut lines).await?;
            finish(&mut state, config, dry_run, Some(&mut lines)).await?;
        }

        Commands::Submit {
            name,
            age,
            phone,
            gender,
            q1,
            q2,
            q3,
            dry_run,
        } => {
            let raw = [name, age, phone, gender, q1, q2, q3];
            let mut state = WizardState::new();
            for (question, value) in catalog().iter().zip(raw.iter()) {
                let value = answer_for(question, value, &config)?;
                if value.is_empty() {
                    anyhow::bail!("missing answer for --{}", question.field);
                }
                state.apply(WizardEvent::Answer {
                    field: question.field,
                    value,
                });
                state.apply(WizardEvent::Next);
            }
            tracing::info!(fields = Field::ALL.len(), "All answers collected");
            finish(&mut state, config, dry_run, None).await?;
        }
    }

    Ok(())
}
