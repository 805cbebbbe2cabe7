//! Intake Core Library
//!
//! The logic behind the therapist-matching questionnaire: a fixed catalog of
//! seven questions, a linear wizard that collects one answer per screen, and
//! the submission flow that posts the answers to the intake endpoint.
//!
//! ## Overview
//!
//! ```text
//! catalog ──▶ WizardState ──▶ (UI renders current question)
//!                 ▲                      │
//!                 └──── WizardEvent ◀────┘
//!
//! last step ──▶ Submitter::submit ──▶ Transport ──▶ Redirector
//! ```
//!
//! All state lives in a single [`WizardState`] owned by the front end. The
//! only asynchronous step is [`Submitter::send`]; everything else is a plain
//! synchronous transition.
//!
//! ## Quick Start
//!
//! ```ignore
//! use intake_core::{Field, HttpTransport, IntakeConfig, Submitter, WizardState};
//!
//! let config = IntakeConfig::default();
//! let submitter = Submitter::new(config, HttpTransport::new(), PrintRedirect);
//!
//! let mut state = WizardState::new();
//! state.set_answer(Field::Name, "Alice");
//! state.go_next();
//! // ... answer the remaining questions ...
//! submitter.submit(&mut state).await;
//! ```

pub mod answers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod phone;
pub mod submission;
pub mod transport;
pub mod wizard;

// Re-exports
pub use answers::{AnswerRecord, FormPayload};
pub use catalog::{catalog, question_count, Field, QuestionKind, QuestionSpec};
pub use config::IntakeConfig;
pub use error::{IntakeError, SubmitError};
pub use phone::Country;
pub use submission::{Redirector, SubmissionOutcome, Submitter};
pub use transport::{HttpTransport, Transport, TransportReply};
pub use wizard::{SubmissionStatus, WizardEvent, WizardState};
