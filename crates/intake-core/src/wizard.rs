//! Wizard controller: the linear navigation state machine.
//!
//! `WizardState` is the single owner of the current step, the answer
//! record, and the submission status. Front ends never mutate these
//! directly; they dispatch [`WizardEvent`]s or call the operations below.
//!
//! ## Navigation
//!
//! | Operation | Effect | At the boundary |
//! |-----------|--------|-----------------|
//! | `go_next` | index + 1 | no-op on the last question |
//! | `go_previous` | index - 1 | no-op on the first question |
//! | `set_answer` | overwrite one field | always applies |
//!
//! Neither navigation call checks the answer; gating forward movement on a
//! satisfied field is the caller's job via [`WizardState::can_advance`].

use crate::answers::{AnswerRecord, FormPayload};
use crate::catalog::{catalog, question_count, Field, QuestionSpec};
use crate::error::SubmitError;

/// A UI event addressed to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Previous,
    Answer { field: Field, value: String },
}

/// In-flight flag and the last error text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub in_flight: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    current_index: usize,
    answers: AnswerRecord,
    submission: SubmissionStatus,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh state: first question, empty answers, idle.
    pub fn new() -> Self {
        Self {
            current_index: 0,
            answers: AnswerRecord::new(),
            submission: SubmissionStatus::default(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    /// The question on screen.
    pub fn current_question(&self) -> &'static QuestionSpec {
        &catalog()[self.current_index]
    }

    /// Current answer to the question on screen.
    pub fn current_answer(&self) -> &str {
        self.answers.get(self.current_question().field)
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == question_count()
    }

    pub fn go_next(&mut self) {
        if self.current_index + 1 < question_count() {
            self.current_index += 1;
            tracing::debug!(index = self.current_index, "Advanced to next question");
        }
    }

    pub fn go_previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            tracing::debug!(index = self.current_index, "Returned to previous question");
        }
    }

    pub fn set_answer(&mut self, field: Field, value: impl Into<String>) {
        self.answers.set(field, value);
    }

    /// Apply one UI event.
    pub fn apply(&mut self, event: WizardEvent) {
        match event {
            WizardEvent::Next => self.go_next(),
            WizardEvent::Previous => self.go_previous(),
            WizardEvent::Answer { field, value } => self.set_answer(field, value),
        }
    }

    /// Whether the active question has an answer.
    pub fn is_current_satisfied(&self) -> bool {
        self.answers.is_satisfied(self.current_question().field)
    }

    /// Next is enabled: not on the last step and the active field is satisfied.
    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.is_current_satisfied()
    }

    /// Back is shown everywhere except the first question.
    pub fn can_go_back(&self) -> bool {
        !self.is_first()
    }

    /// Submit is enabled: last step, field satisfied, nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.is_last() && self.is_current_satisfied() && !self.submission.in_flight
    }

    /// One flag per question; segment `i` is lit once the wizard reaches it.
    pub fn progress_segments(&self) -> Vec<bool> {
        (0..question_count())
            .map(|i| self.current_index >= i)
            .collect()
    }

    /// "3 / 7" style position text.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, question_count())
    }

    /// Enter the submitting state and snapshot the form body.
    ///
    /// Returns `None` when submission is not currently allowed, in which
    /// case nothing changes.
    pub fn begin_submission(&mut self) -> Option<FormPayload> {
        if !self.can_submit() {
            return None;
        }
        self.submission.in_flight = true;
        self.submission.error = None;
        Some(self.answers.to_payload())
    }

    /// Leave the submitting state.
    ///
    /// Success resets the whole wizard; failure keeps answers and position
    /// and records the error text for display.
    pub fn finish_submission(&mut self, result: &Result<(), SubmitError>) {
        match result {
            Ok(()) => self.reset(),
            Err(err) => {
                self.submission.in_flight = false;
                self.submission.error = Some(err.user_message());
            }
        }
    }

    /// Back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WizardState {
        let mut state = WizardState::new();
        for field in Field::ALL {
            state.set_answer(field, "answer");
        }
        state
    }

    fn at_last(mut state: WizardState) -> WizardState {
        while !state.is_last() {
            state.go_next();
        }
        state
    }

    #[test]
    fn next_is_a_no_op_on_the_last_question() {
        let mut state = at_last(WizardState::new());
        assert_eq!(state.current_index(), 6);
        state.go_next();
        assert_eq!(state.current_index(), 6);
    }

    #[test]
    fn previous_is_a_no_op_on_the_first_question() {
        let mut state = WizardState::new();
        state.go_previous();
        assert_eq!(state.current_index(), 0);
        assert!(!state.can_go_back());
    }

    #[test]
    fn next_disabled_until_answered() {
        let mut state = WizardState::new();
        assert!(!state.can_advance());

        state.apply(WizardEvent::Answer {
            field: Field::Name,
            value: "Alice".to_string(),
        });
        assert!(state.can_advance());

        state.apply(WizardEvent::Next);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.current_question().field, Field::Age);
        assert!(!state.can_advance());
    }

    #[test]
    fn submit_gated_on_last_field_and_in_flight() {
        let mut state = at_last(WizardState::new());
        assert!(!state.can_submit());
        assert!(state.begin_submission().is_none());

        state.set_answer(Field::Q3, "Mostly true");
        assert!(state.can_submit());

        let payload = state.begin_submission().expect("submission allowed");
        assert_eq!(payload.get("Question3"), Some("Mostly true"));
        assert!(state.submission().in_flight);
        assert!(!state.can_submit());
        assert!(state.begin_submission().is_none());
    }

    #[test]
    fn successful_finish_resets_everything() {
        let mut state = at_last(filled());
        state.begin_submission();
        state.finish_submission(&Ok(()));
        assert_eq!(state, WizardState::new());
    }

    #[test]
    fn failed_finish_keeps_answers_and_position() {
        let mut state = at_last(filled());
        state.begin_submission();
        let before_answers = state.answers().clone();

        state.finish_submission(&Err(SubmitError::Transport("boom".to_string())));

        assert_eq!(state.current_index(), 6);
        assert_eq!(state.answers(), &before_answers);
        assert!(!state.submission().in_flight);
        assert_eq!(state.submission().error.as_deref(), Some("Failed to submit form"));
        assert!(state.can_submit());
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut state = at_last(filled());
        state.begin_submission();
        state.finish_submission(&Err(SubmitError::Decode("bad".to_string())));
        assert!(state.submission().error.is_some());

        state.begin_submission();
        assert!(state.submission().error.is_none());
    }

    #[test]
    fn progress_tracks_current_index() {
        let mut state = WizardState::new();
        state.go_next();
        state.go_next();
        assert_eq!(
            state.progress_segments(),
            vec![true, true, true, false, false, false, false]
        );
        assert_eq!(state.position_label(), "3 / 7");
    }
}
