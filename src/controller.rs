//! The submission state machine.
//!
//! One attempt runs `Idle → Validating → (Rejected | Submitting) →
//! (Succeeded | Failed) → Idle`. Only one attempt may be in flight; the guard
//! is the state itself, not the disabled trigger. Nothing is retried: every
//! failure is terminal for the attempt, surfaced to the user, and leaves the
//! machine back in `Idle` with the trigger restored.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::api::{EntryTransport, NewEntry};
use crate::charts::ChartRefreshNotifier;
use crate::feedback::MessageBus;
use crate::fields::{spec_for, FieldId, FIELD_SPECS};
use crate::response::{classify, ServerOutcome, GENERIC_SUBMIT_ERROR};
use crate::surface::UiSurface;
use crate::validate::{validate_field, validate_interactive, Verdict};

pub const TRIGGER_LABEL_IDLE: &str = "Submit";
pub const TRIGGER_LABEL_BUSY: &str = "Submitting";

const FORM_ERROR_SUMMARY: &str = "Please fix the errors above before submitting";
const NETWORK_ERROR_MSG: &str = "Network error. Please check your connection and try again.";
const SUCCESS_MSG: &str = "Entry submitted successfully";

/// Where the machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    Failed,
}

/// Terminal result of one `submit()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Client-side validation blocked the attempt; no network call occurred.
    Rejected,
    Succeeded,
    Failed,
    /// Another attempt was in flight; this call did nothing.
    AlreadyInFlight,
}

pub struct SubmissionController {
    surface: Arc<dyn UiSurface>,
    bus: MessageBus,
    transport: Arc<dyn EntryTransport>,
    notifier: Arc<dyn ChartRefreshNotifier>,
    state: Mutex<SubmissionState>,
}

impl SubmissionController {
    pub fn new(
        surface: Arc<dyn UiSurface>,
        transport: Arc<dyn EntryTransport>,
        notifier: Arc<dyn ChartRefreshNotifier>,
    ) -> Self {
        Self {
            bus: MessageBus::new(Arc::clone(&surface)),
            surface,
            transport,
            notifier,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock().unwrap()
    }

    fn transition(&self, next: SubmissionState) {
        let mut state = self.state.lock().unwrap();
        tracing::debug!(from = ?*state, to = ?next, "submission state change");
        *state = next;
    }

    /// Run one complete submission attempt.
    ///
    /// Re-entrant calls while an attempt is in flight are ignored. Every exit
    /// path from `Submitting` re-enables the trigger and restores its label.
    pub async fn submit(&self) -> SubmissionOutcome {
        {
            let mut state = self.state.lock().unwrap();
            if *state != SubmissionState::Idle {
                tracing::debug!(state = ?*state, "submit ignored: attempt already in flight");
                return SubmissionOutcome::AlreadyInFlight;
            }
            *state = SubmissionState::Validating;
        }

        self.bus.clear_all();

        let outcome = match self.validate_form() {
            None => {
                self.bus.show_form_error(FORM_ERROR_SUMMARY);
                self.transition(SubmissionState::Rejected);
                SubmissionOutcome::Rejected
            }
            Some(entry) => {
                self.transition(SubmissionState::Submitting);
                self.surface.set_trigger_enabled(false);
                self.surface.set_trigger_label(TRIGGER_LABEL_BUSY);

                let outcome = self.exchange(&entry).await;

                // Unconditional cleanup on every exit from Submitting.
                self.surface.set_trigger_enabled(true);
                self.surface.set_trigger_label(TRIGGER_LABEL_IDLE);

                self.transition(match outcome {
                    SubmissionOutcome::Succeeded => SubmissionState::Succeeded,
                    _ => SubmissionState::Failed,
                });
                outcome
            }
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    /// Interactive on-blur check for one field. Surfaces only hard errors;
    /// blocks nothing.
    pub fn on_field_commit(&self, field: FieldId) {
        let raw = self.surface.field_value(field);
        if let Some(message) = validate_interactive(spec_for(field), &raw) {
            self.bus.show_field_error(field, &message);
        }
    }

    /// Clears a field's stale message while the user is editing it.
    pub fn on_field_edit(&self, field: FieldId) {
        self.bus.clear_field(field);
    }

    /// Submission-mode validation over all fields. Reports every blocking
    /// field and every advisory; returns the payload only when nothing blocks.
    fn validate_form(&self) -> Option<NewEntry> {
        let mut sleep = None;
        let mut water = None;
        let mut mood = None;
        let mut blocked = false;

        for spec in FIELD_SPECS.iter() {
            let raw = self.surface.field_value(spec.id);
            match validate_field(spec, &raw) {
                Verdict::Valid { value } => {
                    Self::assign(&mut sleep, &mut water, &mut mood, spec.id, value);
                }
                Verdict::Advisory { value, message } => {
                    self.bus.show_field_warning(spec.id, &message);
                    Self::assign(&mut sleep, &mut water, &mut mood, spec.id, value);
                }
                Verdict::Missing { message }
                | Verdict::Invalid { message }
                | Verdict::OutOfRange { message } => {
                    self.bus.show_field_error(spec.id, &message);
                    blocked = true;
                }
            }
        }

        if blocked {
            return None;
        }
        let (Some(sleep_hours), Some(water_litres), Some(mood)) = (sleep, water, mood) else {
            return None;
        };
        Some(NewEntry {
            sleep_hours,
            water_litres,
            mood: mood as i64,
        })
    }

    fn assign(sleep: &mut Option<f64>, water: &mut Option<f64>, mood: &mut Option<f64>, id: FieldId, value: f64) {
        match id {
            FieldId::Sleep => *sleep = Some(value),
            FieldId::Water => *water = Some(value),
            FieldId::Mood => *mood = Some(value),
        }
    }

    /// The single network exchange and its outcome handling. Server and
    /// transport errors are surfaced to the user here, never propagated.
    async fn exchange(&self, entry: &NewEntry) -> SubmissionOutcome {
        let reply = match self.transport.submit_entry(entry).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "entry submission failed in transport");
                self.bus.show_form_error(NETWORK_ERROR_MSG);
                return SubmissionOutcome::Failed;
            }
        };

        match classify(&reply) {
            ServerOutcome::Success { feedback } => {
                if !feedback.is_empty() {
                    self.surface.set_feedback_lines(&feedback);
                    self.bus.show_form_success(SUCCESS_MSG);
                }
                for field in FieldId::ALL {
                    self.surface.set_field_value(field, "");
                }
                self.notifier.notify(Utc::now().timestamp_millis());
                SubmissionOutcome::Succeeded
            }
            ServerOutcome::StructuredError(items) => {
                let mut mapped = false;
                for item in &items {
                    if let Some(field) = item.field() {
                        self.bus.show_field_error(field, &item.msg);
                        mapped = true;
                    }
                }
                if !mapped {
                    self.bus.show_form_error(GENERIC_SUBMIT_ERROR);
                }
                SubmissionOutcome::Failed
            }
            ServerOutcome::ScalarError(text) | ServerOutcome::OpaqueError(text) => {
                tracing::warn!(status = reply.status, "server rejected entry");
                self.bus.show_form_error(&text);
                SubmissionOutcome::Failed
            }
        }
    }
}
