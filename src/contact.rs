use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

use crate::logging::{log_event, LogLevel};
use crate::timer::{Scheduler, TimerSlot};

pub const ACCESS_KEY_FIELD: &str = "access_key";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent!";
pub const REJECTED_LABEL: &str = "Error Occurred";
pub const FAILED_LABEL: &str = "Something went wrong";

pub const SPINNER_MARKUP: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" fill="none" style="animation: spin 1s linear infinite;"><circle cx="10" cy="10" r="8" stroke="currentColor" stroke-width="2" stroke-dasharray="50" stroke-dashoffset="25"/></svg>"#;
pub const CHECK_MARKUP: &str = r#"<svg width="20" height="20" viewBox="0 0 20 20" fill="none"><path d="M4 10L8 14L16 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
pub const SPIN_KEYFRAMES: &str =
    "@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn with_access_key(mut self, access_key: &str) -> Self {
        self.push(ACCESS_KEY_FIELD, access_key);
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayBody {
    pub success: Option<bool>,
    pub message: Option<String>,
}

impl RelayBody {
    pub fn from_json(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_else(|_| Self {
            success: value.get("success").and_then(Value::as_bool),
            message: value.get("message").and_then(Value::as_str).map(str::to_string),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: RelayBody,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("response body is not JSON: {0}")]
    Decode(String),
}

pub trait Transport {
    async fn post_form(&self, endpoint: &Url, payload: &FormPayload) -> Result<RelayReply, TransportError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected { status: u16, message: Option<String> },
    Failed { reason: String },
}

impl SubmitOutcome {
    pub fn classify(result: Result<RelayReply, TransportError>) -> Self {
        match result {
            Ok(reply) if reply.status == 200 => Self::Sent,
            Ok(reply) => Self::Rejected {
                status: reply.status,
                message: reply.body.message,
            },
            Err(error) => Self::Failed {
                reason: error.to_string(),
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent => SENT_LABEL,
            Self::Rejected { .. } => REJECTED_LABEL,
            Self::Failed { .. } => FAILED_LABEL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Sending,
    Success,
    Error,
}

pub trait FormView {
    fn button_label(&self) -> String;
    fn collect_fields(&self) -> FormPayload;
    fn show_sending(&self);
    fn show_success(&self);
    fn show_error(&self, label: &str);
    fn clear_fields(&self);
    fn restore_button(&self, label: &str);
}

pub struct SubmitSettings {
    pub endpoint: Url,
    pub access_key: String,
    pub restore_ms: u32,
}

pub struct SubmitController<V: FormView, T: Transport, S: Scheduler> {
    view: Rc<V>,
    transport: T,
    settings: SubmitSettings,
    restore: TimerSlot<S>,
    original_label: RefCell<Option<String>>,
    state: Rc<Cell<FormState>>,
}

impl<V, T, S> SubmitController<V, T, S>
where
    V: FormView + 'static,
    T: Transport,
    S: Scheduler,
{
    pub fn new(view: Rc<V>, transport: T, scheduler: S, settings: SubmitSettings) -> Self {
        Self {
            view,
            transport,
            settings,
            restore: TimerSlot::new(scheduler),
            original_label: RefCell::new(None),
            state: Rc::new(Cell::new(FormState::Idle)),
        }
    }

    pub fn state(&self) -> FormState {
        self.state.get()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.restore.cancel();
        let original = self
            .original_label
            .borrow_mut()
            .get_or_insert_with(|| self.view.button_label())
            .clone();

        self.state.set(FormState::Sending);
        self.view.show_sending();

        let payload = self.view.collect_fields().with_access_key(&self.settings.access_key);
        log_event(
            LogLevel::Info,
            "contact_submit_started",
            json!({ "endpoint": self.settings.endpoint.as_str(), "fields": payload.len() }),
        );

        let result = self.transport.post_form(&self.settings.endpoint, &payload).await;
        let outcome = SubmitOutcome::classify(result);

        match &outcome {
            SubmitOutcome::Sent => {
                log_event(LogLevel::Info, "contact_submit_finished", json!({ "outcome": "sent" }));
                self.state.set(FormState::Success);
                self.view.show_success();
                self.view.clear_fields();
            }
            SubmitOutcome::Rejected { status, message } => {
                log_event(
                    LogLevel::Warn,
                    "contact_submit_finished",
                    json!({ "outcome": "rejected", "status": status, "message": message }),
                );
                self.state.set(FormState::Error);
                self.view.show_error(outcome.label());
            }
            SubmitOutcome::Failed { reason } => {
                log_event(
                    LogLevel::Error,
                    "contact_submit_finished",
                    json!({ "outcome": "failed", "reason": reason }),
                );
                self.state.set(FormState::Error);
                self.view.show_error(outcome.label());
            }
        }

        let view = self.view.clone();
        let state = self.state.clone();
        self.restore.replace(self.settings.restore_ms, move || {
            view.restore_button(&original);
            state.set(FormState::Idle);
        });

        outcome
    }
}
