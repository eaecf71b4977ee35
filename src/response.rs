//! Server response classification.
//!
//! The backend answers in several shapes: a success body with optional
//! coaching feedback, a FastAPI-style structured `detail` array, a scalar
//! `detail` string, or something that is not JSON at all. One function folds
//! every received reply into a tagged [`ServerOutcome`] so the controller can
//! consume them uniformly.

use serde::Deserialize;

use crate::api::ServerReply;
use crate::fields::FieldId;

/// Shown when an error body is JSON but carries no usable `detail`.
pub const GENERIC_SUBMIT_ERROR: &str = "Failed to submit entry. Please try again";
/// Shown when an error body is empty or unreadable.
pub const GENERIC_SERVER_ERROR: &str = "Server error occurred";

/// One item of a structured validation error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailItem {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl DetailItem {
    /// The field the server blamed: the second `loc` segment, as in
    /// `["body", "sleep_hours"]`. `None` when the path maps to no known field.
    pub fn field(&self) -> Option<FieldId> {
        self.loc
            .get(1)
            .and_then(|segment| segment.as_str())
            .and_then(FieldId::from_wire)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: DetailValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetailValue {
    Items(Vec<DetailItem>),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
struct SuccessBody {
    #[serde(default)]
    feedback: Vec<String>,
}

/// Classification of a reply that was actually received. Transport failures
/// never reach this point; they are reported before classification.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerOutcome {
    Success { feedback: Vec<String> },
    /// Field-addressable validation errors from a `detail` array.
    StructuredError(Vec<DetailItem>),
    /// A scalar `detail` string, shown at form level.
    ScalarError(String),
    /// Anything else: non-JSON text, empty bodies, JSON without `detail`.
    OpaqueError(String),
}

pub fn classify(reply: &ServerReply) -> ServerOutcome {
    if reply.is_success() {
        // A success body without (or with unreadable) feedback is still a
        // success; the entry was stored.
        let body: SuccessBody = serde_json::from_str(&reply.body).unwrap_or_default();
        return ServerOutcome::Success {
            feedback: body.feedback,
        };
    }

    match serde_json::from_str::<serde_json::Value>(&reply.body) {
        Ok(value) => match serde_json::from_value::<ErrorBody>(value) {
            Ok(ErrorBody {
                detail: DetailValue::Items(items),
            }) => ServerOutcome::StructuredError(items),
            Ok(ErrorBody {
                detail: DetailValue::Text(text),
            }) => ServerOutcome::ScalarError(text),
            Err(_) => ServerOutcome::OpaqueError(GENERIC_SUBMIT_ERROR.to_string()),
        },
        Err(_) => {
            let text = reply.body.trim();
            if text.is_empty() {
                ServerOutcome::OpaqueError(GENERIC_SERVER_ERROR.to_string())
            } else {
                ServerOutcome::OpaqueError(text.to_string())
            }
        }
    }
}
