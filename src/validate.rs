//! Per-field rule evaluation.
//!
//! Pure functions: a [`FieldSpec`] plus the raw input string produce a
//! [`Verdict`]. Verdicts are created fresh on every pass and never stored.

use crate::fields::{FieldSpec, Parse};

const INVALID_NUMBER_MSG: &str = "Please enter a valid number";

/// Outcome of checking one field.
///
/// `Missing`, `Invalid` and `OutOfRange` block submission; `Advisory` carries a
/// warning but the parsed value is still usable.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Missing { message: String },
    Invalid { message: String },
    OutOfRange { message: String },
    Advisory { value: f64, message: String },
    Valid { value: f64 },
}

impl Verdict {
    /// Whether this verdict prevents the form from being submitted.
    pub fn blocks(&self) -> bool {
        matches!(
            self,
            Verdict::Missing { .. } | Verdict::Invalid { .. } | Verdict::OutOfRange { .. }
        )
    }
}

/// Submission-time check: the full rule chain for one field.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Verdict {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        if spec.required {
            return Verdict::Missing {
                message: format!("{} is required", spec.label),
            };
        }
        // No optional fields exist in the current table; an empty one
        // contributes a zero rather than failing the numeric parse.
        return Verdict::Valid { value: 0.0 };
    }

    let parsed = match spec.parse {
        Parse::Float => trimmed.parse::<f64>().ok(),
        Parse::Integer => trimmed.parse::<i64>().ok().map(|n| n as f64),
    };
    let Some(value) = parsed else {
        return Verdict::Invalid {
            message: INVALID_NUMBER_MSG.to_string(),
        };
    };

    let (min, max) = spec.hard_range;
    if !(value >= min && value <= max) {
        return Verdict::OutOfRange {
            message: spec.range_message.to_string(),
        };
    }

    if let Some(soft) = spec.soft {
        if value > soft.max {
            return Verdict::Advisory {
                value,
                message: soft.message.to_string(),
            };
        }
    }

    Verdict::Valid { value }
}

/// Interactive (on-blur) check: surfaces only hard failures, leaves empty
/// input alone and never reports advisories.
pub fn validate_interactive(spec: &FieldSpec, raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    match validate_field(spec, raw) {
        Verdict::Invalid { message } | Verdict::OutOfRange { message } => Some(message),
        _ => None,
    }
}
