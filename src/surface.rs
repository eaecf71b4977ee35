//! The rendered-page boundary.
//!
//! [`UiSurface`] is the only way the submission layer touches the interface:
//! typed accessors per logical slot instead of shared page-global state. A real
//! renderer implements it once; tests implement it with a recorder.

use crate::fields::FieldId;

/// Severity of a rendered feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Success,
}

/// The two form-level banner slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Error,
    Success,
}

/// Abstraction over every UI slot the submission layer reads or writes.
///
/// All mutations are one-way and synchronous; nothing here suspends. The
/// success banner may be created lazily by the implementation on first
/// `show_banner(Banner::Success, ..)`.
pub trait UiSurface: Send + Sync {
    /// Current raw text of a field's input.
    fn field_value(&self, field: FieldId) -> String;

    /// Overwrite a field's input text (used to clear inputs after success).
    fn set_field_value(&self, field: FieldId, value: &str);

    /// Show a message in the field's feedback region.
    fn set_field_message(&self, field: FieldId, text: &str, severity: Severity);

    /// Remove the field's feedback text.
    fn clear_field_message(&self, field: FieldId);

    /// Toggle the field input's error styling mark. Warnings never set this.
    fn set_field_errored(&self, field: FieldId, errored: bool);

    /// Show a form-level banner with the given text.
    fn show_banner(&self, banner: Banner, text: &str);

    /// Hide a form-level banner. Hiding an already hidden banner is a no-op.
    fn hide_banner(&self, banner: Banner);

    /// Enable or disable the submit trigger.
    fn set_trigger_enabled(&self, enabled: bool);

    /// Change the submit trigger's visible label.
    fn set_trigger_label(&self, label: &str);

    /// Replace the multi-line feedback region with the given lines.
    fn set_feedback_lines(&self, lines: &[String]);

    /// Point a metric's chart slot at a new source URL.
    fn set_chart_source(&self, field: FieldId, url: &str);
}
