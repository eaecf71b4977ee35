//! Client-side validation and submission layer for the Pulse daily-metrics
//! tracker.
//!
//! A user enters three observations (sleep hours, water litres, mood rating);
//! this crate decides whether the input is well-formed, advisory, or rejected,
//! turns a validated form into one `POST /add_entry` exchange, folds the
//! server's heterogeneous reply shapes into field- and form-level feedback,
//! and manages the transient messages that appear and expire around each
//! attempt. Rendering sits behind the [`UiSurface`] trait so the whole flow
//! runs without a real page.

pub mod api;
pub mod charts;
pub mod controller;
pub mod feedback;
pub mod fields;
pub mod response;
pub mod surface;
pub mod validate;

pub use api::{EntryTransport, HttpEntryTransport, NewEntry, ServerReply, TransportError};
pub use charts::{ChartRefreshNotifier, SurfaceChartRefresher};
pub use controller::{
    SubmissionController, SubmissionOutcome, SubmissionState, TRIGGER_LABEL_BUSY,
    TRIGGER_LABEL_IDLE,
};
pub use feedback::{MessageBus, FORM_ERROR_VISIBLE_MS, FORM_SUCCESS_VISIBLE_MS};
pub use fields::{spec_for, FieldId, FieldSpec, Parse, SoftBound, FIELD_SPECS};
pub use response::{classify, DetailItem, ServerOutcome};
pub use validate::{validate_field, validate_interactive, Verdict};
pub use surface::{Banner, Severity, UiSurface};
