//! Transient feedback messages.
//!
//! [`MessageBus`] owns the lifecycle of everything the user sees between
//! submission attempts: per-field error and warning text, the auto-hiding
//! form-level banners, and the clear-everything reset that precedes each new
//! attempt. Banner dismissal timers run on tokio; showing a new banner bumps a
//! per-slot generation counter so the stale timer's hide becomes a no-op
//! instead of cutting the new message short.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::fields::FieldId;
use crate::surface::{Banner, Severity, UiSurface};

/// How long a form-level error banner stays visible.
pub const FORM_ERROR_VISIBLE_MS: u64 = 5000;
/// How long the success banner stays visible.
pub const FORM_SUCCESS_VISIBLE_MS: u64 = 3000;

#[derive(Clone)]
pub struct MessageBus {
    surface: Arc<dyn UiSurface>,
    error_epoch: Arc<AtomicU64>,
    success_epoch: Arc<AtomicU64>,
}

impl MessageBus {
    pub fn new(surface: Arc<dyn UiSurface>) -> Self {
        Self {
            surface,
            error_epoch: Arc::new(AtomicU64::new(0)),
            success_epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Show error text under a field and mark its input as errored.
    pub fn show_field_error(&self, field: FieldId, text: &str) {
        self.surface.set_field_message(field, text, Severity::Error);
        self.surface.set_field_errored(field, true);
    }

    /// Show warning text under a field. Warnings do not mark the input.
    pub fn show_field_warning(&self, field: FieldId, text: &str) {
        self.surface.set_field_message(field, text, Severity::Warning);
    }

    /// Remove one field's feedback text and error mark.
    pub fn clear_field(&self, field: FieldId) {
        self.surface.clear_field_message(field);
        self.surface.set_field_errored(field, false);
    }

    /// Show the form-level error banner; it hides itself after
    /// [`FORM_ERROR_VISIBLE_MS`]. A newer banner restarts the clock.
    pub fn show_form_error(&self, text: &str) {
        self.surface.show_banner(Banner::Error, text);
        self.schedule_hide(Banner::Error, FORM_ERROR_VISIBLE_MS);
    }

    /// Show the success banner; it hides itself after
    /// [`FORM_SUCCESS_VISIBLE_MS`].
    pub fn show_form_success(&self, text: &str) {
        self.surface.show_banner(Banner::Success, text);
        self.schedule_hide(Banner::Success, FORM_SUCCESS_VISIBLE_MS);
    }

    /// Remove all field messages and error marks and hide both banners.
    /// Called unconditionally at the start of every submission attempt;
    /// calling it twice is the same as calling it once.
    pub fn clear_all(&self) {
        for field in FieldId::ALL {
            self.clear_field(field);
        }
        // Invalidate any pending dismissal timers before hiding.
        self.error_epoch.fetch_add(1, Ordering::SeqCst);
        self.success_epoch.fetch_add(1, Ordering::SeqCst);
        self.surface.hide_banner(Banner::Error);
        self.surface.hide_banner(Banner::Success);
    }

    fn epoch_for(&self, banner: Banner) -> &Arc<AtomicU64> {
        match banner {
            Banner::Error => &self.error_epoch,
            Banner::Success => &self.success_epoch,
        }
    }

    fn schedule_hide(&self, banner: Banner, after_ms: u64) {
        let epoch_cell = Arc::clone(self.epoch_for(banner));
        let epoch = epoch_cell.fetch_add(1, Ordering::SeqCst) + 1;
        let surface = Arc::clone(&self.surface);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(after_ms)).await;
            // A newer message (or a clear_all) owns the slot now.
            if epoch_cell.load(Ordering::SeqCst) == epoch {
                surface.hide_banner(banner);
            }
        });
    }
}
