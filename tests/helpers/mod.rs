//! Shared fakes for driving the submission layer without a page or a server.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use pulse_client::{
    ChartRefreshNotifier, EntryTransport, FieldId, NewEntry, ServerReply, Severity,
    SubmissionController, SurfaceChartRefresher, TransportError, UiSurface,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("pulse_client=debug")
        .try_init();
}

/// Records every slot mutation the submission layer performs.
#[derive(Default)]
pub struct RecordingSurface {
    pub values: Mutex<HashMap<FieldId, String>>,
    pub messages: Mutex<HashMap<FieldId, (String, Severity)>>,
    pub errored: Mutex<HashMap<FieldId, bool>>,
    pub error_banner: Mutex<Option<String>>,
    pub success_banner: Mutex<Option<String>>,
    /// Enable/disable history for the trigger, oldest first.
    pub trigger_enabled: Mutex<Vec<bool>>,
    pub trigger_labels: Mutex<Vec<String>>,
    pub feedback_lines: Mutex<Vec<String>>,
    /// Every chart-source assignment, oldest first.
    pub chart_sources: Mutex<Vec<(FieldId, String)>>,
}

impl RecordingSurface {
    pub fn with_values(sleep: &str, water: &str, mood: &str) -> Arc<Self> {
        let surface = Arc::new(Self::default());
        {
            let mut values = surface.values.lock().unwrap();
            values.insert(FieldId::Sleep, sleep.to_string());
            values.insert(FieldId::Water, water.to_string());
            values.insert(FieldId::Mood, mood.to_string());
        }
        surface
    }

    pub fn message(&self, field: FieldId) -> Option<(String, Severity)> {
        self.messages.lock().unwrap().get(&field).cloned()
    }

    pub fn is_errored(&self, field: FieldId) -> bool {
        self.errored.lock().unwrap().get(&field) == Some(&true)
    }

    pub fn value(&self, field: FieldId) -> String {
        self.values.lock().unwrap().get(&field).cloned().unwrap_or_default()
    }
}

impl UiSurface for RecordingSurface {
    fn field_value(&self, field: FieldId) -> String {
        self.value(field)
    }

    fn set_field_value(&self, field: FieldId, value: &str) {
        self.values.lock().unwrap().insert(field, value.to_string());
    }

    fn set_field_message(&self, field: FieldId, text: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .insert(field, (text.to_string(), severity));
    }

    fn clear_field_message(&self, field: FieldId) {
        self.messages.lock().unwrap().remove(&field);
    }

    fn set_field_errored(&self, field: FieldId, errored: bool) {
        self.errored.lock().unwrap().insert(field, errored);
    }

    fn show_banner(&self, banner: pulse_client::Banner, text: &str) {
        match banner {
            pulse_client::Banner::Error => {
                *self.error_banner.lock().unwrap() = Some(text.to_string());
            }
            pulse_client::Banner::Success => {
                *self.success_banner.lock().unwrap() = Some(text.to_string());
            }
        }
    }

    fn hide_banner(&self, banner: pulse_client::Banner) {
        match banner {
            pulse_client::Banner::Error => *self.error_banner.lock().unwrap() = None,
            pulse_client::Banner::Success => *self.success_banner.lock().unwrap() = None,
        }
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.trigger_enabled.lock().unwrap().push(enabled);
    }

    fn set_trigger_label(&self, label: &str) {
        self.trigger_labels.lock().unwrap().push(label.to_string());
    }

    fn set_feedback_lines(&self, lines: &[String]) {
        *self.feedback_lines.lock().unwrap() = lines.to_vec();
    }

    fn set_chart_source(&self, field: FieldId, url: &str) {
        self.chart_sources
            .lock()
            .unwrap()
            .push((field, url.to_string()));
    }
}

/// Replays a scripted sequence of replies, one per exchange.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<ServerReply, TransportError>>>,
    pub calls: AtomicUsize,
    pub sent: Mutex<Vec<NewEntry>>,
}

impl ScriptedTransport {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let transport = Arc::new(Self::default());
        transport.push_reply(status, body);
        transport
    }

    pub fn failing(message: &str) -> Arc<Self> {
        let transport = Arc::new(Self::default());
        transport
            .script
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Unreachable(message.to_string())));
        transport
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.script.lock().unwrap().push_back(Ok(ServerReply {
            status,
            body: body.to_string(),
        }));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntryTransport for ScriptedTransport {
    async fn submit_entry(&self, entry: &NewEntry) -> Result<ServerReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(entry.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted transport exhausted")
    }
}

/// Blocks each exchange until released, for in-flight assertions.
#[derive(Default)]
pub struct GatedTransport {
    pub gate: Notify,
    pub calls: AtomicUsize,
}

impl GatedTransport {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntryTransport for GatedTransport {
    async fn submit_entry(&self, _entry: &NewEntry) -> Result<ServerReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(ServerReply {
            status: 200,
            body: "{}".to_string(),
        })
    }
}

/// Counts notifications without touching any surface.
#[derive(Default)]
pub struct CountingNotifier {
    pub notified: AtomicUsize,
}

impl ChartRefreshNotifier for CountingNotifier {
    fn notify(&self, _token: i64) {
        self.notified.fetch_add(1, Ordering::SeqCst);
    }
}

/// Controller wired to the recording surface and the real chart refresher.
pub fn controller_with(
    surface: &Arc<RecordingSurface>,
    transport: Arc<dyn EntryTransport>,
) -> Arc<SubmissionController> {
    let ui: Arc<dyn UiSurface> = surface.clone();
    let notifier = Arc::new(SurfaceChartRefresher::new(Arc::clone(&ui)));
    Arc::new(SubmissionController::new(ui, transport, notifier))
}
