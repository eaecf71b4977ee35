//! Wire types and the transport boundary for the entry-creation endpoint.
//!
//! `EntryTransport` is the sole seam between the submission layer and the
//! network. The HTTP implementation lives here; tests swap in scripted fakes.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// JSON body for `POST /add_entry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub sleep_hours: f64,
    pub water_litres: f64,
    pub mood: i64,
}

/// A response that was actually received: status plus the unparsed body.
/// Classification into success/error shapes happens in [`crate::response`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServerReply {
    pub status: u16,
    pub body: String,
}

impl ServerReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was obtained. Anything the server did say, however malformed,
/// arrives as a [`ServerReply`] instead.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// For non-HTTP transports and tests.
    #[error("server unreachable: {0}")]
    Unreachable(String),
}

/// One exchange per call, no retries, no request timeout: the exchange runs to
/// completion or to a transport failure.
#[async_trait]
pub trait EntryTransport: Send + Sync {
    async fn submit_entry(&self, entry: &NewEntry) -> Result<ServerReply, TransportError>;
}

/// `reqwest`-backed transport against the tracker backend.
pub struct HttpEntryTransport {
    client: Client,
    base_url: String,
}

impl HttpEntryTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl EntryTransport for HttpEntryTransport {
    async fn submit_entry(&self, entry: &NewEntry) -> Result<ServerReply, TransportError> {
        let url = format!("{}/add_entry", self.base_url);
        tracing::debug!(%url, "submitting daily entry");

        let response = self.client.post(&url).json(entry).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(ServerReply { status, body })
    }
}
