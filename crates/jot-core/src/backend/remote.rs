//! Remote HTTP backend
//!
//! Speaks the spreadsheet-endpoint wire contract: every response is a
//! `{success, ...}` envelope, with `notes` on fetch and an optional `message`
//! on failure. Transport failures and explicit `success: false` answers are
//! kept distinct (`BackendUnavailable` vs `BackendRejected`).

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::backend::PersistenceBackend;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId};

/// Client-side timeout applied to every request. A hung request becomes a
/// reported `BackendUnavailable` instead of a collection that never refreshes.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch response envelope: `GET {base}/notes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchEnvelope {
    pub success: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Acknowledgement envelope: write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// HTTP-backed store for one remote note collection.
#[derive(Clone)]
pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    /// Client for the endpoint at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_HTTP_TIMEOUT)
    }

    /// Client for the endpoint at `base_url` with an explicit timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = normalize_endpoint(base_url.into())?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::BackendUnavailable(error.to_string()))?;
        Ok(Self { base_url, client })
    }

    /// Endpoint this store talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: &NoteId) -> String {
        format!("{}/notes/{id}", self.base_url)
    }

    async fn check_ack(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        let ack = response
            .json::<AckEnvelope>()
            .await
            .map_err(|error| rejected_payload(status, &error))?;
        if ack.success {
            Ok(())
        } else {
            Err(Error::BackendRejected(envelope_message(status, ack.message)))
        }
    }
}

impl PersistenceBackend for HttpStore {
    async fn load(&self) -> Result<Vec<Note>> {
        let response = self
            .client
            .get(self.notes_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let envelope = response
            .json::<FetchEnvelope>()
            .await
            .map_err(|error| rejected_payload(status, &error))?;

        if envelope.success {
            tracing::debug!(count = envelope.notes.len(), "fetched remote collection");
            Ok(envelope.notes)
        } else {
            Err(Error::BackendRejected(envelope_message(
                status,
                envelope.message,
            )))
        }
    }

    async fn insert(&self, note: &Note) -> Result<()> {
        let response = self
            .client
            .post(self.notes_url())
            .json(note)
            .send()
            .await
            .map_err(transport)?;
        Self::check_ack(response).await
    }

    async fn update(&self, note: &Note) -> Result<()> {
        let response = self
            .client
            .put(self.note_url(&note.id))
            .json(note)
            .send()
            .await
            .map_err(transport)?;
        Self::check_ack(response).await
    }

    async fn remove(&self, id: &NoteId) -> Result<()> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(transport)?;
        Self::check_ack(response).await
    }
}

fn transport(error: reqwest::Error) -> Error {
    Error::BackendUnavailable(error.to_string())
}

fn rejected_payload(status: StatusCode, error: &reqwest::Error) -> Error {
    Error::BackendRejected(format!("HTTP {status}: invalid response payload ({error})"))
}

fn envelope_message(status: StatusCode, message: Option<String>) -> String {
    message.unwrap_or_else(|| format!("HTTP {status}"))
}

fn normalize_endpoint(raw: String) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::BackendRejected(
            "Remote endpoint must not be empty".to_string(),
        ));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(Error::BackendRejected(format!(
            "Remote endpoint must be an http(s) URL: {trimmed}"
        )));
    }
    Ok(trimmed.to_string())
}
