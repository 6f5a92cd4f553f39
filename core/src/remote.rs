use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::RemoteNotesError;
use crate::models::{Envelope, Note, NoteDraft, NoteId};

/// Operations the notes REST service offers.
///
/// Implementations perform one request per call and never retry; the
/// store (or whichever caller) owns the retry policy. Read-by-id has no
/// remote counterpart — it is served from the store's collection.
#[async_trait]
pub trait RemoteNotes: Send + Sync {
    /// Fetch the full collection.
    async fn fetch_all(&self) -> Result<Vec<Note>, RemoteNotesError>;

    /// Persist a new note. The identifier is already assigned by the
    /// caller; the service is not expected to rewrite it.
    async fn create(&self, note: &Note) -> Result<Note, RemoteNotesError>;

    /// Persist new fields for the note with the given id. The id is
    /// merged into the payload client-side.
    async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Note, RemoteNotesError>;
}

/// `RemoteNotes` backed by reqwest against a fixed base URL.
pub struct HttpRemoteNotes {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRemoteNotes {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        HttpRemoteNotes {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn a response into its JSON body, mapping non-success statuses
    /// to `Remote` and undecodable bodies to `MalformedResponse`.
    async fn read_body(response: reqwest::Response) -> Result<serde_json::Value, RemoteNotesError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteNotesError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| RemoteNotesError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl RemoteNotes for HttpRemoteNotes {
    async fn fetch_all(&self) -> Result<Vec<Note>, RemoteNotesError> {
        debug!(base_url = %self.base_url, "GET all-notes");

        let response = self
            .http
            .get(self.endpoint("all-notes"))
            .send()
            .await
            .map_err(RemoteNotesError::Network)?;

        let body = Self::read_body(response).await?;
        from_envelope::<Vec<Note>>(body)
    }

    async fn create(&self, note: &Note) -> Result<Note, RemoteNotesError> {
        debug!(id = note.id, "POST add-note");

        let response = self
            .http
            .post(self.endpoint("add-note"))
            .json(note)
            .send()
            .await
            .map_err(RemoteNotesError::Network)?;

        let body = Self::read_body(response).await?;
        from_envelope::<Note>(body)
    }

    async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Note, RemoteNotesError> {
        debug!(id, "PUT update-note");

        let note = draft.clone().into_note(id);

        let response = self
            .http
            .put(self.endpoint("update-note"))
            .json(&note)
            .send()
            .await
            .map_err(RemoteNotesError::Network)?;

        let body = Self::read_body(response).await?;
        from_envelope::<Note>(body)
    }
}

/// Extract the `data` payload from the service's envelope
fn from_envelope<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, RemoteNotesError> {
    serde_json::from_value::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| RemoteNotesError::MalformedResponse(e.to_string()))
}
