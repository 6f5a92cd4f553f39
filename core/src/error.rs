use thiserror::Error;

/// Errors surfaced by the remote notes client.
///
/// None of these are retried internally; retry policy belongs to the
/// caller. `MalformedResponse` is strict here — callers that want the
/// lenient empty-list or echo-local-copy behavior downgrade it
/// themselves (the store does, see `NotesStore`).
#[derive(Debug, Error)]
pub enum RemoteNotesError {
    /// Transport-level failure: DNS, timeout, connection reset
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("remote service returned status {status}: {message}")]
    Remote { status: u16, message: String },

    /// The body did not match the `{message, data}` envelope
    #[error("malformed response envelope: {0}")]
    MalformedResponse(String),
}
