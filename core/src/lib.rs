#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod error;
pub mod models;
pub mod remote;
pub mod search;
pub mod store;

// Re-export commonly used types
pub use error::RemoteNotesError;
pub use models::{Envelope, Note, NoteDraft, NoteId};
pub use remote::{HttpRemoteNotes, RemoteNotes};
pub use search::filter_notes;
pub use store::NotesStore;
