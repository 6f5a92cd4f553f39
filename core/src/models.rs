use serde::{Deserialize, Serialize};

/// Note identifier, assigned client-side from wall-clock milliseconds
pub type NoteId = i64;

/// A note as held in the store and sent over the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// Unique within the session's collection
    pub id: NoteId,
    /// Display title
    pub title: String,
    /// Display subheading
    pub subheading: String,
    /// Free-text body, newlines preserved verbatim
    pub content: String,
}

/// Note fields without an identifier, used as the create/update payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub subheading: String,
    pub content: String,
}

impl NoteDraft {
    /// Attach an identifier, producing a full note
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            subheading: self.subheading,
            content: self.content,
        }
    }
}

/// The `{message, data}` wrapper the remote service answers with
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: String,
    pub data: T,
}
