use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::error::RemoteNotesError;
use crate::models::{Note, NoteDraft, NoteId};
use crate::remote::RemoteNotes;

/// Session-scoped state: one per running application instance
#[derive(Debug)]
struct Session {
    notes: Vec<Note>,
    loading: bool,
    error: Option<String>,
}

/// The single in-session owner of the notes collection.
///
/// Construct one at session start and pass it to consumers explicitly;
/// they read snapshots via `list`/`find` and mutate only through
/// `add`/`update`/`remove`. Every mutation is confirmed by the remote
/// service before it becomes visible locally.
///
/// Mutations commit against the state at commit time, not against a
/// snapshot taken when the call started, so two in-flight mutations
/// both land once their remote calls resolve.
pub struct NotesStore<C> {
    client: C,
    session: RwLock<Session>,
    id_clock: AtomicI64,
}

impl<C: RemoteNotes> NotesStore<C> {
    /// Create a store in its initial loading state. Call `load` to
    /// populate it; until then `list` is empty and `is_loading` is true.
    pub fn new(client: C) -> Self {
        NotesStore {
            client,
            session: RwLock::new(Session {
                notes: Vec::new(),
                loading: true,
                error: None,
            }),
            id_clock: AtomicI64::new(0),
        }
    }

    /// Fetch the full collection and populate the store.
    ///
    /// A failure is absorbed into the session `error` rather than
    /// returned; consumers surface it passively. Calling `load` again
    /// retries and clears the previous error. A response that does not
    /// match the envelope degrades to an empty collection so a consumer
    /// never crashes on an unexpected shape.
    pub async fn load(&self) {
        {
            let mut session = self.write();
            session.loading = true;
            session.error = None;
        }

        let result = self.client.fetch_all().await;

        let mut session = self.write();
        session.loading = false;

        match result {
            Ok(notes) => session.notes = notes,
            Err(RemoteNotesError::MalformedResponse(reason)) => {
                warn!(%reason, "list response did not match the envelope, starting empty");
                session.notes = Vec::new();
            }
            Err(e) => session.error = Some(format!("could not load notes: {e}")),
        }
    }

    /// Snapshot of the collection, most recent first
    pub fn list(&self) -> Vec<Note> {
        self.read().notes.clone()
    }

    /// Look a note up by id
    pub fn find(&self, id: NoteId) -> Option<Note> {
        self.read().notes.iter().find(|n| n.id == id).cloned()
    }

    /// True only while the initial fetch (or a retry) is in flight
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// The initial fetch's failure message, if it failed
    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// Assign a fresh id, persist the note remotely, then prepend it to
    /// the collection. All-or-nothing: on failure the collection is
    /// untouched and the error propagates. A malformed acknowledgement
    /// counts as success — the write went through, so the locally built
    /// note is kept.
    pub async fn add(&self, draft: NoteDraft) -> Result<Note, RemoteNotesError> {
        let note = draft.into_note(self.next_id());

        match self.client.create(&note).await {
            Ok(_) => {}
            Err(RemoteNotesError::MalformedResponse(reason)) => {
                warn!(%reason, id = note.id, "create acknowledged outside the envelope, keeping local copy");
            }
            Err(e) => return Err(e),
        }

        let mut session = self.write();
        let mut next = Vec::with_capacity(session.notes.len() + 1);
        next.push(note.clone());
        next.extend(session.notes.iter().cloned());
        session.notes = next;

        Ok(note)
    }

    /// Persist new fields for a note, then replace it in the collection.
    ///
    /// The caller-given id stays authoritative: whatever id the remote
    /// echoes back is discarded. On failure the collection is untouched
    /// and the error propagates.
    pub async fn update(&self, id: NoteId, draft: NoteDraft) -> Result<Note, RemoteNotesError> {
        match self.client.update(id, &draft).await {
            Ok(_) => {}
            Err(RemoteNotesError::MalformedResponse(reason)) => {
                warn!(%reason, id, "update acknowledged outside the envelope, keeping local copy");
            }
            Err(e) => return Err(e),
        }

        let updated = draft.into_note(id);

        let mut session = self.write();
        let next: Vec<Note> = session
            .notes
            .iter()
            .map(|n| if n.id == id { updated.clone() } else { n.clone() })
            .collect();
        session.notes = next;

        Ok(updated)
    }

    /// Remove a note from the local collection immediately.
    ///
    /// The service defines no delete endpoint, so no remote call is made
    /// and the service keeps its copy. Removing an unknown id is a no-op.
    pub fn remove(&self, id: NoteId) {
        let mut session = self.write();
        let next: Vec<Note> = session
            .notes
            .iter()
            .filter(|n| n.id != id)
            .cloned()
            .collect();
        session.notes = next;
    }

    /// Wall-clock milliseconds, nudged past the previous id when two
    /// creations land in the same millisecond
    fn next_id(&self) -> NoteId {
        let now = chrono::Utc::now().timestamp_millis();

        match self
            .id_clock
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            }) {
            Ok(last) | Err(last) => now.max(last + 1),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}
