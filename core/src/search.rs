use crate::models::Note;

/// Case-insensitive substring filter over title, subheading and content.
///
/// Derived filtering for display-layer consumers; the store's collection
/// is never mutated. A blank query matches every note.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return notes.iter().collect();
    }

    notes
        .iter()
        .filter(|n| {
            n.title.to_lowercase().contains(&needle)
                || n.subheading.to_lowercase().contains(&needle)
                || n.content.to_lowercase().contains(&needle)
        })
        .collect()
}
