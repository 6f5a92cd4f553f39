use noteboard_core::{filter_notes, HttpRemoteNotes, NoteDraft, NotesStore};

use crate::{
    app_config::AppConfig,
    args::NoteCommand,
    formatters::NoteListFormatter,
};

pub async fn note_cmd(config: &AppConfig, subcommand: NoteCommand) -> Result<(), anyhow::Error> {
    let store = NotesStore::new(HttpRemoteNotes::new(config.api_url.clone()));

    store.load().await;
    if let Some(error) = store.error() {
        anyhow::bail!("Could not load notes from {}: {}", config.api_url, error);
    }

    match subcommand {
        NoteCommand::Add(args) => {
            let note = store
                .add(NoteDraft {
                    title: args.title,
                    subheading: args.subheading,
                    content: args.content.join(" "),
                })
                .await?;

            println!("Note added successfully ({})", note.id);
        }
        NoteCommand::List(args) => {
            let notes = store.list();
            let notes: Vec<_> = match &args.term {
                Some(term) => filter_notes(&notes, term).into_iter().cloned().collect(),
                None => notes,
            };

            let mut formatter = NoteListFormatter::new(args.output);
            formatter
                .print_notes(&notes)
                .map_err(|e| anyhow::anyhow!("Error while formatting notes: {}", e))?;
        }
        NoteCommand::Show(args) => {
            let note = store
                .find(args.id)
                .ok_or_else(|| anyhow::anyhow!("No note found with id {}", args.id))?;

            let mut formatter = NoteListFormatter::new(args.output);
            formatter
                .print_notes(std::slice::from_ref(&note))
                .map_err(|e| anyhow::anyhow!("Error while formatting notes: {}", e))?;
        }
        NoteCommand::Edit(args) => {
            let current = store
                .find(args.id)
                .ok_or_else(|| anyhow::anyhow!("No note found with id {}", args.id))?;

            let draft = NoteDraft {
                title: args.title.unwrap_or(current.title),
                subheading: args.subheading.unwrap_or(current.subheading),
                content: args.content.unwrap_or(current.content),
            };

            let note = store.update(args.id, draft).await?;

            println!("Note updated successfully ({})", note.id);
        }
        NoteCommand::Delete(args) => {
            store.remove(args.id);

            println!(
                "Removed note {} from the local session (the service keeps its copy)",
                args.id
            );
        }
    };

    Ok(())
}
