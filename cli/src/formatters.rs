use std::io::{self, Write};

use noteboard_core::Note;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::args::OutputFormat;

pub struct NoteListFormatter {
    output: OutputFormat,
}

impl NoteListFormatter {
    pub fn new(output: OutputFormat) -> Self {
        NoteListFormatter { output }
    }

    pub fn print_notes(&mut self, notes: &[Note]) -> io::Result<()> {
        match self.output {
            OutputFormat::Json => {
                let rendered = serde_json::to_string_pretty(notes).map_err(io::Error::other)?;
                println!("{rendered}");
            }
            OutputFormat::Plain => {
                for note in notes {
                    println!("{}\t{}\t{}", note.id, note.title, note.subheading);
                }
            }
            OutputFormat::Pretty => {
                let mut stdout = StandardStream::stdout(ColorChoice::Auto);

                for note in notes {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
                    write!(&mut stdout, "{}", note.title)?;
                    stdout.reset()?;
                    writeln!(&mut stdout, " ({})", note.id)?;

                    stdout.set_color(ColorSpec::new().set_dimmed(true))?;
                    writeln!(&mut stdout, "{}", note.subheading)?;
                    stdout.reset()?;

                    for line in note.content.lines() {
                        writeln!(&mut stdout, "  {line}")?;
                    }
                    writeln!(&mut stdout)?;
                }
            }
        }

        Ok(())
    }
}
