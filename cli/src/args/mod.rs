use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "noteboard",
    version,
    about,
    long_about = "CLI for a remote noteboard service"
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args, Serialize)]
pub struct ConfigArgs {
    /// Path to profile configuration file
    #[arg(long, short, env = "NOTEBOARD_PROFILE")]
    pub profile_path: Option<String>,

    /// Base URL of the notes service
    #[arg(long, env = "NOTEBOARD_API_URL")]
    pub api_url: Option<String>,
}

#[derive(Debug, Subcommand, Serialize, PartialEq)]
pub enum Command {
    /// Prints out current configuration
    Config,
    /// Initializes a new profile
    Init,
    /// Notes subcommands
    #[clap(subcommand)]
    Note(NoteCommand),
    /// Creates a new note. Alias for 'note add'.
    New(NoteAddArgs),
}

#[derive(Debug, Subcommand, Serialize, PartialEq)]
pub enum NoteCommand {
    /// Creates a new note.
    Add(NoteAddArgs),
    /// Lists notes, newest first.
    List(NoteListArgs),
    /// Shows a single note.
    Show(NoteShowArgs),
    /// Updates an existing note.
    Edit(NoteEditArgs),
    /// Removes a note from the local session.
    Delete(NoteDeleteArgs),
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct NoteAddArgs {
    /// Note title
    #[arg(long, short)]
    pub title: String,

    /// Note subheading
    #[arg(long, short)]
    pub subheading: String,

    /// Note content
    #[arg(trailing_var_arg = true)]
    pub content: Vec<String>,
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Pretty,
    Plain,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Pretty
    }
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct NoteListArgs {
    /// Search term to filter notes (matches title, subheading and content)
    #[arg(default_value = None)]
    pub term: Option<String>,

    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct NoteShowArgs {
    /// Note ID to show
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct NoteEditArgs {
    /// Note ID to edit
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New title (keeps the current one when omitted)
    #[arg(long, short)]
    pub title: Option<String>,

    /// New subheading (keeps the current one when omitted)
    #[arg(long, short)]
    pub subheading: Option<String>,

    /// New content (keeps the current one when omitted)
    #[arg(long, short)]
    pub content: Option<String>,
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct NoteDeleteArgs {
    /// Note ID to remove from the local session
    #[arg(value_name = "ID")]
    pub id: i64,
}
