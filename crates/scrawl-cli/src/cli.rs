use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "scrawl")]
#[command(about = "Quick local notes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local database file
    #[arg(long, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Quick capture: scrawl "my thought here"
    #[arg(trailing_var_arg = true)]
    pub note: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        #[arg(short, long)]
        title: Option<String>,
        /// Hide the note behind the PIN
        #[arg(long)]
        secret: bool,
        /// Note content
        content: Vec<String>,
    },
    /// List notes, most recently modified first
    #[command(alias = "ls")]
    List {
        /// Number of notes to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a note in full
    Show {
        /// Note ID or unique ID prefix
        id: String,
        /// PIN for secret notes
        #[arg(long)]
        pin: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit an existing note
    Edit {
        /// Note ID or unique ID prefix
        id: String,
        /// Replace the title
        #[arg(short, long)]
        title: Option<String>,
        /// Replace the content instead of opening the editor
        #[arg(short, long)]
        content: Option<String>,
        /// Turn the note into a secret note
        #[arg(long, conflicts_with = "public")]
        secret: bool,
        /// Turn a secret note back into a regular note
        #[arg(long)]
        public: bool,
        /// PIN for secret notes
        #[arg(long)]
        pin: Option<String>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Delete every note
    Clear {
        /// Confirm deleting all notes
        #[arg(long)]
        yes: bool,
    },
    /// Write a note from stdin, auto-saving as you type when enabled
    Compose {
        /// Note title
        #[arg(short, long)]
        title: Option<String>,
        /// Hide the note behind the PIN
        #[arg(long)]
        secret: bool,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
    /// Export notes
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file, or a directory to write a timestamped export into
        /// (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Include secret notes in full (requires the PIN)
        #[arg(long)]
        pin: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Switch between dark and light theme
    Theme {
        #[arg(value_enum)]
        mode: ThemeMode,
    },
    /// Make text bigger or smaller
    Font {
        #[arg(value_enum)]
        step: FontStep,
    },
    /// Set the font family (a CSS font stack)
    FontFamily { family: String },
    /// Turn auto-save on or off
    Autosave {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Restore default settings
    Reset,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ThemeMode {
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FontStep {
    Bigger,
    Smaller,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}
