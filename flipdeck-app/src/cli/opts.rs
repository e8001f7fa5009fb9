use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "flipdeck", version, about = "Flipdeck CLI/TUI")]
pub struct Cli {
    /// Data directory (defaults to the platform app-data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Account operations
    #[command(subcommand)]
    User(UserCmd),
    /// Deck operations
    #[command(subcommand)]
    Deck(DeckCmd),
    /// Review one deck from the command line
    Review(ReviewCmd),
    /// Launch Terminal UI
    Tui(AuthArgs),
}

#[derive(Debug, Subcommand, Clone)]
pub enum UserCmd {
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
}

/// Credentials every deck/review command authenticates with.
#[derive(Debug, Args, Clone)]
pub struct AuthArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Subcommand, Clone)]
pub enum DeckCmd {
    /// Parse a delimited text file and save it as a named deck
    Import(DeckImport),
    List {
        #[command(flatten)]
        auth: AuthArgs,
    },
    /// Write a deck back out in the import dialect
    Export {
        #[command(flatten)]
        auth: AuthArgs,
        name: String,
        path: PathBuf,
    },
    Rm {
        #[command(flatten)]
        auth: AuthArgs,
        name: String,
    },
}

#[derive(Debug, Args, Clone)]
pub struct DeckImport {
    #[command(flatten)]
    pub auth: AuthArgs,
    pub file: PathBuf,
    /// Name to save the deck under (replaces an existing deck of the same name)
    #[arg(long)]
    pub name: String,
}

#[derive(Debug, Args, Clone)]
pub struct ReviewCmd {
    #[command(flatten)]
    pub auth: AuthArgs,
    #[arg(long)]
    pub deck: String,
}
