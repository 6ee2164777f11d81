//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    check::CheckArgs, completions::CompletionsArgs, delete::DeleteArgs, edit::EditArgs,
    list::ListArgs, new::NewArgs, show::ShowArgs,
};
use crate::core::entity::EntityKind;

#[derive(Parser)]
#[command(name = "clubreg")]
#[command(author, version, about = "Club member registry")]
#[command(long_about = "Keep a registry of club members (persons, soldiers, students) with validated edits, stored as a single YAML snapshot.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Snapshot file (default: club-members.yaml, or `store` from config)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new clubber
    New(NewArgs),

    /// Show a clubber by ID, personal number or student number
    Show(ShowArgs),

    /// List all clubbers
    List(ListArgs),

    /// Edit a clubber's fields
    Edit(EditArgs),

    /// Delete a clubber
    Delete(DeleteArgs),

    /// Check the snapshot file for problems
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (pretty for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

/// Member kind as accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindArg {
    #[default]
    Person,
    Soldier,
    Student,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Person => EntityKind::Person,
            KindArg::Soldier => EntityKind::Soldier,
            KindArg::Student => EntityKind::Student,
        }
    }
}
