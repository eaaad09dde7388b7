use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "snipvault")]
#[command(about = "Store, search and deduplicate code snippets", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the snippet store, overriding the config file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List snippets, optionally for one language
    List(ListArgs),
    /// Search names, descriptions and key terms
    Search(SearchArgs),
    /// Print one snippet including its code
    Show(ShowArgs),
    /// Add a snippet
    Add(AddArgs),
    /// Edit an existing snippet
    Edit(EditArgs),
    /// Remove a snippet
    Rm(RmArgs),
    /// Distinct languages in first-seen order
    Languages,
    /// Snippet counts per language
    Stats,
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub term: String,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,

    #[arg(long)]
    pub json: bool,
}

/// Where snippet code comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct CodeArgs {
    /// Code given inline
    #[arg(long, conflicts_with = "file")]
    pub code: Option<String>,

    /// Read code from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated key terms
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Language tag; guessed from the code when omitted
    #[arg(long)]
    pub language: Option<String>,

    // stdin is read when neither --code nor --file is given
    #[command(flatten)]
    pub code: CodeArgs,

    /// Save even if the name or code duplicates another snippet
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated key terms, replacing the current ones
    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    // current code is kept when neither --code nor --file is given
    #[command(flatten)]
    pub code: CodeArgs,

    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct RmArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Write the effective configuration back to the config file
    #[arg(long)]
    pub write: bool,
}
