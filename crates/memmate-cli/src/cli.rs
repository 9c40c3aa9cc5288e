use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use memmate_core::VERSION;

/// Memmate - a CLI-first personal tracker for memorizing verses
#[derive(Parser)]
#[command(name = "memmate")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "MEMMATE_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new store and config file
    Init(InitArgs),

    /// Add a new verse to the collection
    Add(AddArgs),

    /// List verses
    List(ListArgs),

    /// Show a verse with its progress and stats
    Show(ShowArgs),

    /// Update fields of a verse
    Update(UpdateArgs),

    /// Permanently remove a verse, its progress, and its test history
    Remove(RemoveArgs),

    /// Archive a verse (hidden from default listings, kept in storage)
    Archive(IdArgs),

    /// Restore an archived verse to active status
    Unarchive(IdArgs),

    /// Record a practice session for a verse
    Practice(IdArgs),

    /// Set the self-assessed comfort level for a verse
    Comfort(ComfortArgs),

    /// Reset progress for a verse and purge its test history
    Reset(ResetArgs),

    /// Record a test attempt for a verse
    Test(TestArgs),

    /// Show test history
    History(HistoryArgs),

    /// Show collection or per-verse statistics
    Stats(StatsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Default translation label for new verses
    #[arg(long)]
    pub translation: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Citation (e.g., "John 3:16")
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Verse text (overrides stdin/prompt)
    #[arg(long)]
    pub text: Option<String>,

    /// Translation label (defaults to the configured label)
    #[arg(long)]
    pub translation: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Include archived verses
    #[arg(long)]
    pub archived: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Verse ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `update` command
#[derive(Args)]
pub struct UpdateArgs {
    /// Verse ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New citation
    #[arg(long)]
    pub reference: Option<String>,

    /// New verse text
    #[arg(long)]
    pub text: Option<String>,

    /// New translation label
    #[arg(long)]
    pub translation: Option<String>,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Verse ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for commands that take a bare verse id
#[derive(Args)]
pub struct IdArgs {
    /// Verse ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `comfort` command
#[derive(Args)]
pub struct ComfortArgs {
    /// Verse ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Comfort level on a 1-5 scale
    #[arg(value_name = "LEVEL")]
    pub level: u8,
}

/// Arguments for the `reset` command
#[derive(Args)]
pub struct ResetArgs {
    /// Verse ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `test` command
#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("outcome")
        .required(true)
        .args(["passed", "failed"])
))]
pub struct TestArgs {
    /// Verse ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Record the attempt as passed
    #[arg(long)]
    pub passed: bool,

    /// Record the attempt as failed
    #[arg(long)]
    pub failed: bool,

    /// Accuracy score between 0.0 and 1.0
    #[arg(long)]
    pub score: Option<f64>,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Restrict to one verse (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Maximum number of results (most recent first)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Show stats for one verse instead of the whole collection
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
