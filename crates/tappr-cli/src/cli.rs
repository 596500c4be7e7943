use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `tappr` binary.
#[derive(Debug, Parser)]
#[command(name = "tappr", version, about = "Tappr - compatibility discovery toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Question bank inspection.
    Bank {
        #[command(subcommand)]
        action: BankCommands,
    },
    /// Report bank and engine readiness.
    Health,
    /// Discovery session administration.
    Sessions {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Card code registry queries.
    Cards {
        #[command(subcommand)]
        action: CardCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum BankCommands {
    /// Check the compiled-in bank for duplicate IDs and malformed questions.
    Validate,
    /// Question counts per category and options-per-question average.
    Stats,
    /// Print a sampled session's worth of questions.
    Sample {
        /// Number of questions to sample.
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Show a session by ID.
    Show { session_id: String },
    /// Sessions awaiting a user's answers as target.
    Pending { user_id: String },
    /// Completed sessions a user initiated.
    Completed { user_id: String },
    /// Flip pending sessions past their expiry timestamp to expired.
    Sweep,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CardCommands {
    /// Resolve a printed card code to its owner.
    Lookup { code: String },
    /// List card records registered to a user.
    List { user_id: String },
}
