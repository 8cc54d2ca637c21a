//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Run the questionnaire on stdin/stdout (default)
    Chat {
        /// Chat identity the console messages come from
        #[arg(long, default_value_t = 1)]
        user: i64,
    },
    /// List submitted applications
    List {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show one application by username
    Show {
        /// Applicant handle (a leading @ is ignored)
        username: String,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Chat { user: 1 }
    }
}
