use clap::{Parser, Subcommand};

/// EcoTrack — A carbon footprint CLI that tracks emissions across
/// transportation, energy, diet, and waste streams.
#[derive(Parser, Debug)]
#[command(name = "ecotrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the persisted calculation history.
    #[arg(short, long, default_value = ".")]
    pub data_dir: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a footprint calculation and store the result.
    Calculate,

    /// List stored calculations, newest first.
    History {
        /// Expand each entry with its inputs and category breakdown.
        #[arg(long)]
        full: bool,

        /// Show at most N entries.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Show footprint trends against the Paris-aligned trajectory.
    Progress,

    /// Export the history to a CSV file, oldest first.
    Export {
        /// Output file path.
        #[arg(short, long, default_value = "ecotrack_history.csv")]
        output: String,
    },

    /// Clear the stored calculation history.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calculate
    }
}
