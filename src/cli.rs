//! Command-line interface for tic-tac-toe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, for two humans or a human against a bot.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Play against the randomized bot instead of a second human
    #[arg(long)]
    pub solo: bool,

    /// Seed for the bot's random source (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for the winners and move logs
    #[arg(long, default_value = "logs")]
    pub logs: PathBuf,

    /// Skip writing log files
    #[arg(long)]
    pub no_logs: bool,
}
