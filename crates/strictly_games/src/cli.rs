//! Command-line interface for the console game.

use clap::Parser;

/// Strictly Games - tic-tac-toe on a bit-packed board
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print a JSON snapshot of the board after every move
    #[arg(long)]
    pub json: bool,
}
