//! Strictly Games - console tic-tac-toe
//!
//! Reads `row col` moves from stdin and plays them on a bitwise board.

#![warn(missing_docs)]

mod cli;
mod input;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use input::{Input, parse_input};
use render::{render_board, render_status};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use strictly_tictactoe::{BitwiseBoard, MutableBoard};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting Strictly Games console");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game(BitwiseBoard::new(), stdin.lock(), stdout.lock(), cli.json)
}

/// Drives one game from `input` until it ends, the player quits, or input runs out.
#[instrument(skip(board, input, out))]
fn run_game<B, R, W>(mut board: B, input: R, mut out: W, json: bool) -> Result<()>
where
    B: MutableBoard + Serialize,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", render_board(&board))?;
    writeln!(out, "{}", render_status(&board))?;

    for line in input.lines() {
        let line = line?;
        let (row, col) = match parse_input(&line) {
            Ok(Input::Quit) => {
                info!("Player quit");
                break;
            }
            Ok(Input::Play { row, col }) => (row, col),
            Err(e) => {
                warn!(error = %e, "Unreadable move");
                writeln!(out, "{:#}", e)?;
                continue;
            }
        };

        let free_before = board.playable_cells().len();
        let outcome = board.play(row, col);
        if board.playable_cells().len() == free_before {
            debug!(row, col, "Move ignored");
            writeln!(out, "Move ({}, {}) not allowed", row, col)?;
            continue;
        }

        writeln!(out, "{}", render_board(&board))?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&board)?)?;
        }
        writeln!(out, "{}", render_status(&board))?;

        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(moves: &str, json: bool) -> String {
        let mut out = Vec::new();
        run_game(BitwiseBoard::new(), moves.as_bytes(), &mut out, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_game_until_win() {
        let out = transcript("0 0\n1 0\n1 1\n2 0\n2 2\n0 1\n", false);
        assert!(out.ends_with("X won along (0, 0)-(2, 2)\n"));
    }

    #[test]
    fn test_rejected_moves_are_reported() {
        let out = transcript("1 1\n1 1\n5 5\nnope\nq\n", false);
        assert!(out.contains("Move (1, 1) not allowed"));
        assert!(out.contains("Move (5, 5) not allowed"));
        assert!(out.contains("expected `row col`"));
        assert_eq!(out.matches("O to move").count(), 1);
    }

    #[test]
    fn test_json_snapshot() {
        let out = transcript("1 1\nq\n", true);
        assert!(out.contains(r#""home":16"#));
    }
}
