//! Parsing of console move input.

use anyhow::{Context, Result, bail};

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at (row, col), both 0-based.
    Play {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Leave the game.
    Quit,
}

/// Parses `row col` (whitespace or comma separated) or `q`.
pub fn parse_input(line: &str) -> Result<Input> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Input::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        bail!("expected `row col`, got {:?}", line);
    };
    let row = row.parse().with_context(|| format!("invalid row {:?}", row))?;
    let col = col.parse().with_context(|| format!("invalid column {:?}", col))?;
    Ok(Input::Play { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        assert_eq!(parse_input("1 2").unwrap(), Input::Play { row: 1, col: 2 });
        assert_eq!(parse_input(" 0,2\n").unwrap(), Input::Play { row: 0, col: 2 });
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_input("q").unwrap(), Input::Quit);
        assert_eq!(parse_input("QUIT").unwrap(), Input::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_input("").is_err());
        assert!(parse_input("1").is_err());
        assert!(parse_input("a b").is_err());
        assert!(parse_input("1 2 3").is_err());
    }
}
