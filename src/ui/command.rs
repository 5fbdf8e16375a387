//! Player input commands

use crate::game::{GameResult, Square};

/// A single line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a square: select, move to, or deselect
    Click(Square),
    /// Move directly from one square to another
    Move(Square, Square),
    NewGame,
    History,
    Flip,
    Help,
    Quit,
}

/// Parse an input line such as `e2`, `e2 e4`, `e2e4` or `new`
///
/// Blank lines parse to `None`. Anything that is neither a keyword nor
/// valid square notation is an error.
pub fn parse_command(line: &str) -> GameResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let command = match line.to_ascii_lowercase().as_str() {
        "new" | "restart" => Command::NewGame,
        "history" | "moves" => Command::History,
        "flip" => Command::Flip,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => {
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [from, to] => {
                    Command::Move(Square::from_algebraic(from)?, Square::from_algebraic(to)?)
                }
                [word] if word.len() == 4 && word.is_ascii() => Command::Move(
                    Square::from_algebraic(&word[..2])?,
                    Square::from_algebraic(&word[2..])?,
                ),
                _ => Command::Click(Square::from_algebraic(line)?),
            }
        }
    };

    Ok(Some(command))
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  e2        click a square (select a piece, or move the selected piece there)
  e2 e4     move a piece directly (also accepts e2e4)
  new       start a new game
  history   print the move list
  flip      flip the board and save the setting
  help      show this help
  quit      exit";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameError;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_parse_square_and_moves() {
        assert_eq!(parse_command("e2").unwrap(), Some(Command::Click(sq("e2"))));
        assert_eq!(
            parse_command(" e2 e4 ").unwrap(),
            Some(Command::Move(sq("e2"), sq("e4")))
        );
        assert_eq!(
            parse_command("g1f3").unwrap(),
            Some(Command::Move(sq("g1"), sq("f3")))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("new").unwrap(), Some(Command::NewGame));
        assert_eq!(parse_command("HISTORY").unwrap(), Some(Command::History));
        assert_eq!(parse_command("flip").unwrap(), Some(Command::Flip));
        assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_command("z9"),
            Err(GameError::InvalidNotation { .. })
        ));
        assert!(parse_command("e2 e9").is_err());
        assert!(parse_command("castle long").is_err());
    }
}
