//! Command interpreter
//!
//! Turns raw input lines into commands and directions. Nothing here touches
//! game state; the console does the reading and the game does the acting.

use crate::data::Direction;
use std::str::FromStr;

/// Commands the detective can type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Needs a direction on the following line
    Move,
    GetClue,
    Interrogate,
    Restart,
    Quit,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Move => "move",
            Command::GetClue => "get clue",
            Command::Interrogate => "interrogate",
            Command::Restart => "restart",
            Command::Quit => "quit",
        }
    }
}

/// Input that could not be understood
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command! Please try again.")]
    UnknownCommand(String),

    #[error("Invalid direction! Please choose N, E, S or W.")]
    InvalidDirection(String),
}

/// Lower-case the line and squeeze runs of whitespace to single spaces
fn normalize(line: &str) -> String {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parse a command line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    match normalize(line).as_str() {
        "move" => Ok(Command::Move),
        "get clue" => Ok(Command::GetClue),
        "interrogate" => Ok(Command::Interrogate),
        "restart" => Ok(Command::Restart),
        "quit" => Ok(Command::Quit),
        _ => Err(CommandError::UnknownCommand(line.trim().to_string())),
    }
}

/// Parse the direction line that follows a move
pub fn parse_direction(line: &str) -> Result<Direction, CommandError> {
    match normalize(line).as_str() {
        "n" => Ok(Direction::North),
        "e" => Ok(Direction::East),
        "s" => Ok(Direction::South),
        "w" => Ok(Direction::West),
        _ => Err(CommandError::InvalidDirection(line.trim().to_string())),
    }
}

impl FromStr for Direction {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_direction(s)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_ignore_case() {
        assert_eq!(parse_command("MOVE"), Ok(Command::Move));
        assert_eq!(parse_command("Get Clue"), Ok(Command::GetClue));
        assert_eq!(parse_command("interrogate"), Ok(Command::Interrogate));
        assert_eq!(parse_command("Quit"), Ok(Command::Quit));
        assert_eq!(parse_command("RESTART"), Ok(Command::Restart));
    }

    #[test]
    fn test_commands_ignore_stray_whitespace() {
        assert_eq!(parse_command("  get   clue \r"), Ok(Command::GetClue));
        assert_eq!(parse_command("\tquit\n"), Ok(Command::Quit));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command(" dance "),
            Err(CommandError::UnknownCommand("dance".to_string()))
        );
        assert!(parse_command("").is_err());
        assert!(parse_command("getclue").is_err());
        assert!(parse_command("move north").is_err());
    }

    #[test]
    fn test_directions() {
        assert_eq!(parse_direction("n"), Ok(Direction::North));
        assert_eq!(parse_direction("E"), Ok(Direction::East));
        assert_eq!(parse_direction(" s "), Ok(Direction::South));
        assert_eq!("W".parse::<Direction>(), Ok(Direction::West));
    }

    #[test]
    fn test_invalid_direction() {
        assert!(matches!(
            parse_direction("up"),
            Err(CommandError::InvalidDirection(token)) if token == "up"
        ));
        assert!(parse_direction("north").is_err());
        assert!(parse_direction("").is_err());
    }

    #[test]
    fn test_error_messages_are_player_facing() {
        let err = parse_command("xyzzy").unwrap_err();
        assert_eq!(err.to_string(), "Invalid command! Please try again.");
    }

    #[test]
    fn test_keywords_parse_back() {
        for command in [
            Command::Move,
            Command::GetClue,
            Command::Interrogate,
            Command::Restart,
            Command::Quit,
        ] {
            assert_eq!(command.keyword().parse::<Command>(), Ok(command));
        }
    }
}
