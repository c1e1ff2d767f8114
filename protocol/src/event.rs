use std::str::FromStr;

use minigames_core::Coord;
use minigames_core::connect_four::COLS;
use minigames_core::snake::Direction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown input {0:?}")]
    Unknown(String),
    #[error("Column must be between 1 and 7, got {0}")]
    ColumnOutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConnectFourEvent {
    /// Zero-based column.
    Drop { column: Coord },
    Undo,
    Restart,
}

impl FromStr for ConnectFourEvent {
    type Err = ParseEventError;

    /// `1`-`7` drop into that column, `u` undoes, `r` restarts.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim().to_ascii_lowercase();
        match token.as_str() {
            "" => Err(ParseEventError::Empty),
            "u" | "undo" => Ok(Self::Undo),
            "r" | "restart" => Ok(Self::Restart),
            _ => match token.parse::<Coord>() {
                Ok(column @ 1..=COLS) => Ok(Self::Drop { column: column - 1 }),
                Ok(_) => Err(ParseEventError::ColumnOutOfRange(token)),
                Err(_) => Err(ParseEventError::Unknown(token)),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SnakeEvent {
    Steer { direction: Direction },
    Start,
    Pause,
    Resume,
    TogglePause,
    Restart,
}

impl FromStr for SnakeEvent {
    type Err = ParseEventError;

    /// `w`/`a`/`s`/`d` or arrow names steer, space or `p` toggles pause, `r` restarts.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.is_empty() {
            return Err(ParseEventError::Empty);
        }
        // a lone space is the pause key, so only trim when something else is left
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Ok(Self::TogglePause);
        }

        let steer = |direction| -> Result<Self, Self::Err> { Ok(Self::Steer { direction }) };
        match trimmed.to_ascii_lowercase().as_str() {
            "w" | "up" => steer(Direction::Up),
            "a" | "left" => steer(Direction::Left),
            "s" | "down" => steer(Direction::Down),
            "d" | "right" => steer(Direction::Right),
            "p" | "space" => Ok(Self::TogglePause),
            "start" => Ok(Self::Start),
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "r" | "restart" => Ok(Self::Restart),
            other => Err(ParseEventError::Unknown(other.into())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WordleEvent {
    Letter { letter: char },
    Enter,
    Backspace,
}

impl WordleEvent {
    /// Expands a typed line into key presses.
    ///
    /// A line of letters types them and presses enter, `-` deletes one letter, and the
    /// key names `enter` and `backspace` press those keys alone.
    pub fn parse_line(line: &str) -> Result<Vec<Self>, ParseEventError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseEventError::Empty);
        }
        if let Ok(event) = line.parse::<Self>() {
            return Ok(vec![event]);
        }
        if !line.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseEventError::Unknown(line.into()));
        }

        let mut events: Vec<Self> = line.chars().map(|letter| Self::Letter { letter }).collect();
        events.push(Self::Enter);
        Ok(events)
    }
}

impl FromStr for WordleEvent {
    type Err = ParseEventError;

    /// A single key: one letter, `enter`, or `backspace` (also `-`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ParseEventError::Empty),
            (Some('-'), None) => Ok(Self::Backspace),
            (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(Self::Letter { letter }),
            _ => match token.to_ascii_lowercase().as_str() {
                "enter" => Ok(Self::Enter),
                "backspace" | "back" => Ok(Self::Backspace),
                _ => Err(ParseEventError::Unknown(token.into())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_four_tokens() {
        assert_eq!("1".parse(), Ok(ConnectFourEvent::Drop { column: 0 }));
        assert_eq!(" 7 ".parse(), Ok(ConnectFourEvent::Drop { column: 6 }));
        assert_eq!("U".parse(), Ok(ConnectFourEvent::Undo));
        assert_eq!("restart".parse(), Ok(ConnectFourEvent::Restart));
        assert_eq!(
            "8".parse::<ConnectFourEvent>(),
            Err(ParseEventError::ColumnOutOfRange("8".into()))
        );
        assert_eq!(
            "0".parse::<ConnectFourEvent>(),
            Err(ParseEventError::ColumnOutOfRange("0".into()))
        );
        assert_eq!("".parse::<ConnectFourEvent>(), Err(ParseEventError::Empty));
    }

    #[test]
    fn snake_tokens() {
        assert_eq!(
            "w".parse(),
            Ok(SnakeEvent::Steer {
                direction: Direction::Up
            })
        );
        assert_eq!(
            "Left".parse(),
            Ok(SnakeEvent::Steer {
                direction: Direction::Left
            })
        );
        assert_eq!(" ".parse(), Ok(SnakeEvent::TogglePause));
        assert_eq!("p".parse(), Ok(SnakeEvent::TogglePause));
        assert_eq!("r".parse(), Ok(SnakeEvent::Restart));
        assert!("jump".parse::<SnakeEvent>().is_err());
    }

    #[test]
    fn wordle_line_types_and_submits() {
        let events = WordleEvent::parse_line("crane").unwrap();

        assert_eq!(events.len(), 6);
        assert_eq!(events[0], WordleEvent::Letter { letter: 'c' });
        assert_eq!(events[5], WordleEvent::Enter);
        assert_eq!(WordleEvent::parse_line("-"), Ok(vec![WordleEvent::Backspace]));
        assert_eq!(WordleEvent::parse_line("x"), Ok(vec![WordleEvent::Letter { letter: 'x' }]));
        assert_eq!(WordleEvent::parse_line("enter"), Ok(vec![WordleEvent::Enter]));
        assert!(WordleEvent::parse_line("cr4ne").is_err());
    }

    #[test]
    fn events_use_tagged_json() {
        let json = serde_json::to_string(&ConnectFourEvent::Drop { column: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"drop","column":2}"#);

        let event: SnakeEvent =
            serde_json::from_str(r#"{"type":"steer","direction":"Down"}"#).unwrap();
        assert_eq!(
            event,
            SnakeEvent::Steer {
                direction: Direction::Down
            }
        );

        let event: WordleEvent = serde_json::from_str(r#"{"type":"backspace"}"#).unwrap();
        assert_eq!(event, WordleEvent::Backspace);
    }
}
