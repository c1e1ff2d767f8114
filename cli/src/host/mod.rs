//! Interactive loops that feed player input into the engines and show every update.

pub mod connect_four;
pub mod snake;
pub mod wordle;

/// `q`, `quit` or `exit` end every game.
pub fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}
