use std::fmt::Write as _;
use std::io::Write;

use minigames_core::connect_four::{COLS, Cell, ConnectFourSnapshot, Player, Status};
use minigames_core::snake::{SnakeSnapshot, SnakeStatus};
use minigames_core::wordle::{KEYBOARD_ROWS, KeyState, Statistics, TileState, WordleSnapshot};
use minigames_core::Position;
use minigames_protocol::{Feedback, Frame, GameKind};
use serde::Serialize;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Plain-text drawing of a snapshot.
pub trait Render {
    fn render(&self) -> String;
}

/// Writes one update per accepted operation, as text or as JSON lines.
pub struct Presenter<W: Write> {
    out: W,
    json: bool,
    clear_screen: bool,
    seq: u64,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            clear_screen: false,
            seq: 0,
        }
    }

    /// Redraw in place instead of scrolling, text mode only.
    pub fn set_clear_screen(&mut self, clear_screen: bool) {
        self.clear_screen = clear_screen && !self.json;
    }

    pub fn show<T: Render + Serialize>(
        &mut self,
        game: GameKind,
        state: &T,
        feedback: Feedback,
    ) -> anyhow::Result<()> {
        self.seq += 1;
        if self.json {
            let frame = Frame::new(game, self.seq, state).with_feedback(feedback);
            writeln!(self.out, "{}", frame.to_json_line()?)?;
        } else {
            if self.clear_screen {
                write!(self.out, "{CLEAR_SCREEN}")?;
            }
            write!(self.out, "{}", state.render())?;
            if let Some(toast) = &feedback.toast {
                let decoration = if feedback.shake { "~" } else { "*" };
                writeln!(self.out, "{decoration} {toast} {decoration}")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// A standalone report outside any game, plain JSON instead of a frame.
    pub fn summary<T: Render + Serialize>(&mut self, report: &T) -> anyhow::Result<()> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(report)?)?;
        } else {
            write!(self.out, "{}", report.render())?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Free text for humans, dropped in JSON mode.
    pub fn note(&mut self, text: &str) -> anyhow::Result<()> {
        if !self.json {
            writeln!(self.out, "{text}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn player_name(player: Player) -> &'static str {
    match player {
        Player::Red => "Red",
        Player::Yellow => "Yellow",
    }
}

impl Render for ConnectFourSnapshot {
    fn render(&self) -> String {
        let mut text = String::new();
        for col in 1..=COLS {
            let _ = write!(text, " {col}");
        }
        text.push('\n');

        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let winning = self
                    .winning_cells
                    .iter()
                    .any(|slot| usize::from(slot.row) == row && usize::from(slot.col) == col);
                let symbol = match (cell, winning) {
                    (Cell::Empty, _) => '.',
                    (Cell::Red, false) => 'R',
                    (Cell::Yellow, false) => 'Y',
                    (_, true) => '#',
                };
                text.push(' ');
                text.push(symbol);
            }
            text.push('\n');
        }

        let _ = match (self.status, self.winner) {
            (Status::Won, Some(winner)) => writeln!(text, "{} wins!", player_name(winner)),
            (Status::Draw, _) => writeln!(text, "It's a draw!"),
            _ => writeln!(text, "{} to move", player_name(self.current_player)),
        };
        text
    }
}

impl Render for SnakeSnapshot {
    fn render(&self) -> String {
        let border = "#".repeat(usize::from(self.width) + 2);
        let mut text = format!("{border}\n");
        for y in 0..self.height {
            text.push('#');
            for x in 0..self.width {
                text.push(snake_symbol(self, Position { x, y }));
            }
            text.push_str("#\n");
        }
        text.push_str(&border);
        text.push('\n');

        let status = match self.status {
            SnakeStatus::Idle => "press a direction to start",
            SnakeStatus::Playing => "playing",
            SnakeStatus::Paused => "paused",
            SnakeStatus::GameOver => "game over, r to restart",
        };
        let _ = writeln!(
            text,
            "Score {}  High {}  {}ms  ({})",
            self.score, self.high_score, self.speed_ms, status
        );
        text
    }
}

fn snake_symbol(snake: &SnakeSnapshot, position: Position) -> char {
    match snake.body.iter().position(|&segment| segment == position) {
        Some(0) => '@',
        Some(_) => 'o',
        None if snake.food == Some(position) => '*',
        None => ' ',
    }
}

fn tile_text(letter: Option<char>, state: TileState) -> String {
    let letter = letter.unwrap_or('_');
    match state {
        TileState::Correct => format!("[{letter}]"),
        TileState::Present => format!("({letter})"),
        TileState::Absent => format!(" {} ", letter.to_ascii_lowercase()),
        TileState::Empty | TileState::Tbd => format!(" {letter} "),
    }
}

fn key_text(key: &str, state: KeyState) -> String {
    match state {
        KeyState::Correct => format!("[{key}]"),
        KeyState::Present => format!("({key})"),
        KeyState::Absent => " · ".into(),
        KeyState::Unused => format!(" {key} "),
    }
}

impl Render for WordleSnapshot {
    fn render(&self) -> String {
        let mut text = String::new();
        for row in &self.rows {
            for &(letter, state) in row {
                text.push_str(&tile_text(letter, state));
            }
            text.push('\n');
        }
        text.push('\n');

        for keys in KEYBOARD_ROWS {
            for key in keys {
                let state = match key.chars().next() {
                    Some(letter) if key.len() == 1 => self
                        .keyboard
                        .iter()
                        .find(|&&(used, _)| used == letter)
                        .map_or(KeyState::Unused, |&(_, state)| state),
                    _ => KeyState::Unused,
                };
                let label = match *key {
                    "BACKSPACE" => "⌫",
                    other => other,
                };
                text.push_str(&key_text(label, state));
            }
            text.push('\n');
        }
        text
    }
}

impl Render for Statistics {
    fn render(&self) -> String {
        let mut text = format!(
            "Played {}  Win % {}  Current streak {}  Max streak {}\n",
            self.games_played,
            self.win_percentage(),
            self.current_streak,
            self.max_streak
        );
        let most = self.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
        for (guesses, &wins) in self.guess_distribution.iter().enumerate() {
            let bar = "█".repeat((wins * 20 / most) as usize);
            let _ = writeln!(text, "{} {} {}", guesses + 1, bar, wins);
        }
        text
    }
}

/// Everything the `stats` command reports.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Records {
    pub snake_high_score: u32,
    pub wordle: Statistics,
}

impl Render for Records {
    fn render(&self) -> String {
        format!(
            "Snake high score {}\n\nWordle\n{}",
            self.snake_high_score,
            self.wordle.render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use minigames_core::connect_four::ConnectFour;
    use minigames_core::snake::{Snake, SnakeConfig};
    use minigames_core::wordle::{WordList, Wordle};

    #[test]
    fn connect_four_marks_the_winning_line() {
        let game = ConnectFour::replay(&[0, 6, 1, 6, 2, 6, 3]).unwrap();

        let text = game.snapshot().render();

        assert!(text.starts_with(" 1 2 3 4 5 6 7\n"));
        assert!(text.contains(" # # # # . . Y\n"));
        assert!(text.ends_with("Red wins!\n"));
    }

    #[test]
    fn snake_grid_shows_head_body_and_border() {
        let snake = Snake::new(SnakeConfig::new((4, 4), 150, 5, 50), 0, 1);

        let text = snake.snapshot().render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "######");
        assert!(lines[3].starts_with("#oo@"));
        assert!(lines[6].starts_with("Score 0  High 0  150ms"));
    }

    #[test]
    fn wordle_tiles_and_keys_follow_states() {
        let words = WordList::new(["CRANE"], ["TRACE"]).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut game = Wordle::daily(&words, date);
        for letter in "TRACE".chars() {
            game.add_letter(letter).unwrap();
        }
        game.submit_guess(&words).unwrap();

        let text = game.snapshot().render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], " t [R][A](C)[E]");
        assert_eq!(lines[1], " _  _  _  _  _ ");
        assert_eq!(lines[7], " Q  W [E][R] ·  Y  U  I  O  P ");
    }

    #[test]
    fn json_mode_writes_numbered_frames() {
        let mut presenter = Presenter::new(Vec::new(), true);
        let stats = Statistics::default();

        presenter.show(GameKind::Wordle, &stats, Feedback::default()).unwrap();
        presenter.note("ignored in json").unwrap();
        presenter
            .show(GameKind::Wordle, &stats, Feedback::toast("hi"))
            .unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(r#"{"game":"wordle","seq":1,"state":{"games_played":0"#));
        assert!(lines[1].contains(r#""seq":2"#));
        assert!(lines[1].ends_with(r#""feedback":{"toast":"hi"}}"#));
    }

    #[test]
    fn text_mode_prints_toasts() {
        let mut presenter = Presenter::new(Vec::new(), false);

        presenter
            .show(
                GameKind::Wordle,
                &Statistics::default(),
                Feedback::from_error(minigames_core::GameError::NotInWordList),
            )
            .unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.ends_with("~ Not in word list ~\n"));
    }
}
