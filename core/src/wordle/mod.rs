//! Wordle: six tries to find a five-letter word chosen from the calendar date.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::*;
pub use evaluate::*;
pub use stats::*;
pub use words::*;

mod evaluate;
mod stats;
mod words;

pub const WORD_LENGTH: usize = 5;
pub const MAX_ATTEMPTS: usize = 6;

/// Toast shown on a win, indexed by the number of guesses used.
pub const WIN_MESSAGES: [&str; MAX_ATTEMPTS] = [
    "Genius!",
    "Magnificent!",
    "Impressive!",
    "Splendid!",
    "Great!",
    "Phew!",
];

pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "BACKSPACE"],
];

/// Win message for a game solved in `guesses` tries, clamped to the last message.
pub fn win_message(guesses: usize) -> &'static str {
    WIN_MESSAGES[guesses.saturating_sub(1).min(WIN_MESSAGES.len() - 1)]
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordleStatus {
    Playing,
    Won,
    Lost,
}

impl WordleStatus {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for WordleStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of typing or deleting a letter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    NoChange,
    Changed,
}

impl EditOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Outcome of an accepted guess
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Continue(Evaluation),
    Won {
        evaluation: Evaluation,
        message: &'static str,
    },
    Lost {
        evaluation: Evaluation,
        answer: String,
    },
}

impl GuessOutcome {
    pub fn evaluation(&self) -> &Evaluation {
        match self {
            Self::Continue(evaluation) => evaluation,
            Self::Won { evaluation, .. } => evaluation,
            Self::Lost { evaluation, .. } => evaluation,
        }
    }

    pub const fn is_final(&self) -> bool {
        !matches!(self, Self::Continue(_))
    }
}

/// One board row as shown to the player.
pub type TileRow = [(Option<char>, TileState); WORD_LENGTH];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wordle {
    target: String,
    date: NaiveDate,
    guesses: Vec<String>,
    current_guess: String,
    evaluations: Vec<Evaluation>,
    status: WordleStatus,
    current_row: usize,
    keyboard: Keyboard,
}

impl Wordle {
    /// Game for the answer of `date`.
    pub fn daily(words: &WordList, date: NaiveDate) -> Self {
        Self::new_unchecked(words.daily_word(date).into(), date)
    }

    /// Game with an explicit answer, which must be five ASCII letters.
    pub fn with_target(target: &str, date: NaiveDate) -> Result<Self> {
        Ok(Self::new_unchecked(normalize_word(target)?, date))
    }

    fn new_unchecked(target: String, date: NaiveDate) -> Self {
        Self {
            target,
            date,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            current_guess: String::with_capacity(WORD_LENGTH),
            evaluations: Vec::with_capacity(MAX_ATTEMPTS),
            status: Default::default(),
            current_row: 0,
            keyboard: Keyboard::new(),
        }
    }

    /// The answer, meant to be revealed only once the game is lost.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Calendar day this game belongs to.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn status(&self) -> WordleStatus {
        self.status
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn add_letter(&mut self, letter: char) -> Result<EditOutcome> {
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        if self.status.is_final() || self.current_guess.len() >= WORD_LENGTH {
            return Ok(EditOutcome::NoChange);
        }
        self.current_guess.push(letter.to_ascii_uppercase());
        Ok(EditOutcome::Changed)
    }

    pub fn delete_letter(&mut self) -> EditOutcome {
        if self.status.is_final() || self.current_guess.pop().is_none() {
            return EditOutcome::NoChange;
        }
        EditOutcome::Changed
    }

    /// Scores the current guess.
    ///
    /// Short guesses and words outside `words` are rejected without touching the state.
    pub fn submit_guess(&mut self, words: &WordList) -> Result<GuessOutcome> {
        if self.status.is_final() {
            return Err(GameError::AlreadyEnded);
        }
        if self.current_guess.len() != WORD_LENGTH {
            return Err(GameError::NotEnoughLetters);
        }
        if !words.is_valid(&self.current_guess) {
            return Err(GameError::NotInWordList);
        }

        let guess = core::mem::take(&mut self.current_guess);
        let evaluation = evaluate(&guess, &self.target);
        self.keyboard.record(&guess, &evaluation);
        log::debug!("Guess {} scored {:?}", guess, evaluation);
        self.guesses.push(guess);
        self.evaluations.push(evaluation);
        self.current_row += 1;

        Ok(if is_solved(&evaluation) {
            self.status = WordleStatus::Won;
            GuessOutcome::Won {
                evaluation,
                message: win_message(self.guesses.len()),
            }
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.status = WordleStatus::Lost;
            GuessOutcome::Lost {
                evaluation,
                answer: self.target.clone(),
            }
        } else {
            GuessOutcome::Continue(evaluation)
        })
    }

    /// Clears every guess, keeping the answer and date.
    pub fn restart(&mut self) {
        let target = core::mem::take(&mut self.target);
        *self = Self::new_unchecked(target, self.date);
    }

    /// All six board rows: submitted guesses, then the row being typed, then empty rows.
    pub fn rows(&self) -> Vec<TileRow> {
        let mut rows = Vec::with_capacity(MAX_ATTEMPTS);
        for (guess, evaluation) in self.guesses.iter().zip(&self.evaluations) {
            let mut row = [(None, TileState::Empty); WORD_LENGTH];
            for (tile, (letter, &state)) in row.iter_mut().zip(guess.chars().zip(evaluation)) {
                *tile = (Some(letter), state);
            }
            rows.push(row);
        }
        if !self.status.is_final() {
            let mut row = [(None, TileState::Empty); WORD_LENGTH];
            for (tile, letter) in row.iter_mut().zip(self.current_guess.chars()) {
                *tile = (Some(letter), TileState::Tbd);
            }
            rows.push(row);
        }
        rows.resize(MAX_ATTEMPTS, [(None, TileState::Empty); WORD_LENGTH]);
        rows
    }

    /// Whether the state could have been reached by playing, as checked on saved games.
    ///
    /// The history must replay exactly: every guess a normalized word, every evaluation
    /// and the keyboard recomputed from the answer, and the status following from them.
    pub fn is_consistent(&self) -> bool {
        let is_word = |word: &str| normalize_word(word).is_ok_and(|normal| normal == word);
        if !is_word(&self.target)
            || self.guesses.len() > MAX_ATTEMPTS
            || self.evaluations.len() != self.guesses.len()
            || self.current_row != self.guesses.len()
            || self.current_guess.len() > WORD_LENGTH
            || !self.current_guess.bytes().all(|b| b.is_ascii_uppercase())
        {
            return false;
        }

        let mut keyboard = Keyboard::new();
        let mut status = WordleStatus::Playing;
        for (i, (guess, evaluation)) in self.guesses.iter().zip(&self.evaluations).enumerate() {
            if status.is_final()
                || !is_word(guess.as_str())
                || evaluate(guess, &self.target) != *evaluation
            {
                return false;
            }
            keyboard.record(guess, evaluation);
            if is_solved(evaluation) {
                status = WordleStatus::Won;
            } else if i + 1 == MAX_ATTEMPTS {
                status = WordleStatus::Lost;
            }
        }

        status == self.status
            && keyboard == self.keyboard
            && (!status.is_final() || self.current_guess.is_empty())
    }

    /// Spoiler-free emoji grid of the evaluations so far.
    pub fn share_text(&self) -> String {
        let attempts = if self.status == WordleStatus::Won {
            format!("{}", self.guesses.len())
        } else {
            String::from("X")
        };

        let mut text = format!("Wordle {}/{}\n\n", attempts, MAX_ATTEMPTS);
        for (i, evaluation) in self.evaluations.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.extend(evaluation.iter().map(|&state| tile_emoji(state)));
        }
        text
    }

    pub fn snapshot(&self) -> WordleSnapshot {
        WordleSnapshot {
            date: self.date,
            guesses: self.guesses.clone(),
            current_guess: self.current_guess.clone(),
            evaluations: self.evaluations.clone(),
            status: self.status,
            current_row: self.current_row,
            rows: self.rows(),
            keyboard: self.keyboard.iter().collect(),
            answer: (self.status == WordleStatus::Lost).then(|| self.target.clone()),
        }
    }
}

fn tile_emoji(state: TileState) -> char {
    match state {
        TileState::Correct => '🟩',
        TileState::Present => '🟨',
        TileState::Absent => '⬛',
        TileState::Empty | TileState::Tbd => '⬜',
    }
}

/// Plain view of a [`Wordle`] game for presenters, the answer only appears once lost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordleSnapshot {
    pub date: NaiveDate,
    pub guesses: Vec<String>,
    pub current_guess: String,
    pub evaluations: Vec<Evaluation>,
    pub status: WordleStatus,
    pub current_row: usize,
    pub rows: Vec<TileRow>,
    pub keyboard: Vec<(char, KeyState)>,
    pub answer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn words() -> WordList {
        WordList::new(["ERASE", "CRANE"], ["SPEED", "TRACE", "SLATE", "ALONE", "CRATE"]).unwrap()
    }

    fn type_word(game: &mut Wordle, word: &str) {
        for letter in word.chars() {
            game.add_letter(letter).unwrap();
        }
    }

    fn guess(game: &mut Wordle, words: &WordList, word: &str) -> Result<GuessOutcome> {
        type_word(game, word);
        game.submit_guess(words)
    }

    #[test]
    fn typing_is_capped_at_five_letters() {
        let mut game = Wordle::with_target("crane", today()).unwrap();

        type_word(&mut game, "slates");

        assert_eq!(game.current_guess(), "SLATE");
        assert_eq!(game.add_letter('x'), Ok(EditOutcome::NoChange));
        assert_eq!(game.add_letter('1'), Err(GameError::InvalidLetter('1')));
        assert_eq!(game.delete_letter(), EditOutcome::Changed);
        assert_eq!(game.current_guess(), "SLAT");
    }

    #[test]
    fn deleting_from_empty_guess_changes_nothing() {
        let mut game = Wordle::with_target("CRANE", today()).unwrap();

        assert_eq!(game.delete_letter(), EditOutcome::NoChange);
    }

    #[test]
    fn short_guess_is_rejected_without_change() {
        let words = words();
        let mut game = Wordle::with_target("CRANE", today()).unwrap();
        type_word(&mut game, "CRA");
        let before = game.clone();

        let err = game.submit_guess(&words).unwrap_err();

        assert_eq!(err, GameError::NotEnoughLetters);
        assert!(err.is_input_rejection());
        assert_eq!(game, before);
    }

    #[test]
    fn unknown_word_is_rejected_without_change() {
        let words = words();
        let mut game = Wordle::with_target("CRANE", today()).unwrap();

        let err = guess(&mut game, &words, "ZZZZZ").unwrap_err();

        assert_eq!(err, GameError::NotInWordList);
        assert!(game.guesses().is_empty());
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_guess(), "ZZZZZ");
    }

    #[test]
    fn first_guess_win_says_genius() {
        let words = words();
        let mut game = Wordle::with_target("CRANE", today()).unwrap();

        let outcome = guess(&mut game, &words, "crane").unwrap();

        assert_eq!(
            outcome,
            GuessOutcome::Won {
                evaluation: [TileState::Correct; WORD_LENGTH],
                message: "Genius!",
            }
        );
        assert_eq!(game.status(), WordleStatus::Won);
        assert_eq!(game.add_letter('A'), Ok(EditOutcome::NoChange));
        assert_eq!(game.submit_guess(&words), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn win_messages_are_clamped() {
        assert_eq!(win_message(1), "Genius!");
        assert_eq!(win_message(6), "Phew!");
        assert_eq!(win_message(9), "Phew!");
    }

    #[test]
    fn six_misses_lose_and_reveal_the_answer() {
        let words = words();
        let mut game = Wordle::with_target("CRANE", today()).unwrap();

        for word in ["SLATE", "TRACE", "ALONE", "CRATE", "SPEED"] {
            assert!(matches!(guess(&mut game, &words, word), Ok(GuessOutcome::Continue(_))));
        }
        let outcome = guess(&mut game, &words, "ERASE").unwrap();

        assert!(matches!(outcome, GuessOutcome::Lost { ref answer, .. } if answer == "CRANE"));
        assert_eq!(game.status(), WordleStatus::Lost);
        assert_eq!(game.guesses().len(), game.evaluations().len());
        assert_eq!(game.snapshot().answer.as_deref(), Some("CRANE"));
    }

    #[test]
    fn answer_stays_hidden_while_playing() {
        let game = Wordle::with_target("CRANE", today()).unwrap();

        assert_eq!(game.snapshot().answer, None);
    }

    #[test]
    fn keyboard_follows_submitted_guesses() {
        let words = words();
        let mut game = Wordle::with_target("ERASE", today()).unwrap();

        guess(&mut game, &words, "SPEED").unwrap();

        assert_eq!(game.keyboard().state_of('E'), KeyState::Present);
        assert_eq!(game.keyboard().state_of('P'), KeyState::Absent);
        assert_eq!(game.keyboard().state_of('Q'), KeyState::Unused);
    }

    #[test]
    fn rows_show_submitted_current_and_empty() {
        let words = words();
        let mut game = Wordle::with_target("CRANE", today()).unwrap();
        guess(&mut game, &words, "TRACE").unwrap();
        type_word(&mut game, "SL");

        let rows = game.rows();

        assert_eq!(rows.len(), MAX_ATTEMPTS);
        assert_eq!(rows[0][0], (Some('T'), TileState::Absent));
        assert_eq!(rows[1][1], (Some('L'), TileState::Tbd));
        assert_eq!(rows[1][2], (None, TileState::Empty));
        assert_eq!(rows[5][4], (None, TileState::Empty));
    }

    #[test]
    fn share_text_lists_every_row() {
        let words = words();
        let mut game = Wordle::with_target("CRANE", today()).unwrap();
        guess(&mut game, &words, "TRACE").unwrap();
        guess(&mut game, &words, "CRANE").unwrap();

        assert_eq!(game.share_text(), "Wordle 2/6\n\n⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn restart_keeps_the_answer_and_clears_progress() {
        let words = words();
        let mut game = Wordle::with_target("CRANE", today()).unwrap();
        guess(&mut game, &words, "CRANE").unwrap();

        game.restart();

        assert_eq!(game, Wordle::with_target("CRANE", today()).unwrap());
    }

    #[test]
    fn played_games_are_consistent() {
        let words = words();
        let mut game = Wordle::with_target("CRANE", today()).unwrap();
        assert!(game.is_consistent());

        guess(&mut game, &words, "TRACE").unwrap();
        type_word(&mut game, "SL");
        assert!(game.is_consistent());

        game.delete_letter();
        game.delete_letter();
        guess(&mut game, &words, "CRANE").unwrap();
        assert!(game.is_consistent());
    }

    #[test]
    fn tampered_games_are_inconsistent() {
        let words = words();
        let mut played = Wordle::with_target("CRANE", today()).unwrap();
        guess(&mut played, &words, "SLATE").unwrap();

        let mut short_target = played.clone();
        short_target.target = "AB".into();
        assert!(!short_target.is_consistent());

        let mut long_guess = played.clone();
        long_guess.current_guess = "SLATES".into();
        assert!(!long_guess.is_consistent());

        let mut too_many = played.clone();
        too_many.guesses = alloc::vec!["SLATE".into(); MAX_ATTEMPTS + 1];
        too_many.evaluations.clear();
        assert!(!too_many.is_consistent());

        let mut wrong_row = played.clone();
        wrong_row.current_row = 3;
        assert!(!wrong_row.is_consistent());

        let mut wrong_status = played.clone();
        wrong_status.status = WordleStatus::Won;
        assert!(!wrong_status.is_consistent());

        let mut wrong_tiles = played;
        wrong_tiles.evaluations[0] = [TileState::Correct; WORD_LENGTH];
        assert!(!wrong_tiles.is_consistent());
    }

    #[test]
    fn daily_game_uses_the_rotation() {
        let words = words();

        let game = Wordle::daily(&words, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        assert_eq!(game.target(), "CRANE");
    }
}
