use serde::{Deserialize, Serialize};

use super::WORD_LENGTH;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Nothing typed yet.
    Empty,
    /// Typed but not submitted.
    Tbd,
    Absent,
    Present,
    Correct,
}

impl Default for TileState {
    fn default() -> Self {
        Self::Empty
    }
}

/// Per-letter verdict of one submitted guess.
pub type Evaluation = [TileState; WORD_LENGTH];

/// Variant order is display priority, a key only ever moves up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyState {
    Unused,
    Absent,
    Present,
    Correct,
}

impl Default for KeyState {
    fn default() -> Self {
        Self::Unused
    }
}

impl From<TileState> for KeyState {
    fn from(tile: TileState) -> Self {
        match tile {
            TileState::Correct => KeyState::Correct,
            TileState::Present => KeyState::Present,
            _ => KeyState::Absent,
        }
    }
}

/// Scores `guess` against `target`, both five upper-case ASCII letters.
///
/// Exact matches are marked first and consume their letter; the remaining positions then
/// take `Present` only while unmatched copies of the letter are left in the target.
pub fn evaluate(guess: &str, target: &str) -> Evaluation {
    let guess = guess.as_bytes();
    let target = target.as_bytes();
    debug_assert_eq!(guess.len(), WORD_LENGTH);
    debug_assert_eq!(target.len(), WORD_LENGTH);

    let mut result = [TileState::Absent; WORD_LENGTH];
    let mut remaining = [0u8; 26];
    for &letter in target {
        remaining[letter_index(letter)] += 1;
    }

    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            result[i] = TileState::Correct;
            remaining[letter_index(guess[i])] -= 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if result[i] == TileState::Correct {
            continue;
        }
        let count = &mut remaining[letter_index(guess[i])];
        if *count > 0 {
            result[i] = TileState::Present;
            *count -= 1;
        }
    }

    result
}

pub fn is_solved(evaluation: &Evaluation) -> bool {
    evaluation.iter().all(|&tile| tile == TileState::Correct)
}

fn letter_index(letter: u8) -> usize {
    usize::from(letter.to_ascii_uppercase().wrapping_sub(b'A')) % 26
}

/// Best state each letter has earned across all guesses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    keys: [KeyState; 26],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of `letter`, [`KeyState::Unused`] for anything outside A to Z.
    pub fn state_of(&self, letter: char) -> KeyState {
        if letter.is_ascii_alphabetic() {
            self.keys[letter_index(letter as u8)]
        } else {
            KeyState::Unused
        }
    }

    pub fn record(&mut self, guess: &str, evaluation: &Evaluation) {
        for (letter, &tile) in guess.bytes().zip(evaluation) {
            let key = &mut self.keys[letter_index(letter)];
            *key = (*key).max(tile.into());
        }
    }

    /// Letters that have been used, with their state, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyState)> + '_ {
        (b'A'..=b'Z')
            .zip(self.keys.iter().copied())
            .filter(|&(_, state)| state != KeyState::Unused)
            .map(|(letter, state)| (letter as char, state))
    }
}
