//! Engines paired with a [`Storage`], the only place where game state is persisted.

use chrono::NaiveDate;

use crate::snake::*;
use crate::wordle::*;
use crate::*;

/// A [`Snake`] game whose high score survives across runs.
pub struct SnakeSession<S: Storage> {
    game: Snake,
    storage: S,
}

impl<S: Storage> SnakeSession<S> {
    pub fn new(config: SnakeConfig, storage: S, seed: u64) -> Self {
        let high_score = load(&storage, HIGH_SCORE_KEY).unwrap_or(0);
        log::debug!("Loaded snake high score {}", high_score);
        Self {
            game: Snake::new(config, high_score, seed),
            storage,
        }
    }

    pub fn game(&self) -> &Snake {
        &self.game
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn set_direction(&mut self, direction: Direction) -> SteerOutcome {
        self.game.set_direction(direction)
    }

    pub fn start(&mut self) -> Result<()> {
        self.game.start()
    }

    pub fn pause(&mut self) -> Result<()> {
        self.game.pause()
    }

    pub fn resume(&mut self) -> Result<()> {
        self.game.resume()
    }

    pub fn toggle_pause(&mut self) -> Result<()> {
        self.game.toggle_pause()
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.game.tick();
        if let TickOutcome::GameOver {
            new_high_score: true,
        } = outcome
        {
            save(&mut self.storage, HIGH_SCORE_KEY, &self.game.high_score());
        }
        outcome
    }

    /// Starts over with the stored high score, which another session may have raised.
    pub fn restart(&mut self) {
        let stored: u32 = load(&self.storage, HIGH_SCORE_KEY).unwrap_or(0);
        self.game
            .restart_with_high_score(stored.max(self.game.high_score()));
    }
}

/// Today's [`Wordle`] game with saved progress and lifetime statistics.
pub struct WordleSession<S: Storage> {
    game: Wordle,
    words: WordList,
    statistics: Statistics,
    storage: S,
}

impl<S: Storage> WordleSession<S> {
    /// Resumes the game saved earlier on `today`, or starts today's puzzle.
    pub fn new(words: WordList, storage: S, today: NaiveDate) -> Self {
        let statistics = load(&storage, WORDLE_STATS_KEY).unwrap_or_default();
        let saved = load::<Wordle>(&storage, WORDLE_STATE_KEY)
            .filter(|game| game.date() == today)
            .filter(|game| {
                let consistent = game.is_consistent();
                if !consistent {
                    log::warn!("Discarding corrupted saved game of {}", today);
                }
                consistent
            });
        let game = match saved {
            Some(game) => {
                log::debug!("Resuming game of {} at row {}", today, game.current_row());
                game
            }
            None => Wordle::daily(&words, today),
        };
        Self {
            game,
            words,
            statistics,
            storage,
        }
    }

    pub fn game(&self) -> &Wordle {
        &self.game
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add_letter(&mut self, letter: char) -> Result<EditOutcome> {
        let outcome = self.game.add_letter(letter)?;
        if outcome.has_update() {
            self.save_game();
        }
        Ok(outcome)
    }

    pub fn delete_letter(&mut self) -> EditOutcome {
        let outcome = self.game.delete_letter();
        if outcome.has_update() {
            self.save_game();
        }
        outcome
    }

    /// Submits the current guess, statistics are updated once the game is decided.
    pub fn submit_guess(&mut self) -> Result<GuessOutcome> {
        let outcome = self.game.submit_guess(&self.words)?;
        match &outcome {
            GuessOutcome::Continue(_) => {}
            GuessOutcome::Won { .. } => {
                self.statistics
                    .record_win(self.game.guesses().len(), self.game.date());
                save(&mut self.storage, WORDLE_STATS_KEY, &self.statistics);
            }
            GuessOutcome::Lost { .. } => {
                self.statistics.record_loss(self.game.date());
                save(&mut self.storage, WORDLE_STATS_KEY, &self.statistics);
            }
        }
        self.save_game();
        Ok(outcome)
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.save_game();
    }

    fn save_game(&mut self) {
        save(&mut self.storage, WORDLE_STATE_KEY, &self.game);
    }
}
