use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MAX_ATTEMPTS;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of guesses used, index 0 is a first-guess win.
    pub guess_distribution: [u32; MAX_ATTEMPTS],
    pub last_played: Option<NaiveDate>,
}

impl Statistics {
    pub fn record_win(&mut self, guesses: usize, date: NaiveDate) {
        self.games_played += 1;
        self.games_won += 1;
        let slot = guesses.clamp(1, MAX_ATTEMPTS) - 1;
        self.guess_distribution[slot] += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        self.last_played = Some(date);
    }

    pub fn record_loss(&mut self, date: NaiveDate) {
        self.games_played += 1;
        self.current_streak = 0;
        self.last_played = Some(date);
    }

    /// Share of games won, rounded to a whole percent.
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (self.games_won * 100 + self.games_played / 2) / self.games_played
    }
}
