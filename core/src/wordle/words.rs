use alloc::string::String;
use alloc::vec::Vec;
use chrono::{Datelike, NaiveDate};
use hashbrown::HashSet;

use super::WORD_LENGTH;
use crate::*;

/// `NaiveDate::num_days_from_ce` of 2024-01-01, the day the answer rotation starts.
const EPOCH_DAYS_FROM_CE: i32 = 738_886;

const ANSWER_WORDS: &[&str] = &[
    "CRANE", "SLATE", "CRATE", "TRACE", "STARE", "AUDIO", "ADIEU", "RAISE", "ARISE", "IRATE",
    "LEARN", "RENAL", "ALONE", "ATONE", "OATER", "SALET", "RALES", "LASER", "EARLS", "ARLES",
    "TARES", "STALE", "STEAL", "TALES", "TEALS", "STORE", "ROTES", "TORES", "ROSET", "TORSE",
    "PAINT", "PIANO", "PATIO", "POINT", "JOINT", "ABOUT", "DOUBT", "SHOUT", "SCOUT", "STOUT",
    "WORLD", "WORDS", "WORKS", "WORMS", "WORRY", "HAPPY", "PARTY", "CANDY", "SANDY", "HANDY",
];

const EXTRA_VALID_WORDS: &[&str] = &[
    "ABBEY", "ABBOT", "ABIDE", "ABOUT", "ABOVE", "ABUSE", "ACTOR", "ACUTE", "ADMIT", "ADOPT",
    "ADULT", "AFTER", "AGAIN", "AGENT", "AGREE", "AHEAD", "ALARM", "ALBUM", "ALERT", "ALIEN",
    "ALIGN", "ALIKE", "ALIVE", "ALLEY", "ALLOW", "ALLOY", "ALONE", "ALONG", "ALPHA", "ALTER",
    "AMONG", "ANGEL", "ANGER", "ANGLE", "ANGRY", "ANNOY", "APART", "APPLE", "APPLY", "ARENA",
    "ARGUE", "ARISE", "ARMOR", "AROMA", "ARRAY", "ARROW", "ASSET", "AUDIO", "AUDIT", "AVOID",
    "AWARD", "AWARE", "AWFUL", "BACON", "BADGE", "BADLY", "BAKER", "BALLS", "BASIC", "BASIN",
    "BASIS", "BATCH", "BEACH", "BEARD", "BEAST", "BEGIN", "BEING", "BELLY", "BELOW", "BENCH",
    "BERRY", "BLACK", "BLADE", "BLAME", "BLANK", "BLAST", "BLEND", "BLESS", "BLIND", "BLOCK",
    "BLOOD", "BLOOM", "BLOWN", "BLUES", "BLUNT", "BOARD", "BOAST", "BONUS", "BOOTH", "BOUND",
    "BRAIN", "BRAND", "BRASS", "BRAVE", "BREAD", "BREAK", "BREED", "BRICK", "BRIDE", "BRIEF",
    "BRING", "BROAD", "BROKE", "BROWN", "BRUSH", "BUILD", "BUNCH", "BURST", "BUYER", "CABIN",
    "CABLE", "CAMEL", "CANDY", "CARGO", "CARRY", "CATCH", "CAUSE", "CHAIN", "CHAIR", "CHAOS",
    "CHARM", "CHART", "CHASE", "CHEAP", "CHECK", "CHEEK", "CHESS", "CHEST", "CHIEF", "CHILD",
    "CHINA", "CHORD", "CHOSE", "CLAIM", "CLASS", "CLEAN", "CLEAR", "CLERK", "CLICK", "CLIFF",
    "CLIMB", "CLOCK", "CLOSE", "CLOTH", "CLOUD", "COACH", "COAST", "COUCH", "COULD", "COUNT",
    "COURT", "COVER", "CRAFT", "CRASH", "CRAZY", "CREAM", "CRIME", "CRISP", "CROSS", "CROWD",
    "CROWN", "CRUDE", "CRUSH", "CURVE", "CYCLE", "DAILY", "DANCE", "DEALT", "DEATH", "DEBUT",
    "DECAY", "DELAY", "DELTA", "DEMON", "DEPTH", "DIRTY", "DISCO", "DOUBT", "DOUGH", "DOZEN",
    "DRAFT", "DRAIN", "DRAMA", "DRANK", "DRAWN", "DREAM", "DRESS", "DRIED", "DRIFT", "DRILL",
    "DRINK", "DRIVE", "DROWN", "DRUNK", "DYING",
];

/// Ordered answers rotated daily, plus the set of words accepted as guesses.
#[derive(Clone, Debug)]
pub struct WordList {
    answers: Vec<String>,
    valid: HashSet<String>,
}

impl WordList {
    /// Builds a list from arbitrary words, normalized to upper case.
    ///
    /// Answers are always accepted as guesses. Every word must be five ASCII letters.
    pub fn new<'a>(
        answers: impl IntoIterator<Item = &'a str>,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let answers: Vec<String> = answers
            .into_iter()
            .map(normalize_word)
            .collect::<Result<_>>()?;
        if answers.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        let mut valid: HashSet<String> = valid
            .into_iter()
            .map(normalize_word)
            .collect::<Result<_>>()?;
        valid.extend(answers.iter().cloned());

        Ok(Self { answers, valid })
    }

    /// The bundled answer and guess lists.
    pub fn builtin() -> Self {
        let answers: Vec<String> = ANSWER_WORDS.iter().map(|&word| word.into()).collect();
        let valid: HashSet<String> = ANSWER_WORDS
            .iter()
            .chain(EXTRA_VALID_WORDS)
            .map(|&word| word.into())
            .collect();
        Self { answers, valid }
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn is_valid(&self, word: &str) -> bool {
        self.valid.contains(word)
    }

    /// Answer for `date`, the same for every call on the same calendar day.
    pub fn daily_word(&self, date: NaiveDate) -> &str {
        let index = day_number(date).rem_euclid(self.answers.len() as i64);
        &self.answers[index as usize]
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whole days between the rotation epoch and `date`, negative before it.
pub fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
}

/// Upper-cases `word` and checks it is exactly five ASCII letters.
pub fn normalize_word(word: &str) -> Result<String> {
    let word = word.trim();
    if word.len() != WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(GameError::InvalidWord);
    }
    Ok(word.to_ascii_uppercase())
}
