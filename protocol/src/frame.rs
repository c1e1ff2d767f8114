use minigames_core::GameError;
use minigames_core::wordle::GuessOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    ConnectFour,
    Snake,
    Wordle,
}

impl GameKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConnectFour => "Connect Four",
            Self::Snake => "Snake",
            Self::Wordle => "Wordle",
        }
    }
}

/// Transient cues shown alongside a frame, never part of the game state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toast: Option<String>,
    /// Shake the current row, the input was rejected.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub shake: bool,
    /// Bounce the winning row.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bounce: bool,
}

impl Feedback {
    pub fn toast(message: impl Into<String>) -> Self {
        Self {
            toast: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Rejected operations show their reason, rejected guesses also shake.
    pub fn from_error(err: GameError) -> Self {
        Self {
            toast: Some(err.to_string()),
            shake: err.is_input_rejection(),
            bounce: false,
        }
    }

    pub fn from_guess(outcome: &GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::Continue(_) => Self::default(),
            GuessOutcome::Won { message, .. } => Self {
                toast: Some((*message).into()),
                shake: false,
                bounce: true,
            },
            GuessOutcome::Lost { answer, .. } => Self::toast(answer.as_str()),
        }
    }
}

/// One rendering update: which game, in what order, the state and any cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame<T> {
    pub game: GameKind,
    pub seq: u64,
    pub state: T,
    #[serde(default, skip_serializing_if = "Feedback::is_empty")]
    pub feedback: Feedback,
}

impl<T: Serialize> Frame<T> {
    pub fn new(game: GameKind, seq: u64, state: T) -> Self {
        Self {
            game,
            seq,
            state,
            feedback: Feedback::default(),
        }
    }

    pub fn with_feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = feedback;
        self
    }

    /// Compact JSON without a trailing newline.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
