use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Column {0} does not exist")]
    InvalidColumn(u8),
    #[error("Column {0} is full")]
    ColumnFull(u8),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Another move is still in flight")]
    MoveInFlight,
    #[error("There is no move to undo")]
    NothingToUndo,
    #[error("No drop is waiting to be committed")]
    NoPendingDrop,
    #[error("Cannot {0} from the current state")]
    InvalidTransition(&'static str),
    #[error("Only the letters A to Z can be typed, got {0:?}")]
    InvalidLetter(char),
    #[error("Not enough letters")]
    NotEnoughLetters,
    #[error("Not in word list")]
    NotInWordList,
    #[error("Answer list is empty")]
    EmptyWordList,
    #[error("Words must be exactly five letters from A to Z")]
    InvalidWord,
}

impl GameError {
    /// Rejections of player input that a presenter answers with a shake of the current row.
    pub const fn is_input_rejection(self) -> bool {
        matches!(self, Self::NotEnoughLetters | Self::NotInWordList)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
