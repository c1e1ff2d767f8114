//! Connect Four on a 6×7 board with gravity, win detection and replay-based undo.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use board::*;

mod board;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Draw
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Draw,
}

impl Status {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Draw)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of committing a drop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Placed(Slot),
    Won(Player),
    Draw,
}

impl DropOutcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectFour {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    winning_cells: WinningCells,
    status: Status,
    move_history: Vec<Coord>,
    /// Slot reserved by [`ConnectFour::begin_drop`] while the host animates it.
    dropping: Option<Slot>,
}

impl ConnectFour {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Red,
            winner: None,
            winning_cells: WinningCells::new(),
            status: Default::default(),
            move_history: Vec::new(),
            dropping: None,
        }
    }

    /// Builds the state reached by dropping into `columns` in order from a fresh board.
    pub fn replay(columns: &[Coord]) -> Result<Self> {
        let mut game = Self::new();
        for &col in columns {
            game.drop_piece(col)?;
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn winning_cells(&self) -> &[Slot] {
        &self.winning_cells
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn move_history(&self) -> &[Coord] {
        &self.move_history
    }

    pub fn dropping(&self) -> Option<Slot> {
        self.dropping
    }

    /// Row a piece dropped into `col` would land on, for hover previews.
    pub fn drop_row(&self, col: Coord) -> Option<Coord> {
        self.board.drop_row(col)
    }

    /// Validates and reserves a drop without committing it.
    ///
    /// The returned slot is where the piece lands. Until [`ConnectFour::finish_drop`] is
    /// called, further drops and undo are rejected with [`GameError::MoveInFlight`].
    pub fn begin_drop(&mut self, col: Coord) -> Result<Slot> {
        self.check_idle()?;
        self.check_playing()?;

        if col >= COLS {
            return Err(GameError::InvalidColumn(col));
        }
        let row = self.board.drop_row(col).ok_or(GameError::ColumnFull(col))?;

        let slot = Slot::new(row, col);
        self.dropping = Some(slot);
        Ok(slot)
    }

    /// Commits the drop reserved by [`ConnectFour::begin_drop`].
    pub fn finish_drop(&mut self) -> Result<DropOutcome> {
        let slot = self.dropping.take().ok_or(GameError::NoPendingDrop)?;
        Ok(self.commit(slot))
    }

    /// Drops a piece for the current player and evaluates the result immediately.
    pub fn drop_piece(&mut self, col: Coord) -> Result<DropOutcome> {
        self.begin_drop(col)?;
        self.finish_drop()
    }

    /// Takes back the last move by replaying the rest of the history on a fresh board.
    pub fn undo(&mut self) -> Result<()> {
        self.check_idle()?;

        let Some((last, kept)) = self.move_history.split_last() else {
            return Err(GameError::NothingToUndo);
        };
        log::debug!("Undoing drop in column {}", last);

        *self = Self::replay(kept)?;
        Ok(())
    }

    /// Resets to a fresh game, discarding any reserved drop.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> ConnectFourSnapshot {
        ConnectFourSnapshot {
            rows: self.board.rows(),
            current_player: self.current_player,
            winner: self.winner,
            winning_cells: self.winning_cells.to_vec(),
            status: self.status,
            move_history: self.move_history.clone(),
            dropping: self.dropping,
            drop_rows: (0..COLS).map(|col| self.board.drop_row(col)).collect(),
        }
    }

    fn commit(&mut self, slot: Slot) -> DropOutcome {
        let player = self.current_player;
        self.board.place(slot, player);
        self.move_history.push(slot.col);
        log::debug!("{:?} dropped into {:?}", player, slot);

        if let Some(cells) = self.board.winning_line(slot) {
            self.winner = Some(player);
            self.winning_cells = cells;
            self.status = Status::Won;
            log::debug!("{:?} won after {} moves", player, self.move_history.len());
            return DropOutcome::Won(player);
        }

        self.current_player = player.opponent();
        if self.board.is_full() {
            self.status = Status::Draw;
            log::debug!("Board full, game drawn");
            DropOutcome::Draw
        } else {
            DropOutcome::Placed(slot)
        }
    }

    fn check_idle(&self) -> Result<()> {
        if self.dropping.is_some() {
            Err(GameError::MoveInFlight)
        } else {
            Ok(())
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.status.is_final() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain view of a [`ConnectFour`] game for presenters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectFourSnapshot {
    pub rows: Vec<Vec<Cell>>,
    pub current_player: Player,
    pub winner: Option<Player>,
    pub winning_cells: Vec<Slot>,
    pub status: Status,
    pub move_history: Vec<Coord>,
    pub dropping: Option<Slot>,
    pub drop_rows: Vec<Option<Coord>>,
}
