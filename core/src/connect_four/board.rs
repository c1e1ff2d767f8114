use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

pub const ROWS: Coord = 6;
pub const COLS: Coord = 7;
pub const WIN_LENGTH: usize = 4;

/// Scan order for win detection: horizontal, vertical, down-right, down-left.
///
/// When one drop completes several lines, the first direction in this list is the one
/// reported.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }
}

/// Board slot, row 0 is the top of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: Coord,
    pub col: Coord,
}

impl Slot {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    fn offset(self, delta: (isize, isize)) -> Option<Self> {
        apply_delta((self.row, self.col), delta, (ROWS, COLS)).map(|(row, col)| Self { row, col })
    }
}

impl ToNdIndex for Slot {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        (self.row, self.col).to_nd_index()
    }
}

/// Exactly four slots, in scan order.
pub type WinningCells = SmallVec<[Slot; WIN_LENGTH]>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((ROWS, COLS).to_nd_index()),
        }
    }

    /// Lowest empty row of `col`, `None` when the column is full or does not exist.
    pub fn drop_row(&self, col: Coord) -> Option<Coord> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self[Slot::new(row, col)].is_empty())
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self[Slot::new(0, col)].is_empty())
    }

    pub(crate) fn place(&mut self, slot: Slot, player: Player) {
        debug_assert!(self[slot].is_empty(), "slot {:?} already taken", slot);
        self.cells[slot.to_nd_index()] = player.into();
    }

    /// Whether every piece rests on the bottom edge or on another piece.
    pub fn respects_gravity(&self) -> bool {
        (0..COLS).all(|col| {
            (0..ROWS - 1).all(|row| {
                self[Slot::new(row, col)].is_empty() || !self[Slot::new(row + 1, col)].is_empty()
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Board contents as plain rows, top row first.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Looks for a line of [`WIN_LENGTH`] pieces through `origin`.
    ///
    /// Each direction is walked from `-(WIN_LENGTH - 1)` to `+(WIN_LENGTH - 1)` steps around
    /// the origin, a run resets on any mismatch or when leaving the board, and the first
    /// run to reach the target length is returned.
    pub fn winning_line(&self, origin: Slot) -> Option<WinningCells> {
        let piece = self[origin];
        if piece.is_empty() {
            return None;
        }

        let reach = WIN_LENGTH as isize - 1;
        for (dr, dc) in DIRECTIONS {
            let mut run = WinningCells::new();
            for step in -reach..=reach {
                match origin.offset((dr * step, dc * step)) {
                    Some(slot) if self[slot] == piece => {
                        run.push(slot);
                        if run.len() == WIN_LENGTH {
                            log::trace!("Line found through {:?} along ({}, {})", origin, dr, dc);
                            return Some(run);
                        }
                    }
                    _ => run.clear(),
                }
            }
        }

        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Slot> for Board {
    type Output = Cell;

    fn index(&self, slot: Slot) -> &Self::Output {
        &self.cells[slot.to_nd_index()]
    }
}
