//! Ship classes and placed ships.

use crate::bitgrid::BitGrid;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;

type Mask = BitGrid<BOARD_SIZE>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board as a contiguous horizontal or vertical run,
/// with the hits it has taken tracked per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: Mask,
    hits: Mask,
}

impl Ship {
    /// Place a ship at (`row`, `col`) with `orientation`. The whole run must
    /// lie within the board.
    pub fn new(
        class: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let length = class.length();
        let fits = match orientation {
            Orientation::Horizontal => row < BOARD_SIZE && col + length <= BOARD_SIZE,
            Orientation::Vertical => col < BOARD_SIZE && row + length <= BOARD_SIZE,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = Mask::new();
        for i in 0..length {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            mask.set(r, c)?;
        }

        Ok(Ship {
            class,
            orientation,
            row,
            col,
            mask,
            hits: Mask::new(),
        })
    }

    /// Whether this ship covers (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Record a hit at (`row`, `col`). Returns `true` if the cell belongs to
    /// this ship.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.contains(row, col) {
            let _ = self.hits.set(row, col);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all cells hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.class.length()
    }

    /// Number of hits this ship has taken.
    pub fn hits_taken(&self) -> usize {
        self.hits.count_ones()
    }

    /// Covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.mask.iter_set()
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Anchor of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Mask {
        self.mask
    }
}
