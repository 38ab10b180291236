//! One side's board: ship placement, shot resolution and defeat detection.

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, Outcome, ShotState};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS, PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipClass};
use log::debug;
use rand::Rng;

type Mask = BitGrid<BOARD_SIZE>;

/// Summary of one fleet entry on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipStatus {
    pub class: ShipClass,
    pub hits: usize,
    pub sunk: bool,
}

/// A 10×10 board owned by one side. Ships are identified by their index in
/// the fleet catalog; hit and miss masks record shot history per cell. A
/// cell appears in the hit mask only if a ship covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: Mask,
    hits: Mask,
    misses: Mask,
}

impl Board {
    /// Create an empty board (no ships placed, no shots taken).
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: Mask::new(),
            hits: Mask::new(),
            misses: Mask::new(),
        }
    }

    /// Place the catalog ship `index` at (row, col) with `orientation`.
    /// Touching ships are legal; only overlap is rejected.
    pub fn place(
        &mut self,
        index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(FLEET[index], orientation, row, col)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[index] = Some(ship);
        Ok(())
    }

    /// Find a random non-overlapping (row, col, Orientation) for the catalog
    /// ship `index`. Sampling is bounded by [`PLACEMENT_ATTEMPTS`]; on
    /// exhaustion every position is scanned in order, so this fails only on
    /// a board with no room at all.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let class = FLEET[index];
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - class.length()),
                Orientation::Vertical => (BOARD_SIZE - class.length(), BOARD_SIZE - 1),
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            let ship = Ship::new(class, orientation, row, col)?;
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((row, col, orientation));
            }
        }
        self.scan_placement(class).ok_or(BoardError::PlacementFailed)
    }

    /// Deterministic fallback: first free position in scan order.
    fn scan_placement(&self, class: ShipClass) -> Option<(usize, usize, Orientation)> {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    if let Ok(ship) = Ship::new(class, orientation, row, col) {
                        if (self.ship_map & ship.mask()).is_empty() {
                            return Some((row, col, orientation));
                        }
                    }
                }
            }
        }
        None
    }

    /// Place the whole fleet at random, in catalog order.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for index in 0..NUM_SHIPS {
            let (row, col, orientation) = self.random_placement(rng, index)?;
            self.place(index, row, col, orientation)?;
            debug!(
                "placed {} at ({}, {}) {:?}",
                FLEET[index].name(),
                row,
                col,
                orientation
            );
        }
        Ok(())
    }

    /// Resolve a shot at (row, col). An already-tried cell yields
    /// `Rejected` and changes nothing; a coordinate off the board is an
    /// error.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<Outcome, BoardError> {
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Ok(Outcome::Rejected);
        }
        if self.ship_map.get(row, col)? {
            self.hits.set(row, col)?;
            for ship in self.ships.iter_mut().flatten() {
                if ship.register_hit(row, col) {
                    break;
                }
            }
            Ok(Outcome::Hit)
        } else {
            self.misses.set(row, col)?;
            Ok(Outcome::Miss)
        }
    }

    /// True once every ship cell has been hit. An empty board is never
    /// defeated.
    pub fn is_defeated(&self) -> bool {
        !self.ship_map.is_empty() && self.hits.covers(self.ship_map)
    }

    /// Shot history of the cell at (row, col).
    pub fn shot_state(&self, row: usize, col: usize) -> Result<ShotState, BoardError> {
        if self.hits.get(row, col)? {
            Ok(ShotState::Hit)
        } else if self.misses.get(row, col)? {
            Ok(ShotState::Miss)
        } else {
            Ok(ShotState::Untried)
        }
    }

    /// Whether a ship covers the cell at (row, col).
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.ship_map.get(row, col)?)
    }

    /// Per-catalog-entry hit counts and sunk flags.
    pub fn ship_statuses(&self) -> [ShipStatus; NUM_SHIPS] {
        core::array::from_fn(|i| match &self.ships[i] {
            Some(ship) => ShipStatus {
                class: ship.class(),
                hits: ship.hits_taken(),
                sunk: ship.is_sunk(),
            },
            None => ShipStatus {
                class: FLEET[i],
                hits: 0,
                sunk: false,
            },
        })
    }

    /// The placed ships, by catalog index.
    pub fn ships(&self) -> &[Option<Ship>; NUM_SHIPS] {
        &self.ships
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    /// Cells hit so far.
    pub fn hits(&self) -> Mask {
        self.hits
    }

    /// Cells missed so far.
    pub fn misses(&self) -> Mask {
        self.misses
    }

    /// Cells not yet fired at.
    pub fn untried(&self) -> Mask {
        !(self.hits | self.misses)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
