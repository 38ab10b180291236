//! Game state and turn control for one human-vs-computer session.

use crate::actor;
use crate::board::Board;
use crate::common::{BoardError, Outcome, ShotState};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use log::{debug, info};
use rand::Rng;

/// One of the two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Whose shot is permitted next, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    ComputerTurn,
    GameOver,
}

/// The player's view of one of their own cells. Occupancy is visible
/// unconditionally on the owner's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnCell {
    pub occupied: bool,
    pub shot: ShotState,
}

/// The player's view of one computer-board cell: shot history only, never
/// occupancy of unrevealed ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingCell {
    pub shot: ShotState,
}

/// A whole game: both boards, the phase, and the winner once decided. The
/// value is owned by the caller and passed to each operation explicitly;
/// once the game is over it no longer mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    player: Board,
    computer: Board,
    phase: Phase,
    winner: Option<Side>,
}

impl Game {
    /// Place both fleets at random and open the game on the player's turn.
    pub fn start<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let mut player = Board::new();
        player.place_fleet(rng)?;
        let mut computer = Board::new();
        computer.place_fleet(rng)?;
        info!("fleets placed, player to move");
        Ok(Game {
            player,
            computer,
            phase: Phase::PlayerTurn,
            winner: None,
        })
    }

    /// Build a game from prepared boards, opening on the player's turn.
    /// Useful for custom placement flows.
    pub fn with_boards(player: Board, computer: Board) -> Self {
        Game {
            player,
            computer,
            phase: Phase::PlayerTurn,
            winner: None,
        }
    }

    /// Resolve a player shot against the computer board. Outside the
    /// player's turn (including after game over) the shot is `Rejected` and
    /// nothing changes. A non-`Rejected` outcome advances the turn or ends
    /// the game.
    pub fn player_fire(&mut self, row: usize, col: usize) -> Result<Outcome, BoardError> {
        if self.phase != Phase::PlayerTurn {
            return Ok(Outcome::Rejected);
        }
        let outcome = self.computer.fire(row, col)?;
        self.advance(Side::Player, outcome);
        Ok(outcome)
    }

    /// Run one computer turn: pick a target on the player's board, resolve
    /// it, advance the turn. Returns `None` outside the computer's turn.
    /// The target is always an untried cell, so the outcome is never
    /// `Rejected`.
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<(usize, usize, Outcome)> {
        if self.phase != Phase::ComputerTurn {
            return None;
        }
        let (row, col) = actor::choose_target(rng, &self.player)?;
        // targets from the untried mask are in bounds and fresh
        let outcome = self.player.fire(row, col).ok()?;
        self.advance(Side::Computer, outcome);
        Some((row, col, outcome))
    }

    fn advance(&mut self, shooter: Side, outcome: Outcome) {
        if outcome == Outcome::Rejected {
            return;
        }
        let target = match shooter {
            Side::Player => &self.computer,
            Side::Computer => &self.player,
        };
        if target.is_defeated() {
            self.phase = Phase::GameOver;
            self.winner = Some(shooter);
            info!("game over, {:?} wins", shooter);
        } else {
            self.phase = match shooter {
                Side::Player => Phase::ComputerTurn,
                Side::Computer => Phase::PlayerTurn,
            };
            debug!("turn passes to {:?}", shooter.opponent());
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The side permitted to fire next, or `None` once the game is over.
    pub fn active_side(&self) -> Option<Side> {
        match self.phase {
            Phase::PlayerTurn => Some(Side::Player),
            Phase::ComputerTurn => Some(Side::Computer),
            Phase::GameOver => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// The player's own board, fully visible to its owner.
    pub fn player_board(&self) -> &Board {
        &self.player
    }

    /// Full view of the player's own board.
    pub fn own_cells(&self) -> [[OwnCell; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|row| {
            core::array::from_fn(|col| OwnCell {
                occupied: self.player.is_occupied(row, col).unwrap_or(false),
                shot: self
                    .player
                    .shot_state(row, col)
                    .unwrap_or(ShotState::Untried),
            })
        })
    }

    /// Fogged view of the computer board: shot history only.
    pub fn tracking_cells(&self) -> [[TrackingCell; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|row| {
            core::array::from_fn(|col| TrackingCell {
                shot: self
                    .computer
                    .shot_state(row, col)
                    .unwrap_or(ShotState::Untried),
            })
        })
    }

    /// Which computer ships have been sunk, by catalog index. Sunk ships
    /// are public knowledge; afloat ones stay hidden.
    pub fn computer_ships_sunk(&self) -> [bool; NUM_SHIPS] {
        let statuses = self.computer.ship_statuses();
        core::array::from_fn(|i| statuses[i].sunk)
    }
}
