//! Turn-based human-vs-computer Battleship: random fleet placement, shot
//! resolution, turn control and a fogged state-query surface for rendering.

mod actor;
mod bitgrid;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod ship;
mod ui;

pub use actor::choose_target;
pub use bitgrid::{BitGrid, GridError, SetCells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use ship::*;
pub use ui::*;
