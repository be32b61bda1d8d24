//! Core engine types: players, board configuration, coordinates, actions,
//! persistent grids and the game state snapshot.

pub mod player;
pub mod config;
pub mod action;
pub mod error;
pub mod grid;
pub mod state;

pub use player::{Player, PlayerMap};
pub use config::{BoardConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use action::{Action, CellPos, Edge, Orientation};
pub use error::EngineError;
pub use grid::Grid;
pub use state::GameState;
