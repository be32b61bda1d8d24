//! Dots-and-boxes.
//!
//! - Players alternately claim one edge of a `width x height` grid of cells
//! - Claiming the fourth edge of a cell awards the cell to the claimer,
//!   who moves again
//! - Once every cell is owned, the higher score wins; equal scores tie

mod game;

pub use game::{apply, decide_winner, step, DotsAndBoxes, DotsAndBoxesBuilder};
