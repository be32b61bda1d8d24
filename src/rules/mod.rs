//! Rules engine trait and game outcomes.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions produce the next state
//! - When the game is over and who won

pub mod engine;

pub use engine::{Outcome, RulesEngine, Step};
