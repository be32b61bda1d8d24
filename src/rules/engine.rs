//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How an action turns one snapshot into the next
//! - Win/tie conditions

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::action::{Action, CellPos, Edge};
use crate::core::config::BoardConfig;
use crate::core::error::EngineError;
use crate::core::player::Player;
use crate::core::state::GameState;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player owns strictly more cells.
    Winner(Player),
    /// Both players own the same number of cells.
    Tie,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }

    /// The winning player, or `None` for a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(p) => Some(*p),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(p) => write!(f, "{} wins", p),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// What a single transition did.
///
/// `state` is always the snapshot to continue from. The other fields let a
/// presentation layer react to the move without diffing snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Snapshot after the action.
    pub state: GameState,

    /// Edge newly claimed by this action, if any.
    pub claimed: Option<Edge>,

    /// Cells completed by this action, awarded to the acting player.
    pub completed: SmallVec<[CellPos; 2]>,

    /// True when the action was a redundant claim and changed nothing.
    pub ignored: bool,
}

impl Step {
    /// A step that leaves the state exactly as it was.
    #[must_use]
    pub fn unchanged(state: GameState) -> Self {
        Self {
            state,
            claimed: None,
            completed: SmallVec::new(),
            ignored: true,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `step` must never modify the input snapshot
/// - `step` must be deterministic
/// - `legal_actions`: return empty once the game is over
pub trait RulesEngine {
    /// Get the board configuration.
    fn config(&self) -> &BoardConfig;

    /// Fresh state for a new game.
    fn initial_state(&self) -> GameState;

    /// Enumerate all legal claim actions for the player to move.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action and report what happened.
    ///
    /// # Errors
    ///
    /// Returns an error for actions that reference positions off the board,
    /// or for a snapshot of a different board than this engine plays.
    fn step(&self, state: &GameState, action: &Action) -> Result<Step, EngineError>;

    // === Convenience Methods ===

    /// Apply an action, keeping only the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Same as `step`.
    fn apply(&self, state: &GameState, action: &Action) -> Result<GameState, EngineError> {
        self.step(state, action).map(|step| step.state)
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(outcome)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<Outcome> {
        state.winner()
    }
}
