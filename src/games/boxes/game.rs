//! Dots-and-boxes rules.

use smallvec::SmallVec;
use tracing::{debug, info, instrument, trace, warn};

use crate::core::{Action, BoardConfig, CellPos, Edge, EngineError, GameState, Player, PlayerMap};
use crate::rules::{Outcome, RulesEngine, Step};

/// Dots-and-boxes rules engine for a fixed board size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotsAndBoxes {
    config: BoardConfig,
}

impl DotsAndBoxes {
    /// Create an engine for the given board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }
}

/// Builder for creating a `DotsAndBoxes` engine and its initial state.
#[derive(Clone, Copy, Debug, Default)]
pub struct DotsAndBoxesBuilder {
    config: BoardConfig,
}

impl DotsAndBoxesBuilder {
    /// Start from the default 4x3 board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board width in cells.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidDimensions` if `width` is zero.
    pub fn width(mut self, width: usize) -> Result<Self, EngineError> {
        self.config = self.config.with_width(width)?;
        Ok(self)
    }

    /// Set the board height in cells.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidDimensions` if `height` is zero.
    pub fn height(mut self, height: usize) -> Result<Self, EngineError> {
        self.config = self.config.with_height(height)?;
        Ok(self)
    }

    /// Build the engine and initial state.
    pub fn build(self) -> (DotsAndBoxes, GameState) {
        let game = DotsAndBoxes::new(self.config);
        let state = game.initial_state();
        (game, state)
    }
}

impl RulesEngine for DotsAndBoxes {
    fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn initial_state(&self) -> GameState {
        GameState::new(self.config)
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_finished() {
            return Vec::new();
        }
        state.unclaimed_edges().map(Action::claim).collect()
    }

    /// Like the free `step`, but only for snapshots of this engine's board.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::BoardMismatch` for a snapshot of another board
    /// size, including on `Reset`, and `EngineError::EdgeOutOfRange` for
    /// edges off the board.
    fn step(&self, state: &GameState, action: &Action) -> Result<Step, EngineError> {
        if state.config() != &self.config {
            warn!(expected = %self.config, found = %state.config(), "rejecting foreign snapshot");
            return Err(EngineError::BoardMismatch {
                expected: self.config,
                found: *state.config(),
            });
        }
        match action {
            Action::Reset => Ok(reset(self.initial_state())),
            _ => step(state, action),
        }
    }
}

/// Apply an action to a snapshot, returning the next snapshot.
///
/// The board size is taken from the snapshot itself, so `Reset` produces a
/// fresh game of the same size.
///
/// # Errors
///
/// Returns `EngineError::EdgeOutOfRange` for edges off the board. The input
/// snapshot is unaffected either way.
pub fn apply(state: &GameState, action: &Action) -> Result<GameState, EngineError> {
    step(state, action).map(|step| step.state)
}

/// Apply an action to a snapshot and report what it did.
///
/// # Errors
///
/// Returns `EngineError::EdgeOutOfRange` for edges off the board.
#[instrument(level = "debug", skip(state, action), fields(action = %action, turn = %state.turn()))]
pub fn step(state: &GameState, action: &Action) -> Result<Step, EngineError> {
    match action.edge() {
        Some(edge) => claim_edge(state, edge),
        None => Ok(reset(GameState::new(*state.config()))),
    }
}

fn reset(state: GameState) -> Step {
    debug!(board = %state.config(), "resetting game");
    Step {
        state,
        claimed: None,
        completed: SmallVec::new(),
        ignored: false,
    }
}

fn claim_edge(state: &GameState, edge: Edge) -> Result<Step, EngineError> {
    let config = *state.config();
    let out_of_range = || EngineError::EdgeOutOfRange {
        edge,
        width: config.width(),
        height: config.height(),
    };

    if !edge.in_bounds(&config) {
        warn!(%edge, "rejecting edge outside the board");
        return Err(out_of_range());
    }

    if state.is_claimed(edge) {
        trace!(%edge, "edge already claimed, ignoring");
        return Ok(Step::unchanged(state.clone()));
    }

    let player = state.turn();
    let mut next = state.with_edge(edge, player).ok_or_else(out_of_range)?;

    // Only neighbours of the new edge can have just become complete.
    let completed: SmallVec<[CellPos; 2]> = edge
        .adjacent_cells(&config)
        .into_iter()
        .filter(|cell| next.is_cell_complete(*cell))
        .collect();

    for cell in &completed {
        next = next.with_cell(*cell, player).ok_or_else(out_of_range)?;
    }

    let next = if completed.is_empty() {
        debug!(%edge, %player, "edge claimed");
        next.with_turn(player.opponent())
    } else {
        debug!(%edge, %player, cells = completed.len(), "cells completed, player moves again");
        let scored = next.with_points(player, completed.len() as u32);
        let winner = decide_winner(scored.scores(), config.cell_count());
        if let Some(outcome) = winner {
            info!(%outcome, "game finished");
        }
        scored.with_winner(winner)
    };

    Ok(Step {
        state: next,
        claimed: Some(edge),
        completed,
        ignored: false,
    })
}

/// Decide the result once every cell is owned.
///
/// Returns `None` while cells remain, `Tie` on equal scores, otherwise the
/// player with the strictly higher score.
#[must_use]
pub fn decide_winner(scores: &PlayerMap<u32>, cell_count: usize) -> Option<Outcome> {
    let total: u32 = scores.values().sum();
    if (total as usize) < cell_count {
        return None;
    }

    let (a, b) = (scores[Player::A], scores[Player::B]);
    Some(match a.cmp(&b) {
        std::cmp::Ordering::Equal => Outcome::Tie,
        std::cmp::Ordering::Greater => Outcome::Winner(Player::A),
        std::cmp::Ordering::Less => Outcome::Winner(Player::B),
    })
}
