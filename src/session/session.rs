//! Game session: the single owner a presentation layer holds.
//!
//! A `GameSession` keeps the current snapshot, the rules engine and the
//! player colours together. Every action goes through `dispatch`, which
//! takes `&mut self`, so actions are applied strictly one at a time.

use tracing::{debug, instrument};

use super::colors::{default_colors, Color, PlayerColors};
use crate::core::{Action, BoardConfig, CellPos, Edge, EngineError, GameState, Player};
use crate::games::boxes::DotsAndBoxes;
use crate::rules::{Outcome, RulesEngine, Step};

/// Current game plus display settings.
#[derive(Clone, Debug)]
pub struct GameSession {
    game: DotsAndBoxes,
    state: GameState,
    colors: PlayerColors,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl GameSession {
    /// Start a session with a fresh game on the given board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let game = DotsAndBoxes::new(config);
        Self {
            state: game.initial_state(),
            game,
            colors: default_colors(),
        }
    }

    /// Use custom starting colours.
    #[must_use]
    pub fn with_colors(mut self, colors: PlayerColors) -> Self {
        self.colors = colors;
        self
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current snapshot. O(1).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Apply an action and make its result the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EdgeOutOfRange` for edges off the board; the
    /// current snapshot is kept.
    #[instrument(level = "debug", skip(self, action), fields(action = %action))]
    pub fn dispatch(&mut self, action: Action) -> Result<Step, EngineError> {
        let step = self.game.step(&self.state, &action)?;
        if !step.ignored {
            self.state = step.state.clone();
        }
        Ok(step)
    }

    /// Claim an edge for the player to move.
    ///
    /// # Errors
    ///
    /// Same as `dispatch`.
    pub fn claim(&mut self, edge: Edge) -> Result<Step, EngineError> {
        self.dispatch(Action::claim(edge))
    }

    /// Start a new game of the same size. Colours are kept.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.state = self.game.initial_state();
    }

    /// Legal claims for the player to move.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.game.legal_actions(&self.state)
    }

    // === Colours ===

    /// Player colours.
    #[must_use]
    pub fn colors(&self) -> &PlayerColors {
        &self.colors
    }

    /// Change one player's colour.
    pub fn set_color(&mut self, player: Player, color: Color) {
        self.colors[player] = color;
    }

    /// Colour of an edge's owner, `None` while unclaimed.
    #[must_use]
    pub fn edge_color(&self, edge: Edge) -> Option<Color> {
        self.state.edge(edge).map(|p| self.colors[p])
    }

    /// Colour of a cell's owner, `None` while unowned.
    #[must_use]
    pub fn cell_color(&self, cell: CellPos) -> Option<Color> {
        self.state.cell(cell).map(|p| self.colors[p])
    }

    // === Score board ===

    /// Player the score board highlights: the winner once decided,
    /// nobody on a tie, otherwise the player to move.
    #[must_use]
    pub fn highlighted_player(&self) -> Option<Player> {
        match self.state.winner() {
            Some(outcome) => outcome.winner(),
            None => Some(self.state.turn()),
        }
    }

    /// Heading shown once the game is over.
    #[must_use]
    pub fn banner(&self) -> Option<&'static str> {
        self.state.winner().map(|outcome| match outcome {
            Outcome::Winner(_) => "Winner",
            Outcome::Tie => "Tie",
        })
    }
}
