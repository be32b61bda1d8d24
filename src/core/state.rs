//! Game state snapshot.
//!
//! ## GameState
//!
//! One immutable snapshot of a game:
//! - Horizontal and vertical edge claims
//! - Cell owners
//! - Scores, whose turn it is, and the winner once the board is full
//!
//! Edge and cell grids are persistent (`im`), so cloning a snapshot is O(1)
//! and the engine builds each new snapshot without touching the previous one.
//! Consumers only get read access; the engine in `crate::games::boxes` is the
//! only writer.

use serde::{Deserialize, Serialize};

use super::action::{CellPos, Edge, Orientation};
use super::config::BoardConfig;
use super::error::EngineError;
use super::grid::Grid;
use super::player::{Player, PlayerMap};
use crate::rules::Outcome;

/// Complete game state snapshot.
///
/// Deserialisation checks that the snapshot is one the engine could have
/// produced: grid shapes match the board, a cell is owned exactly when it
/// is complete, scores count owned cells, and the winner agrees with them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    config: BoardConfig,

    /// `(height + 1) x width` horizontal edge claims.
    horizontal_edges: Grid<Option<Player>>,

    /// `height x (width + 1)` vertical edge claims.
    vertical_edges: Grid<Option<Player>>,

    /// `height x width` cell owners.
    cells: Grid<Option<Player>>,

    scores: PlayerMap<u32>,

    /// Player whose move is next.
    turn: Player,

    /// Set once every cell is owned.
    winner: Option<Outcome>,
}

#[derive(Deserialize)]
struct RawGameState {
    config: BoardConfig,
    horizontal_edges: Grid<Option<Player>>,
    vertical_edges: Grid<Option<Player>>,
    cells: Grid<Option<Player>>,
    scores: PlayerMap<u32>,
    turn: Player,
    winner: Option<Outcome>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = EngineError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let invalid = |reason: String| Err(EngineError::InvalidSnapshot(reason));
        let (width, height) = (raw.config.width(), raw.config.height());

        let shapes = [
            ("horizontal edge", &raw.horizontal_edges, height + 1, width),
            ("vertical edge", &raw.vertical_edges, height, width + 1),
            ("cell", &raw.cells, height, width),
        ];
        for (name, grid, rows, cols) in shapes {
            if (grid.rows(), grid.cols()) != (rows, cols) {
                return invalid(format!(
                    "{name} grid is {}x{}, expected {rows}x{cols} for a {} board",
                    grid.rows(),
                    grid.cols(),
                    raw.config
                ));
            }
        }

        let state = Self {
            config: raw.config,
            horizontal_edges: raw.horizontal_edges,
            vertical_edges: raw.vertical_edges,
            cells: raw.cells,
            scores: raw.scores,
            turn: raw.turn,
            winner: raw.winner,
        };

        let mut owned = PlayerMap::with_value(0usize);
        for ((row, col), owner) in state.cells.iter() {
            let cell = CellPos::new(row, col);
            if owner.is_some() != state.is_cell_complete(cell) {
                return invalid(format!("cell ({row}, {col}) ownership does not match its edges"));
            }
            if let Some(player) = owner {
                owned[*player] += 1;
            }
        }

        for player in Player::ALL {
            if usize::try_from(state.scores[player]).ok() != Some(owned[player]) {
                return invalid(format!(
                    "{player} scores {} but owns {} cells",
                    state.scores[player], owned[player]
                ));
            }
        }

        let expected = crate::games::boxes::decide_winner(&state.scores, state.config.cell_count());
        if state.winner != expected {
            return invalid(format!(
                "winner {:?} does not match scores, expected {:?}",
                state.winner, expected
            ));
        }

        Ok(state)
    }
}

impl GameState {
    /// Create a fresh game: nothing claimed, scores zero, `Player::A` to move.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let (width, height) = (config.width(), config.height());
        Self {
            config,
            horizontal_edges: Grid::new(height + 1, width, None),
            vertical_edges: Grid::new(height, width + 1, None),
            cells: Grid::new(height, width, None),
            scores: PlayerMap::with_value(0),
            turn: Player::A,
            winner: None,
        }
    }

    /// Board configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // === Edges ===

    /// Horizontal edge grid.
    #[must_use]
    pub fn horizontal_edges(&self) -> &Grid<Option<Player>> {
        &self.horizontal_edges
    }

    /// Vertical edge grid.
    #[must_use]
    pub fn vertical_edges(&self) -> &Grid<Option<Player>> {
        &self.vertical_edges
    }

    fn edge_grid(&self, orientation: Orientation) -> &Grid<Option<Player>> {
        match orientation {
            Orientation::Horizontal => &self.horizontal_edges,
            Orientation::Vertical => &self.vertical_edges,
        }
    }

    /// Who claimed an edge.
    ///
    /// Returns `None` both for unclaimed edges and for edges off the board;
    /// use `Edge::in_bounds` to tell them apart.
    #[must_use]
    pub fn edge(&self, edge: Edge) -> Option<Player> {
        self.edge_grid(edge.orientation)
            .get(edge.row, edge.col)
            .copied()
            .flatten()
    }

    /// Check if an edge has been claimed.
    #[must_use]
    pub fn is_claimed(&self, edge: Edge) -> bool {
        self.edge(edge).is_some()
    }

    /// Iterate over every claimed edge with its owner.
    pub fn claimed_edges(&self) -> impl Iterator<Item = (Edge, Player)> + '_ {
        self.all_edges()
            .filter_map(|(edge, owner)| owner.map(|player| (edge, player)))
    }

    /// Iterate over every edge nobody has claimed yet.
    pub fn unclaimed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.all_edges()
            .filter(|(_, owner)| owner.is_none())
            .map(|(edge, _)| edge)
    }

    fn all_edges(&self) -> impl Iterator<Item = (Edge, Option<Player>)> + '_ {
        let horizontal = self
            .horizontal_edges
            .iter()
            .map(|((row, col), owner)| (Edge::horizontal(row, col), *owner));
        let vertical = self
            .vertical_edges
            .iter()
            .map(|((row, col), owner)| (Edge::vertical(row, col), *owner));
        horizontal.chain(vertical)
    }

    // === Cells ===

    /// Cell owner grid.
    #[must_use]
    pub fn cells(&self) -> &Grid<Option<Player>> {
        &self.cells
    }

    /// Owner of a cell, or `None` if unowned or off the board.
    #[must_use]
    pub fn cell(&self, cell: CellPos) -> Option<Player> {
        self.cells.get(cell.row, cell.col).copied().flatten()
    }

    /// A cell is complete when all four of its bounding edges are claimed.
    #[must_use]
    pub fn is_cell_complete(&self, cell: CellPos) -> bool {
        cell.in_bounds(&self.config) && cell.bounding_edges().iter().all(|e| self.is_claimed(*e))
    }

    /// Number of cells with an owner.
    #[must_use]
    pub fn owned_cells(&self) -> usize {
        self.cells.values().filter(|owner| owner.is_some()).count()
    }

    // === Score / turn / result ===

    /// Per-player scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// A single player's score.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Sum of both scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.scores.values().sum()
    }

    /// Player whose move is next.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Game result, set once the board is full.
    #[must_use]
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Check if the game has reached its terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    // === Engine-only updates ===
    //
    // Each returns a new snapshot; `self` is never modified.

    pub(crate) fn with_edge(&self, edge: Edge, player: Player) -> Option<Self> {
        let grid = self
            .edge_grid(edge.orientation)
            .with(edge.row, edge.col, Some(player))?;
        let mut next = self.clone();
        match edge.orientation {
            Orientation::Horizontal => next.horizontal_edges = grid,
            Orientation::Vertical => next.vertical_edges = grid,
        }
        Some(next)
    }

    pub(crate) fn with_cell(&self, cell: CellPos, player: Player) -> Option<Self> {
        let cells = self.cells.with(cell.row, cell.col, Some(player))?;
        Some(Self {
            cells,
            ..self.clone()
        })
    }

    pub(crate) fn with_turn(&self, turn: Player) -> Self {
        Self { turn, ..self.clone() }
    }

    pub(crate) fn with_points(&self, player: Player, points: u32) -> Self {
        let mut scores = self.scores;
        scores[player] += points;
        Self {
            scores,
            ..self.clone()
        }
    }

    pub(crate) fn with_winner(&self, winner: Option<Outcome>) -> Self {
        Self {
            winner,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

/// Text rendering of the board.
///
/// Dots are `+`, claimed edges are drawn with the claiming player's letter
/// (`A`/`B` on horizontal edges, `a`/`b` on vertical edges), owned cells
/// show their owner's letter and everything unclaimed is blank.
///
/// ```text
/// +A+ +
/// aAa b
/// +A+ +
/// ```
impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let height = self.config.height();

        for row in 0..=height {
            let mut line = String::from("+");
            for owner in self.horizontal_edges.row(row) {
                line.push(owner.map_or(' ', Player::letter));
                line.push('+');
            }
            writeln!(f, "{}", line.trim_end())?;

            if row == height {
                break;
            }

            let mut line = String::new();
            let mut cells = self.cells.row(row);
            for owner in self.vertical_edges.row(row) {
                line.push(owner.map_or(' ', |p| p.letter().to_ascii_lowercase()));
                if let Some(cell) = cells.next() {
                    line.push(cell.map_or(' ', Player::letter));
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
