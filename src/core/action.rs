//! Board coordinates and actions.
//!
//! An `Edge` names one segment between two adjacent dots. Horizontal edges
//! live on a `(height + 1) x width` grid, vertical edges on a
//! `height x (width + 1)` grid. A `CellPos` names one box.
//!
//! `Action` is the closed set of intents a presentation layer may send:
//! claim a horizontal edge, claim a vertical edge, or reset.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::BoardConfig;

/// Edge orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Top/bottom border of a cell.
    Horizontal,
    /// Left/right border of a cell.
    Vertical,
}

/// A single edge segment on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Horizontal or vertical.
    pub orientation: Orientation,
    /// Row in the orientation's edge grid.
    pub row: usize,
    /// Column in the orientation's edge grid.
    pub col: usize,
}

impl Edge {
    /// Horizontal edge at `(row, col)`; the top border of cell `(row, col)`.
    #[must_use]
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            row,
            col,
        }
    }

    /// Vertical edge at `(row, col)`; the left border of cell `(row, col)`.
    #[must_use]
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self {
            orientation: Orientation::Vertical,
            row,
            col,
        }
    }

    /// Check whether this edge exists on a board of the given size.
    #[must_use]
    pub fn in_bounds(&self, config: &BoardConfig) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.row <= config.height() && self.col < config.width(),
            Orientation::Vertical => self.row < config.height() && self.col <= config.width(),
        }
    }

    /// Cells bordered by this edge that lie on the board.
    ///
    /// A horizontal edge borders the cell below it `(row, col)` and the cell
    /// above it `(row - 1, col)`. A vertical edge borders the cell to its right
    /// `(row, col)` and the cell to its left `(row, col - 1)`. Edges on the
    /// board's outline have a single neighbour.
    #[must_use]
    pub fn adjacent_cells(&self, config: &BoardConfig) -> SmallVec<[CellPos; 2]> {
        let (row, col) = (self.row, self.col);
        let candidates = match self.orientation {
            Orientation::Horizontal => [
                Some(CellPos::new(row, col)),
                row.checked_sub(1).map(|r| CellPos::new(r, col)),
            ],
            Orientation::Vertical => [
                Some(CellPos::new(row, col)),
                col.checked_sub(1).map(|c| CellPos::new(row, c)),
            ],
        };

        candidates
            .into_iter()
            .flatten()
            .filter(|cell| cell.in_bounds(config))
            .collect()
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        write!(f, "{} edge ({}, {})", kind, self.row, self.col)
    }
}

/// Position of a single cell (box).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    /// Cell row, `0..height`.
    pub row: usize,
    /// Cell column, `0..width`.
    pub col: usize,
}

impl CellPos {
    /// Create a cell position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this cell exists on a board of the given size.
    #[must_use]
    pub fn in_bounds(&self, config: &BoardConfig) -> bool {
        self.row < config.height() && self.col < config.width()
    }

    /// The four edges around this cell: top, bottom, left, right.
    #[must_use]
    pub const fn bounding_edges(&self) -> [Edge; 4] {
        [
            Edge::horizontal(self.row, self.col),
            Edge::horizontal(self.row + 1, self.col),
            Edge::vertical(self.row, self.col),
            Edge::vertical(self.row, self.col + 1),
        ]
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell ({}, {})", self.row, self.col)
    }
}

/// A move intent sent to the engine.
///
/// ## Example
///
/// ```
/// use dots_boxes::core::{Action, Edge};
///
/// let action: Action = serde_json::from_str(
///     r#"{"type":"claim-vertical-edge","row":1,"col":4}"#,
/// ).unwrap();
///
/// assert_eq!(action.edge(), Some(Edge::vertical(1, 4)));
/// assert_eq!(Action::claim(Edge::vertical(1, 4)), action);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    /// Claim the horizontal edge at `(row, col)`; `row` in `0..=height`,
    /// `col` in `0..width`.
    ClaimHorizontalEdge {
        /// Edge row.
        row: usize,
        /// Edge column.
        col: usize,
    },
    /// Claim the vertical edge at `(row, col)`; `row` in `0..height`,
    /// `col` in `0..=width`.
    ClaimVerticalEdge {
        /// Edge row.
        row: usize,
        /// Edge column.
        col: usize,
    },
    /// Discard all progress and start a fresh game.
    Reset,
}

impl Action {
    /// Build the claim action for an edge.
    #[must_use]
    pub const fn claim(edge: Edge) -> Self {
        match edge.orientation {
            Orientation::Horizontal => Action::ClaimHorizontalEdge {
                row: edge.row,
                col: edge.col,
            },
            Orientation::Vertical => Action::ClaimVerticalEdge {
                row: edge.row,
                col: edge.col,
            },
        }
    }

    /// The edge this action claims, or `None` for `Reset`.
    #[must_use]
    pub const fn edge(&self) -> Option<Edge> {
        match *self {
            Action::ClaimHorizontalEdge { row, col } => Some(Edge::horizontal(row, col)),
            Action::ClaimVerticalEdge { row, col } => Some(Edge::vertical(row, col)),
            Action::Reset => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.edge() {
            Some(edge) => write!(f, "claim {}", edge),
            None => write!(f, "reset"),
        }
    }
}
