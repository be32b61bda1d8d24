//! Engine error types.
//!
//! Redundant moves (claiming an already-claimed edge) are not errors; the
//! engine ignores them. Errors are reserved for input a well-behaved caller
//! never produces.

use super::action::Edge;
use super::config::BoardConfig;

/// Errors raised by the engine and session.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Edge coordinates fall outside the board.
    #[display("{edge} is outside a {width}x{height} board")]
    EdgeOutOfRange {
        /// The rejected edge.
        edge: Edge,
        /// Board width in cells.
        width: usize,
        /// Board height in cells.
        height: usize,
    },

    /// Board dimensions must both be positive.
    #[display("Invalid board dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Snapshot was built for a different board than the engine's.
    #[display("Snapshot board {found} does not match engine board {expected}")]
    BoardMismatch {
        /// The engine's board.
        expected: BoardConfig,
        /// The snapshot's board.
        found: BoardConfig,
    },

    /// Deserialized snapshot breaks a game invariant.
    #[display("Invalid snapshot: {}", _0)]
    InvalidSnapshot(#[error(not(source))] String),

    /// Display colour is not of the form `#rrggbb`.
    #[display("Invalid colour {:?}", _0)]
    InvalidColor(#[error(not(source))] String),
}
