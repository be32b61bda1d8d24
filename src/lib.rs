//! # dots-boxes
//!
//! A two-player dots-and-boxes engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `apply(state, action)` returns a new snapshot and
//!    never touches the one it was given.
//!
//! 2. **Persistent Data Structures**: Edge and cell grids use `im-rs`, so a
//!    snapshot clones in O(1) and updates share structure with their parent.
//!
//! 3. **Explicit Ownership**: A presentation layer holds one `GameSession`
//!    (snapshot + engine + colours) and passes it around. No global context.
//!
//! ## Modules
//!
//! - `core`: Players, board configuration, coordinates, actions, grids, state
//! - `rules`: `RulesEngine` trait, outcomes and transition reports
//! - `games`: The dots-and-boxes rules
//! - `session`: Presentation-facing owner of the current game and colours
//!
//! ## Example
//!
//! ```
//! use dots_boxes::{apply, Action, CellPos, GameState, Player};
//!
//! let mut state = GameState::default();
//! for edge in CellPos::new(0, 0).bounding_edges() {
//!     state = apply(&state, &Action::claim(edge)).unwrap();
//! }
//!
//! // A, B, A, B: the fourth claim completes the box for B, who moves again.
//! assert_eq!(state.cell(CellPos::new(0, 0)), Some(Player::B));
//! assert_eq!(state.score(Player::B), 1);
//! assert_eq!(state.turn(), Player::B);
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, BoardConfig, CellPos, Edge, EngineError, GameState, Grid, Orientation, Player,
    PlayerMap,
};

pub use crate::rules::{Outcome, RulesEngine, Step};

pub use crate::games::boxes::{apply, step, DotsAndBoxes, DotsAndBoxesBuilder};

pub use crate::session::{Color, GameSession, PlayerColors};
