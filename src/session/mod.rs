//! Presentation-facing session: current snapshot, engine and colours.
//!
//! The presentation layer owns one `GameSession` and passes it explicitly to
//! rendering and input handling. There is no global game context.

mod colors;
#[allow(clippy::module_inception)]
mod session;

pub use colors::{default_colors, Color, PlayerColors, PLAYER_A_COLOR, PLAYER_B_COLOR};
pub use session::GameSession;
