//! Board configuration.
//!
//! The board size is fixed when a game is created. An in-progress game is
//! never resized; build a new engine with a different `BoardConfig` instead.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Default board width in cells.
pub const DEFAULT_WIDTH: usize = 4;

/// Default board height in cells.
pub const DEFAULT_HEIGHT: usize = 3;

/// Board dimensions, measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    width: usize,
    height: usize,
}

#[derive(Deserialize)]
struct RawBoardConfig {
    width: usize,
    height: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = EngineError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        BoardConfig::new(raw.width, raw.height)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    /// Create a board configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero,
    /// or if the board is too large for its dots or scores to be counted.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let dots = width
            .checked_add(1)
            .zip(height.checked_add(1))
            .and_then(|(w, h)| w.checked_mul(h));
        let fits = dots.is_some() && u32::try_from(width * height).is_ok();
        if width == 0 || height == 0 || !fits {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Replace the width, keeping the height.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidDimensions` if `width` is zero.
    pub fn with_width(self, width: usize) -> Result<Self, EngineError> {
        Self::new(width, self.height)
    }

    /// Replace the height, keeping the width.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidDimensions` if `height` is zero.
    pub fn with_height(self, height: usize) -> Result<Self, EngineError> {
        Self::new(self.width, height)
    }

    /// Board width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, which is also the combined maximum score.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of horizontal edges: `(height + 1) * width`.
    #[must_use]
    pub const fn horizontal_edge_count(&self) -> usize {
        (self.height + 1) * self.width
    }

    /// Number of vertical edges: `height * (width + 1)`.
    #[must_use]
    pub const fn vertical_edge_count(&self) -> usize {
        self.height * (self.width + 1)
    }

    /// Total number of edges on the board.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.horizontal_edge_count() + self.vertical_edge_count()
    }
}

impl std::fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.width(), 4);
        assert_eq!(config.height(), 3);
        assert_eq!(config.cell_count(), 12);
    }

    #[test]
    fn test_edge_counts() {
        let config = BoardConfig::default();
        assert_eq!(config.horizontal_edge_count(), 16);
        assert_eq!(config.vertical_edge_count(), 15);
        assert_eq!(config.edge_count(), 31);

        let single = BoardConfig::new(1, 1).unwrap();
        assert_eq!(single.edge_count(), 4);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            BoardConfig::new(0, 3),
            Err(EngineError::InvalidDimensions { width: 0, height: 3 })
        );
        assert!(BoardConfig::new(4, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(BoardConfig::new(usize::MAX, 1).is_err());
        assert!(BoardConfig::new(1, usize::MAX).is_err());
        assert!(BoardConfig::new(1 << 20, 1 << 20).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BoardConfig::default().to_string(), "4x3");
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::default().with_width(6).unwrap().with_height(5).unwrap();
        assert_eq!(config.width(), 6);
        assert_eq!(config.height(), 5);

        assert!(BoardConfig::default().with_height(0).is_err());
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::new(5, 2).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"width":5,"height":2}"#);
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialization_validates() {
        let result: Result<BoardConfig, _> = serde_json::from_str(r#"{"width":0,"height":2}"#);
        assert!(result.is_err());
    }
}
