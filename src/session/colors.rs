//! Player display colours.
//!
//! Colours belong to the presentation side. The engine never reads them and
//! changing them never touches game state.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, PlayerMap};

/// Default colour for `Player::A`.
pub const PLAYER_A_COLOR: Color = Color::rgb(0xc9, 0x6c, 0x54);

/// Default colour for `Player::B`.
pub const PLAYER_B_COLOR: Color = Color::rgb(0x6b, 0xde, 0x99);

/// An sRGB colour, written as `#rrggbb`.
///
/// ```
/// use dots_boxes::session::Color;
///
/// let color: Color = "#C96C54".parse().unwrap();
/// assert_eq!(color.to_string(), "#c96c54");
/// assert!("c96c54".parse::<Color>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a colour from its components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::str::FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour per player.
pub type PlayerColors = PlayerMap<Color>;

/// The starting colours: `#c96c54` for A, `#6bde99` for B.
#[must_use]
pub fn default_colors() -> PlayerColors {
    PlayerMap::new(|player| match player {
        crate::core::Player::A => PLAYER_A_COLOR,
        crate::core::Player::B => PLAYER_B_COLOR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_parse_color() {
        let color: Color = "#6bde99".parse().unwrap();
        assert_eq!(color, Color::rgb(0x6b, 0xde, 0x99));
    }

    #[test]
    fn test_parse_invalid() {
        for bad in ["", "#", "#12345", "#1234567", "#gg0000", "123456", "#+12345"] {
            assert_eq!(
                bad.parse::<Color>(),
                Err(EngineError::InvalidColor(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_colors() {
        let colors = default_colors();
        assert_eq!(colors[Player::A].to_string(), "#c96c54");
        assert_eq!(colors[Player::B].to_string(), "#6bde99");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PLAYER_A_COLOR).unwrap();
        assert_eq!(json, "\"#c96c54\"");

        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PLAYER_A_COLOR);

        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
