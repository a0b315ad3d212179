//! RGB color with hex-string parsing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InspectError;

/// An opaque RGB color (overlay drawing has no alpha handling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let hex = hex.trim_start_matches('#');
        // Byte-indexed slicing below; multibyte input must not panic
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color { r, g, b })
    }
}

impl FromStr for Color {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
            .ok_or_else(|| InspectError::InvalidArgument(format!("invalid hex color: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::new(255, 0, 0)));
        assert_eq!(Color::from_hex("#00FF00"), Some(Color::new(0, 255, 0)));
        assert_eq!(Color::from_hex("0000FF"), Some(Color::new(0, 0, 255)));
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("#FFF"), None);
    }

    #[test]
    fn test_from_hex_rejects_multibyte_input() {
        // 6 bytes but not 6 ASCII digits; must return None, not panic
        assert_eq!(Color::from_hex("€€"), None);
        assert_eq!(Color::from_hex("#€€"), None);
        assert_eq!(Color::from_hex("ÿÿÿ"), None);
        assert!("€€".parse::<Color>().is_err());
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("not-a-color".parse::<Color>().is_err());
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::RED);
    }
}
