//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{FillError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a colour from a raw `[r, g, b, a]` pixel.
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#RRGGBB` colour string.
    ///
    /// Hex digits are case-insensitive. The leading `#` is required and no
    /// other form (shorthand, alpha suffix, named colours) is accepted.
    /// The result is always fully opaque.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || FillError::InvalidColorFormat {
            input: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let r = parse_hex_byte(&hex[0..2]).ok_or_else(invalid)?;
        let g = parse_hex_byte(&hex[2..4]).ok_or_else(invalid)?;
        let b = parse_hex_byte(&hex[4..6]).ok_or_else(invalid)?;
        Ok(Self::rgb(r, g, b))
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Composite this colour over an opaque background (source-over).
    ///
    /// The background's alpha is ignored; the result is always opaque.
    pub fn over(self, background: Colour) -> Colour {
        let a = u32::from(self.a);
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = u32::from(fg) * a + u32::from(bg) * (255 - a);
            ((v + 127) / 255) as u8
        };
        Colour::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl FromStr for Colour {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_mixed_case() {
        let c = Colour::from_hex("#fF00aA").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0xAA));
    }

    #[test]
    fn test_from_hex_requires_hash() {
        let err = Colour::from_hex("FF0000").unwrap_err();
        assert!(matches!(err, FillError::InvalidColorFormat { .. }));
    }

    #[test]
    fn test_from_hex_rejects_other_forms() {
        let inputs = [
            "#F00", "#F008", "#FF000080", "#GG0000", "", "#", "red", " #FF0000", "#FF0000 ",
        ];
        for input in inputs {
            assert!(Colour::from_hex(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_from_hex_rejects_multibyte() {
        // Six bytes, but not six hex digits.
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_from_str() {
        let c: Colour = "#00FF00".parse().unwrap();
        assert_eq!(c, Colour::rgb(0, 255, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_over_transparent_takes_background() {
        assert_eq!(Colour::TRANSPARENT.over(Colour::WHITE), Colour::WHITE);
    }

    #[test]
    fn test_over_opaque_keeps_foreground() {
        let c = Colour::rgb(10, 20, 30);
        assert_eq!(c.over(Colour::WHITE), c);
    }

    #[test]
    fn test_over_half_alpha() {
        let c = Colour::new(0, 0, 0, 128).over(Colour::WHITE);
        assert_eq!(c, Colour::rgb(127, 127, 127));
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK, Colour::rgb(0, 0, 0));
        assert_eq!(Colour::WHITE, Colour::rgb(255, 255, 255));
        assert!(Colour::TRANSPARENT.is_transparent());
        assert!(Colour::BLACK.is_opaque());
        assert_eq!(Colour::BLACK.with_alpha(0), Colour::TRANSPARENT);
    }
}
