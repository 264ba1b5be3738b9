//! Border and tolerance classification.
//!
//! The thresholds are tuned for thick black outlines on a white page.
//! Anti-aliased grey fringes stay inside the tolerance of the white
//! interior, while the outline itself differs by more than the tolerance
//! in at least one channel.

use serde::{Deserialize, Serialize};

use crate::error::{FillError, Result};
use crate::types::Colour;

/// Alpha above which a pixel counts as opaque.
pub const DEFAULT_OPAQUE_ALPHA: u8 = 100;

/// Every RGB channel must be below this for a pixel to count as dark.
pub const DEFAULT_DARK_CHANNEL: u8 = 100;

/// Per-channel difference below which two pixels belong to the same region.
pub const DEFAULT_TOLERANCE: u8 = 50;

/// Thresholds that decide what is a border and what is fillable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillPolicy {
    /// Alpha must be strictly greater than this to be opaque.
    pub opaque_alpha: u8,

    /// R, G and B must all be strictly less than this to be dark.
    pub dark_channel: u8,

    /// Channels must differ by strictly less than this to match.
    ///
    /// Zero would match no pixel, not even the seed itself; [`validate`]
    /// rejects it.
    ///
    /// [`validate`]: FillPolicy::validate
    pub tolerance: u8,
}

impl Default for FillPolicy {
    fn default() -> Self {
        Self {
            opaque_alpha: DEFAULT_OPAQUE_ALPHA,
            dark_channel: DEFAULT_DARK_CHANNEL,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl FillPolicy {
    /// Reject thresholds that cannot produce a fill.
    pub fn validate(&self) -> Result<()> {
        if self.tolerance == 0 {
            return Err(FillError::InvalidPolicy {
                message: "tolerance must be at least 1".to_string(),
                help: Some("A zero tolerance matches no pixel, not even the seed".to_string()),
            });
        }
        Ok(())
    }

    pub fn is_opaque(&self, c: Colour) -> bool {
        c.a > self.opaque_alpha
    }

    pub fn is_dark(&self, c: Colour) -> bool {
        c.r < self.dark_channel && c.g < self.dark_channel && c.b < self.dark_channel
    }

    /// An opaque dark pixel is part of an outline stroke and never filled
    /// as a seed.
    pub fn is_border(&self, c: Colour) -> bool {
        self.is_opaque(c) && self.is_dark(c)
    }

    /// Whether two colours fall in the same region.
    #[inline]
    pub fn matches(&self, a: Colour, b: Colour) -> bool {
        let t = self.tolerance;
        a.r.abs_diff(b.r) < t
            && a.g.abs_diff(b.g) < t
            && a.b.abs_diff(b.b) < t
            && a.a.abs_diff(b.a) < t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let p = FillPolicy::default();
        assert_eq!(p.opaque_alpha, 100);
        assert_eq!(p.dark_channel, 100);
        assert_eq!(p.tolerance, 50);
    }

    #[test]
    fn test_border_requires_opaque_and_dark() {
        let p = FillPolicy::default();
        assert!(p.is_border(Colour::BLACK));
        assert!(p.is_border(Colour::new(99, 99, 99, 101)));

        // Transparent black is background, not outline
        assert!(!p.is_border(Colour::TRANSPARENT));
        assert!(!p.is_border(Colour::new(0, 0, 0, 100)));

        // One bright channel is enough to leave the outline class
        assert!(!p.is_border(Colour::rgb(100, 0, 0)));
        assert!(!p.is_border(Colour::WHITE));
    }

    #[test]
    fn test_matches_is_strict() {
        let p = FillPolicy::default();
        let white = Colour::WHITE;

        assert!(p.matches(white, Colour::new(206, 206, 206, 206)));
        assert!(!p.matches(white, Colour::new(205, 255, 255, 255)));
        assert!(!p.matches(white, white.with_alpha(205)));
        assert!(p.matches(Colour::BLACK, Colour::rgb(49, 49, 49)));
    }

    #[test]
    fn test_matches_symmetric() {
        let p = FillPolicy::default();
        let a = Colour::rgb(10, 200, 30);
        let b = Colour::rgb(59, 160, 0);
        assert_eq!(p.matches(a, b), p.matches(b, a));
    }

    #[test]
    fn test_zero_tolerance_matches_nothing() {
        let p = FillPolicy {
            tolerance: 0,
            ..Default::default()
        };
        assert!(!p.matches(Colour::WHITE, Colour::WHITE));
        assert!(matches!(p.validate(), Err(FillError::InvalidPolicy { .. })));
        assert!(FillPolicy::default().validate().is_ok());
    }
}
