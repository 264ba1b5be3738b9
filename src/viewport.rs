//! Display-to-buffer coordinate mapping.
//!
//! A canvas is usually shown at a different size than its native
//! resolution. Clicks arrive in display space and must be scaled into
//! buffer space before they can seed a fill.

use std::str::FromStr;

use crate::error::{FillError, Result};
use crate::types::Point;

/// A click position in display space, written `X,Y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    pub x: f64,
    pub y: f64,
}

impl FromStr for Click {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = parse_pair(s, ',').ok_or_else(|| FillError::Parse {
            message: format!("Invalid position: {}", s),
            help: Some("Use X,Y, e.g. 120,48 or 60.5,24".to_string()),
        })?;
        Ok(Self { x, y })
    }
}

/// The size a canvas is rendered at, written `WxH`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl FromStr for DisplaySize {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = parse_pair(s, 'x').ok_or_else(|| FillError::Parse {
            message: format!("Invalid display size: {}", s),
            help: Some("Use WxH, e.g. 512x512".to_string()),
        })?;
        Ok(Self { width, height })
    }
}

fn parse_pair(s: &str, sep: char) -> Option<(f64, f64)> {
    let (a, b) = s.split_once(sep)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

/// Maps points on a rendered canvas to pixels in its buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    display_width: f64,
    display_height: f64,
    buffer_width: u32,
    buffer_height: u32,
}

impl Viewport {
    /// Create a mapping from a display size to a buffer size.
    pub fn new(
        display_width: f64,
        display_height: f64,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(display_width) || !valid(display_height) {
            return Err(FillError::InvalidDimensions {
                message: format!(
                    "display size {}x{} is not positive",
                    display_width, display_height
                ),
                help: None,
            });
        }
        if buffer_width == 0 || buffer_height == 0 {
            return Err(FillError::InvalidDimensions {
                message: format!("buffer size {}x{} has no pixels", buffer_width, buffer_height),
                help: None,
            });
        }

        Ok(Self {
            display_width,
            display_height,
            buffer_width,
            buffer_height,
        })
    }

    /// Mapping for a canvas rendered at `display`.
    pub fn for_display(
        display: DisplaySize,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Result<Self> {
        Self::new(display.width, display.height, buffer_width, buffer_height)
    }

    /// Identity mapping for a buffer shown at native size.
    pub fn native(width: u32, height: u32) -> Result<Self> {
        Self::new(f64::from(width), f64::from(height), width, height)
    }

    /// Horizontal and vertical scale factors (buffer pixels per display unit).
    pub fn scale(&self) -> (f64, f64) {
        (
            f64::from(self.buffer_width) / self.display_width,
            f64::from(self.buffer_height) / self.display_height,
        )
    }

    /// Translate a display-space point, relative to the canvas origin, to a
    /// buffer pixel. Fractional results are floored.
    ///
    /// Points that land outside the buffer are rejected, not clamped.
    /// NaN and infinite positions are parse errors.
    pub fn to_buffer(&self, x: f64, y: f64) -> Result<Point> {
        if !x.is_finite() || !y.is_finite() {
            return Err(FillError::Parse {
                message: format!("Position {},{} is not a finite number", x, y),
                help: None,
            });
        }

        let (sx, sy) = self.scale();
        let bx = (x * sx).floor();
        let by = (y * sy).floor();

        let inside = bx >= 0.0
            && by >= 0.0
            && bx < f64::from(self.buffer_width)
            && by < f64::from(self.buffer_height);
        if !inside {
            return Err(FillError::SeedOutOfBounds {
                x: bx as i64,
                y: by as i64,
                width: self.buffer_width,
                height: self.buffer_height,
            });
        }

        Ok(Point::new(bx as u32, by as u32))
    }

    /// Translate a click.
    pub fn locate(&self, click: Click) -> Result<Point> {
        self.to_buffer(click.x, click.y)
    }
}
