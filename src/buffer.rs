//! Borrowed view over a flat RGBA pixel buffer.
//!
//! The buffer is row-major with four bytes per pixel. A `PixelBuffer` holds
//! an exclusive borrow for as long as it lives, so only one writer can touch
//! the pixels at a time.

use crate::error::{FillError, Result};
use crate::types::{Colour, Point};

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// A mutable RGBA pixel grid over caller-owned memory.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as a `width` x `height` grid.
    ///
    /// Fails unless both dimensions are non-zero and `data` holds exactly
    /// `width * height * 4` bytes.
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FillError::InvalidDimensions {
                message: format!("{}x{} has no pixels", width, height),
                help: None,
            });
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS));
        if expected != Some(data.len()) {
            return Err(FillError::InvalidDimensions {
                message: format!(
                    "buffer holds {} bytes, {}x{} RGBA needs {}",
                    data.len(),
                    width,
                    height,
                    expected.map_or_else(|| "more than usize::MAX".to_string(), |n| n.to_string())
                ),
                help: Some("Width and height must match the buffer's actual layout".to_string()),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Always false: zero-sized buffers are rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a signed coordinate lies inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Validate a signed coordinate and convert it to a `Point`.
    pub fn point(&self, x: i64, y: i64) -> Result<Point> {
        if !self.contains(x, y) {
            return Err(FillError::SeedOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(Point::new(x as u32, y as u32))
    }

    /// Pixel index (not byte offset) of an in-bounds point.
    pub fn index(&self, p: Point) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    /// Read the colour at an in-bounds point.
    pub fn get(&self, p: Point) -> Colour {
        let i = self.index(p) * CHANNELS;
        Colour::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Write a colour at an in-bounds point. All four channels are written.
    pub fn set(&mut self, p: Point, colour: Colour) {
        let i = self.index(p) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&colour.to_rgba());
    }

    /// Composite every pixel over an opaque background.
    ///
    /// Afterwards every pixel is opaque, so transparent regions read as the
    /// background colour when filling.
    pub fn flatten_onto(&mut self, background: Colour) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            let c = Colour::new(px[0], px[1], px[2], px[3]).over(background);
            px.copy_from_slice(&c.to_rgba());
        }
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }
}
