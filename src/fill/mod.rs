//! Region fill engine.
//!
//! Flood-fills the 4-connected region around a seed pixel with a new colour,
//! leaving dark outline strokes untouched. The engine keeps no state between
//! calls: each call borrows the caller's buffer, validates everything up
//! front, and either rejects the call or runs to completion.
//!
//! ```
//! use inkfill::fill::{fill, FillOutcome};
//!
//! let mut pixels = [255u8; 4 * 4 * 4];
//! let outcome = fill(&mut pixels, 4, 4, 0, 0, "#FF0000").unwrap();
//!
//! assert_eq!(outcome, FillOutcome::Filled { pixels: 16 });
//! assert_eq!(&pixels[..4], &[255, 0, 0, 255]);
//! ```

mod engine;
mod policy;

pub use engine::{paint_region, scan_region, Bounds, Region};
pub use policy::{FillPolicy, DEFAULT_DARK_CHANNEL, DEFAULT_OPAQUE_ALPHA, DEFAULT_TOLERANCE};

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::types::{Colour, Point};

/// What a fill call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The region was repainted.
    Filled { pixels: usize },

    /// The seed sits on an outline stroke; nothing was written.
    BorderLocked,
}

impl FillOutcome {
    /// Number of pixels written (zero when border-locked).
    pub fn pixels(&self) -> usize {
        match self {
            FillOutcome::Filled { pixels } => *pixels,
            FillOutcome::BorderLocked => 0,
        }
    }

    pub fn is_border_locked(&self) -> bool {
        matches!(self, FillOutcome::BorderLocked)
    }
}

/// Fill the region around (`seed_x`, `seed_y`) in a raw RGBA buffer with
/// the default thresholds.
///
/// `colour` must be `#RRGGBB`. Dimensions, seed and colour are all checked
/// before any pixel is touched.
pub fn fill(
    data: &mut [u8],
    width: u32,
    height: u32,
    seed_x: i64,
    seed_y: i64,
    colour: &str,
) -> Result<FillOutcome> {
    fill_with_policy(data, width, height, seed_x, seed_y, colour, &FillPolicy::default())
}

/// Like [`fill`], with explicit thresholds. The policy is validated along
/// with the other inputs.
pub fn fill_with_policy(
    data: &mut [u8],
    width: u32,
    height: u32,
    seed_x: i64,
    seed_y: i64,
    colour: &str,
    policy: &FillPolicy,
) -> Result<FillOutcome> {
    policy.validate()?;
    let mut buffer = PixelBuffer::new(data, width, height)?;
    let seed = buffer.point(seed_x, seed_y)?;
    let colour = Colour::from_hex(colour)?;

    Ok(fill_region(&mut buffer, seed, colour, policy))
}

/// Fill on an already validated buffer and seed.
pub fn fill_region(
    buffer: &mut PixelBuffer<'_>,
    seed: Point,
    colour: Colour,
    policy: &FillPolicy,
) -> FillOutcome {
    let seed_colour = buffer.get(seed);
    if policy.is_border(seed_colour) {
        debug!("seed {} is border {}, skipping", seed, seed_colour);
        return FillOutcome::BorderLocked;
    }

    let region = scan_region(buffer, seed, policy);
    paint_region(buffer, &region, colour);

    debug!(
        "filled {} pixel(s) from {} ({} -> {})",
        region.len(),
        seed,
        seed_colour,
        colour
    );

    FillOutcome::Filled {
        pixels: region.len(),
    }
}

/// Summary of the region a click would fill, without writing anything.
#[derive(Debug, Clone)]
pub struct RegionReport {
    pub seed: Point,
    pub seed_colour: Colour,
    pub border_locked: bool,
    pub pixels: usize,
    pub bounds: Option<Bounds>,
}

/// Inspect the region around `seed` under `policy`.
pub fn probe(buffer: &PixelBuffer<'_>, seed: Point, policy: &FillPolicy) -> RegionReport {
    let seed_colour = buffer.get(seed);
    if policy.is_border(seed_colour) {
        return RegionReport {
            seed,
            seed_colour,
            border_locked: true,
            pixels: 0,
            bounds: None,
        };
    }

    let region = scan_region(buffer, seed, policy);
    RegionReport {
        seed,
        seed_colour,
        border_locked: false,
        pixels: region.len(),
        bounds: region.bounds(),
    }
}
