//! inkfill - Border-aware flood fill for line-art colouring
//!
//! A library for filling enclosed regions of an RGBA pixel buffer while
//! leaving dark outline strokes intact, plus the CLI host that drives it
//! against image files.

pub mod buffer;
pub mod cli;
pub mod config;
pub mod error;
pub mod fill;
pub mod output;
pub mod raster;
pub mod types;
pub mod viewport;

pub use buffer::PixelBuffer;
pub use config::{Config, CONFIG_FILENAME};
pub use error::{FillError, Result};
pub use fill::{fill, fill_region, fill_with_policy, probe, FillOutcome, FillPolicy, RegionReport};
pub use types::{Colour, Point};
pub use viewport::{Click, DisplaySize, Viewport};
