//! Core domain types for inkfill.
//!
//! - `Colour` - RGBA colour values and `#RRGGBB` parsing
//! - `Point` - pixel coordinates in buffer space

mod colour;
mod point;

pub use colour::Colour;
pub use point::Point;
