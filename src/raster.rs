//! Image file boundary for the CLI host.
//!
//! Decodes images into flat RGBA canvases and writes them back out. The
//! fill engine itself never touches files; this is where a host prepares
//! the buffer it hands over.

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::buffer::PixelBuffer;
use crate::error::{FillError, Result};
use crate::types::Colour;

/// Load an image as RGBA8, flattened onto an opaque background.
///
/// Transparent areas become `background`, so they fill like the rest of
/// the page instead of being matched against transparent black.
pub fn load_canvas(path: &Path, background: Colour) -> Result<RgbaImage> {
    let mut img = image::open(path)
        .map_err(|e| FillError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    let mut buffer = PixelBuffer::new(&mut img, width, height)?;
    buffer.flatten_onto(background);

    Ok(img)
}

/// Borrow an image's pixels as a fill buffer.
pub fn as_buffer(img: &mut RgbaImage) -> Result<PixelBuffer<'_>> {
    let (width, height) = img.dimensions();
    PixelBuffer::new(img, width, height)
}

/// Write a canvas to disk. The format follows the file extension.
///
/// JPEG has no alpha channel, so `.jpg`/`.jpeg` output drops it. Canvases
/// from [`load_canvas`] are already opaque, so nothing visible is lost.
pub fn write_image(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FillError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let saved = if is_jpeg(path) {
        DynamicImage::ImageRgba8(img.clone()).to_rgb8().save(path)
    } else {
        img.save(path)
    };

    saved.map_err(|e| FillError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}
