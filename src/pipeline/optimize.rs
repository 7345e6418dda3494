//! Optional downscaling and PNG encoding of the rendered page.
//!
//! When the caller asks for optimization, the raster is resized to 60% of
//! its linear dimensions with Lanczos3 (a quality-preserving filter; nearest
//! neighbour would alias rendered text badly) and encoded with the PNG
//! encoder tuned for size over speed. Without optimization the raster is
//! encoded as-is at the default compression level.
//!
//! Optimization is best-effort size reduction, never a correctness
//! requirement: a raster too small to scale (either axis under 2 px) is
//! encoded at its original size instead of failing.

use crate::config::OPTIMIZE_SCALE;
use crate::error::ThumbnailError;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbImage};
use std::io::Cursor;
use tracing::debug;

/// Scaled dimensions for an optimized raster: `round(dim × 0.6)` per axis.
///
/// Returns `None` when the source is too small to scale, in which case the
/// caller encodes at original size.
pub fn optimized_dimensions(width: u32, height: u32) -> Option<(u32, u32)> {
    if width < 2 || height < 2 {
        return None;
    }
    Some((
        (width as f64 * OPTIMIZE_SCALE).round() as u32,
        (height as f64 * OPTIMIZE_SCALE).round() as u32,
    ))
}

/// Encode the raster as PNG, applying the optimization policy.
pub fn encode_png(image: RgbImage, optimize: bool) -> Result<Vec<u8>, ThumbnailError> {
    let image = if optimize {
        match optimized_dimensions(image.width(), image.height()) {
            Some((w, h)) => {
                let resized = imageops::resize(&image, w, h, FilterType::Lanczos3);
                debug!(width = w, height = h, "downscaled raster for optimization");
                resized
            }
            None => {
                debug!("raster too small to scale; encoding at original size");
                image
            }
        }
    } else {
        image
    };

    let mut buf = Vec::new();
    if optimize {
        let encoder = PngEncoder::new_with_quality(
            Cursor::new(&mut buf),
            CompressionType::Best,
            PngFilterType::Adaptive,
        );
        encoder
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| ThumbnailError::Internal(format!("PNG encoding failed: {e}")))?;
    } else {
        image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| ThumbnailError::Internal(format!("PNG encoding failed: {e}")))?;
    }

    debug!(bytes = buf.len(), optimize, "encoded PNG");
    Ok(buf)
}
