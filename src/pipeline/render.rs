//! First-page rasterization: `PdfDocument` → RGB pixel buffer via pdfium.
//!
//! The page's native point-space dimensions are scaled by `150 / 72` and
//! rounded to whole pixels; that arithmetic lives in [`target_dimensions`]
//! so the dimension contract ("612×792 pt → 1275×1650 px") is testable
//! without a pdfium library present.
//!
//! Page sizes are attacker-controlled: a PDF may legally declare a page
//! hundreds of inches wide. [`check_pixel_budget`] rejects such pages before
//! pdfium allocates a bitmap, which is what backs the `ResourceExhausted`
//! error kind.

use crate::config::{MAX_RENDER_PIXELS, PDF_POINTS_PER_INCH, RENDER_DPI};
use crate::error::ThumbnailError;
use image::RgbImage;
use pdfium_render::prelude::*;
use tracing::debug;

/// Pixel dimensions for a page of `width_pt` × `height_pt` points at the
/// fixed rendering resolution: `round(pt × 150 / 72)` per axis.
pub fn target_dimensions(width_pt: f32, height_pt: f32) -> (u32, u32) {
    let scale = RENDER_DPI as f32 / PDF_POINTS_PER_INCH;
    (
        (width_pt * scale).round() as u32,
        (height_pt * scale).round() as u32,
    )
}

/// Reject target dimensions that would blow the pixel budget.
pub fn check_pixel_budget(width: u32, height: u32) -> Result<(), ThumbnailError> {
    if width as u64 * height as u64 > MAX_RENDER_PIXELS {
        return Err(ThumbnailError::ResourceExhausted { width, height });
    }
    Ok(())
}

/// Rasterize page index 0 of an already-validated document.
///
/// Returns an RGB buffer (alpha dropped); the caller owns it and decides
/// whether to downscale before encoding.
pub fn render_first_page(document: &PdfDocument<'_>) -> Result<RgbImage, ThumbnailError> {
    let page = document
        .pages()
        .get(0)
        .map_err(|e| ThumbnailError::RenderFailure {
            detail: format!("{e:?}"),
        })?;

    let (width, height) = target_dimensions(page.width().value, page.height().value);
    if width == 0 || height == 0 {
        return Err(ThumbnailError::RenderFailure {
            detail: format!(
                "page has degenerate dimensions ({} x {} pt)",
                page.width().value,
                page.height().value
            ),
        });
    }
    check_pixel_budget(width, height)?;

    let bitmap =
        page.render(width as i32, height as i32, None)
            .map_err(|e| ThumbnailError::RenderFailure {
                detail: format!("{e:?}"),
            })?;

    let image = bitmap.as_image().to_rgb8();
    debug!(
        width = image.width(),
        height = image.height(),
        "rendered first page"
    );

    Ok(image)
}
