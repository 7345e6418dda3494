//! Top-level conversion entry points.
//!
//! [`convert`] is the whole pipeline as a pure function: `(upload bytes,
//! optimize flag) → (PNG bytes | classified error)`. It holds no state
//! between calls and touches no disk — the upload, the parsed document, the
//! pixel buffer, and the output all live in memory for the duration of one
//! call and are released on every exit path (the pdfium handles are
//! stack-scoped inside the blocking closure, so early rejections and
//! rendering failures drop them the same way success does).
//!
//! ## Why spawn_blocking?
//!
//! pdfium is a C++ library with thread-local state; parsing and rasterizing
//! are CPU-bound and must not run on the async workers.
//! `tokio::task::spawn_blocking` moves that work onto the blocking pool,
//! exactly as the renderer would for any other CPU-heavy stage. The cheap
//! upload checks (type/size) run inline first, so a mistyped or oversized
//! upload never costs a blocking-pool slot.

use crate::error::ThumbnailError;
use crate::pipeline::{optimize, render, validate};
use pdfium_render::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// One buffered upload: the raw bytes plus the client-declared media type.
///
/// Discarded as soon as the conversion returns; never written anywhere.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Fully buffered request body.
    pub bytes: Vec<u8>,
    /// Media type the client declared for the file part, if any.
    pub content_type: Option<String>,
}

/// Convert the first page of an uploaded PDF to an encoded PNG.
///
/// # Errors
/// Returns one of the classified [`ThumbnailError`] kinds; see the error
/// module for the full taxonomy. No failure is retried.
pub async fn convert(upload: Upload, optimize: bool) -> Result<Vec<u8>, ThumbnailError> {
    let start = Instant::now();

    // Pure checks first: no allocation beyond the already-buffered body,
    // and no parse attempt for uploads that fail them.
    validate::validate_upload(&upload)?;

    let png = tokio::task::spawn_blocking(move || convert_blocking(&upload.bytes, optimize))
        .await
        .map_err(|e| ThumbnailError::Internal(format!("conversion task panicked: {e}")))??;

    info!(
        bytes = png.len(),
        optimize,
        duration_ms = start.elapsed().as_millis() as u64,
        "conversion complete"
    );
    Ok(png)
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(upload: Upload, optimize: bool) -> Result<Vec<u8>, ThumbnailError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ThumbnailError::Internal(format!("failed to create tokio runtime: {e}")))?
        .block_on(convert(upload, optimize))
}

/// Blocking half of the pipeline: parse → render → optimize → encode.
fn convert_blocking(bytes: &[u8], optimize_flag: bool) -> Result<Vec<u8>, ThumbnailError> {
    let pdfium = bind_pdfium()?;

    let document = validate::open_document(&pdfium, bytes)?;
    let raster = render::render_first_page(&document)?;
    // The document (and with it pdfium's page resources) is no longer
    // needed once the pixel buffer exists.
    drop(document);

    debug!(
        width = raster.width(),
        height = raster.height(),
        "raster ready for encoding"
    );
    optimize::encode_png(raster, optimize_flag)
}

/// Bind to a pdfium library: one colocated with the executable first, then
/// the system-wide installation.
fn bind_pdfium() -> Result<Pdfium, ThumbnailError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| ThumbnailError::Internal(format!("failed to bind pdfium: {e:?}")))
}
