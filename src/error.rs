//! Error types for the pdfthumb pipeline.
//!
//! Every failure the pipeline can produce is one of the variants below — a
//! closed taxonomy rather than a generic error signal. The transport layer
//! maps each variant to a fixed HTTP status and a stable machine-readable
//! `kind` string, so clients get a deterministic response for every failure
//! mode. Nothing outside this enum ever crosses the HTTP boundary; unexpected
//! faults are collapsed into [`ThumbnailError::Internal`] with the full
//! detail kept in server-side logs only.

use crate::config::{MAX_RENDER_PIXELS, MAX_UPLOAD_BYTES};
use thiserror::Error;

/// All classified failures of the conversion pipeline.
///
/// Ordered the way the pipeline encounters them: upload checks first,
/// container parse next, rasterization last.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    // ── Upload errors ─────────────────────────────────────────────────────
    /// The declared media type (or, absent one, the magic bytes) does not
    /// indicate a PDF. Rejected before any parsing is attempted.
    #[error("upload is not a PDF (declared media type: '{declared}')")]
    InvalidFileType { declared: String },

    /// The upload contained zero bytes.
    #[error("upload is empty")]
    EmptyFile,

    /// The upload exceeds the fixed size ceiling. Rejected without parsing.
    #[error("upload is {size} bytes; the maximum is {max} bytes", max = MAX_UPLOAD_BYTES)]
    FileTooLarge { size: usize },

    // ── Document errors ───────────────────────────────────────────────────
    /// The bytes do not parse as a PDF container.
    #[error("invalid or corrupted PDF: {detail}")]
    CorruptPdf { detail: String },

    /// The document parsed but reports zero pages.
    #[error("PDF document has no pages")]
    EmptyDocument,

    // ── Rendering errors ──────────────────────────────────────────────────
    /// Rasterization of the first page failed (pathological content stream,
    /// unsupported filter, ...). Distinct from [`ThumbnailError::CorruptPdf`],
    /// which is a container-level parse failure.
    #[error("failed to rasterize the first page: {detail}")]
    RenderFailure { detail: String },

    /// Rendering the first page would exceed the pixel budget. Fatal for
    /// this request; never retried.
    #[error(
        "rendering would produce {width}x{height} px, exceeding the {budget}-pixel budget",
        budget = MAX_RENDER_PIXELS
    )]
    ResourceExhausted { width: u32, height: u32 },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal fault. The message is logged server-side; the
    /// HTTP response carries only a generic indicator.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ThumbnailError {
    /// Stable machine-readable identifier for this error kind.
    ///
    /// These strings are part of the HTTP contract and must not change.
    pub fn kind(&self) -> &'static str {
        match self {
            ThumbnailError::InvalidFileType { .. } => "invalid_file_type",
            ThumbnailError::EmptyFile => "empty_file",
            ThumbnailError::FileTooLarge { .. } => "file_too_large",
            ThumbnailError::CorruptPdf { .. } => "corrupt_pdf",
            ThumbnailError::EmptyDocument => "empty_document",
            ThumbnailError::RenderFailure { .. } => "render_failure",
            ThumbnailError::ResourceExhausted { .. } => "resource_exhausted",
            ThumbnailError::Internal(_) => "internal_error",
        }
    }
}
