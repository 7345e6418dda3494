//! Upload validation: classify a raw upload before any rendering work.
//!
//! Checks run in a fixed order and the first failing check wins:
//!
//! 1. media type (or magic bytes when no type was declared)
//! 2. non-empty and within the size ceiling
//! 3. parses as a PDF container
//! 4. reports at least one page
//!
//! Checks 1–2 are pure functions of the buffered upload and run on the async
//! path, so an oversized or mistyped upload never reaches pdfium. The
//! contract for `FileTooLarge` is "rejected without attempting to parse",
//! and the ordering here is what guarantees it.

use crate::convert::Upload;
use crate::error::ThumbnailError;
use pdfium_render::prelude::*;
use tracing::debug;

/// Magic bytes every PDF container starts with.
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Run the pure upload checks: media type, emptiness, size ceiling.
///
/// A declared media type must start with `application/pdf` (parameters such
/// as `;charset=` are tolerated). When the client declared nothing, the
/// `%PDF` magic stands in for the declaration.
pub fn validate_upload(upload: &Upload) -> Result<(), ThumbnailError> {
    match upload.content_type.as_deref() {
        Some(declared) => {
            if !declared.trim().starts_with("application/pdf") {
                return Err(ThumbnailError::InvalidFileType {
                    declared: declared.to_string(),
                });
            }
        }
        None => {
            if upload.bytes.len() >= PDF_MAGIC.len() && &upload.bytes[..4] != PDF_MAGIC {
                return Err(ThumbnailError::InvalidFileType {
                    declared: "<none>".to_string(),
                });
            }
        }
    }

    if upload.bytes.is_empty() {
        return Err(ThumbnailError::EmptyFile);
    }
    if upload.bytes.len() > crate::config::MAX_UPLOAD_BYTES {
        return Err(ThumbnailError::FileTooLarge {
            size: upload.bytes.len(),
        });
    }

    debug!(
        size = upload.bytes.len(),
        declared = upload.content_type.as_deref().unwrap_or("<none>"),
        "upload accepted for parsing"
    );
    Ok(())
}

/// Open the buffered bytes as a PDF and check the page-count invariant.
///
/// The returned document borrows both the pdfium binding and the upload
/// bytes, so it cannot outlive the request that owns them.
pub fn open_document<'a>(
    pdfium: &'a Pdfium,
    bytes: &'a [u8],
) -> Result<PdfDocument<'a>, ThumbnailError> {
    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| ThumbnailError::CorruptPdf {
            detail: format!("{e:?}"),
        })?;

    let page_count = document.pages().len();
    if page_count == 0 {
        return Err(ThumbnailError::EmptyDocument);
    }
    debug!(page_count, "PDF container opened");

    Ok(document)
}
