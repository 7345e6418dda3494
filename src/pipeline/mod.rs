//! Pipeline stages for PDF-to-thumbnail conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap
//! implementations (e.g. switch rendering backend) without touching other
//! stages.
//!
//! ## Data Flow
//!
//! ```text
//! upload ──▶ validate ──▶ render ──▶ optimize
//! (bytes)    (type/size/  (pdfium,   (0.6× resize +
//!             structure)   150 DPI)   PNG encode)
//! ```
//!
//! 1. [`validate`] — classify the raw upload: media type, size ceiling,
//!    container parse, page count. First failing check wins.
//! 2. [`render`]   — rasterize page 0 into an RGB pixel buffer; runs inside
//!    `spawn_blocking` because pdfium is not async-safe.
//! 3. [`optimize`] — optionally downscale, then PNG-encode the buffer.

pub mod optimize;
pub mod render;
pub mod validate;
