//! # pdfthumb
//!
//! A stateless HTTP service that converts the first page of an uploaded PDF
//! into a PNG thumbnail, optionally downscaled and recompressed.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF upload
//!  │
//!  ├─ 1. Validate  media type, size ceiling, container parse, page count
//!  ├─ 2. Render    rasterize page 0 at 150 DPI via pdfium (spawn_blocking)
//!  ├─ 3. Optimize  optional 0.6× Lanczos3 resize + max-compression PNG
//!  └─ 4. Respond   image/png body, or a classified JSON error
//! ```
//!
//! Nothing is ever written to disk: the upload, the parsed document, the
//! pixel buffer, and the encoded output live in memory for the duration of
//! one request and are released on every exit path. Failures are always one
//! of the eight [`ThumbnailError`] kinds; the transport maps each to a
//! fixed HTTP status and stable `kind` string.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdfthumb::{convert, Upload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let upload = Upload {
//!         bytes: std::fs::read("document.pdf")?,
//!         content_type: Some("application/pdf".to_string()),
//!     };
//!     let png = convert(upload, /* optimize */ true).await?;
//!     std::fs::write("thumbnail.png", png)?;
//!     Ok(())
//! }
//! ```
//!
//! Or run the server binary and POST a multipart upload:
//!
//! ```text
//! pdfthumbd --port 3000
//! curl -F file=@document.pdf "http://localhost:3000/pdf?optimize=true" -o thumb.png
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;
pub mod server;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ServerConfig, MAX_UPLOAD_BYTES, OPTIMIZE_SCALE, RENDER_DPI};
pub use convert::{convert, convert_sync, Upload};
pub use error::ThumbnailError;
pub use server::app;
