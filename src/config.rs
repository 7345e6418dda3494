//! Service constants and server configuration.
//!
//! The constants in this module are part of the public contract: clients can
//! read them from the `/capabilities` endpoint and rely on them not to drift
//! between deployments. Keeping them in one place also means the validator,
//! renderer, and capability endpoint can never disagree about a limit.

/// Maximum accepted upload size in bytes (10 MiB).
///
/// Uploads larger than this are rejected before any parse attempt.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Rendering resolution in dots per inch.
///
/// PDF pages are described in 72-DPI point space, so the effective scale
/// factor is `150 / 72 ≈ 2.08`. 150 DPI keeps text legible in a preview
/// while bounding pixel-buffer sizes for typical page formats.
pub const RENDER_DPI: u32 = 150;

/// Points per inch in PDF page space.
pub const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Linear scale factor applied when the caller requests optimization.
pub const OPTIMIZE_SCALE: f64 = 0.6;

/// Upper bound on rendered pixels (width × height) for a single page.
///
/// A page can legally declare enormous dimensions — a 200×200 inch page at
/// 150 DPI would need a 30 000 × 30 000 px buffer (~3.4 GiB of RGBA).
/// Requests whose first page exceeds this budget are rejected with
/// `ResourceExhausted` before pdfium allocates anything. 64 M px is roughly
/// 256 MiB of working pixels, comfortably above any sane page format
/// (A0 at 150 DPI is ~35 M px).
pub const MAX_RENDER_PIXELS: u64 = 64_000_000;

/// Extra body-size slack granted to the transport layer on top of
/// [`MAX_UPLOAD_BYTES`], covering multipart boundary/header framing. This
/// lets an upload of exactly `MAX_UPLOAD_BYTES + 1` reach the pipeline and
/// be rejected there with the classified `file_too_large` error.
pub const BODY_LIMIT_SLACK: usize = 64 * 1024;

/// Where the server binds.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address. Default: `0.0.0.0`.
    pub host: String,
    /// Listen port. Default: `3000`.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// The `host:port` string to bind the TCP listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
