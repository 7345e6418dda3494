//! HTTP transport shell around the conversion pipeline.
//!
//! The router is a thin pass-through: handlers buffer the multipart upload,
//! call [`crate::convert`], and map the result to a response. All decision
//! logic lives in the pipeline; the only transport-side policy is the
//! error-kind → status table, the permissive CORS layer, and the body limit
//! (the upload ceiling plus framing slack, so the pipeline's own size check
//! is the one that classifies oversized uploads).

use crate::config::{
    BODY_LIMIT_SLACK, MAX_UPLOAD_BYTES, OPTIMIZE_SCALE, RENDER_DPI,
};
use crate::convert::{convert, Upload};
use crate::error::ThumbnailError;
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Build the application router with all routes and middleware configured.
///
/// # Routes
/// - `POST /pdf`          — convert the first page of an uploaded PDF to PNG
/// - `GET  /health`       — liveness signal, independent of the pipeline
/// - `GET  /capabilities` — static description of limits and formats
/// - `GET  /`             — service name and version
pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/pdf", post(convert_pdf))
        .route("/health", get(health))
        .route("/capabilities", get(capabilities))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + BODY_LIMIT_SLACK))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable error kind.
    pub kind: String,
    /// Human-readable message.
    pub error: String,
}

/// Query parameters accepted by the conversion endpoint.
///
/// `optimize` is parsed leniently (`true`/`1`/`yes`/`on`) because the flag
/// is best-effort by contract; anything else means "off".
#[derive(Debug, Default, Deserialize)]
struct ConvertParams {
    optimize: Option<String>,
}

async fn convert_pdf(
    Query(params): Query<ConvertParams>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut upload: Option<Upload> = None;
    let mut optimize = params.optimize.as_deref().map(parse_flag).unwrap_or(false);

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let content_type = field.content_type().map(|s| s.to_string());
                let bytes = field.bytes().await?;
                upload = Some(Upload {
                    bytes: bytes.to_vec(),
                    content_type,
                });
            }
            Some("optimize") => {
                optimize = parse_flag(&field.text().await?);
            }
            // Unknown parts are ignored, matching the permissive multipart
            // handling clients expect from form endpoints.
            _ => {}
        }
    }

    // No file part means no upload bytes were received.
    let upload = upload.ok_or(ThumbnailError::EmptyFile)?;

    let png = convert(upload, optimize).await?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=\"thumbnail.png\"",
            ),
        ],
        png,
    )
        .into_response())
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "PDF Thumbnail Service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pdf-thumbnail",
    }))
}

/// Static description of what the service accepts and produces. Purely
/// informational; never reflects runtime state.
async fn capabilities() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "pdf-thumbnail",
        "version": env!("CARGO_PKG_VERSION"),
        "input": {
            "format": "application/pdf",
            "max_upload_bytes": MAX_UPLOAD_BYTES,
        },
        "output": {
            "format": "image/png",
            "dpi": RENDER_DPI,
            "page": 1,
        },
        "optimize": {
            "scale": OPTIMIZE_SCALE,
        },
    }))
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Transport-level error wrapper: either a classified pipeline error or a
/// multipart framing failure.
#[derive(Debug)]
pub enum ApiError {
    Pipeline(ThumbnailError),
    Multipart(MultipartError),
}

impl From<ThumbnailError> for ApiError {
    fn from(err: ThumbnailError) -> Self {
        ApiError::Pipeline(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Multipart(err)
    }
}

/// HTTP status for each classified error kind. Part of the contract; see
/// the capability docs.
fn status_for(err: &ThumbnailError) -> StatusCode {
    match err {
        ThumbnailError::InvalidFileType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ThumbnailError::EmptyFile => StatusCode::BAD_REQUEST,
        ThumbnailError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        ThumbnailError::CorruptPdf { .. } => StatusCode::BAD_REQUEST,
        ThumbnailError::EmptyDocument => StatusCode::BAD_REQUEST,
        ThumbnailError::RenderFailure { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ThumbnailError::ResourceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
        ThumbnailError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Pipeline(err) => {
                let status = status_for(&err);
                // Internal detail stays in the logs; the caller only ever
                // sees the generic message.
                let message = if let ThumbnailError::Internal(ref detail) = err {
                    error!(detail, "internal error while processing PDF");
                    "internal server error while processing PDF".to_string()
                } else {
                    err.to_string()
                };
                let body = ErrorBody {
                    kind: err.kind().to_string(),
                    error: message,
                };
                (status, Json(body)).into_response()
            }
            ApiError::Multipart(err) => {
                // A body that blows even the slack-padded limit is still an
                // oversized upload as far as the contract is concerned.
                let status = err.status();
                let kind = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "file_too_large"
                } else {
                    "bad_request"
                };
                let body = ErrorBody {
                    kind: kind.to_string(),
                    error: err.body_text(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
