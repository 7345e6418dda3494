//! Integration tests for the conversion pipeline.
//!
//! Tests that rasterize real PDF bytes are skip-gated on a pdfium library
//! being present (see `common::skip_no_pdfium`). Rejection-path tests run
//! everywhere, because the validator fires before any pdfium work.

mod common;

use pdfthumb::{convert, convert_sync, Upload, MAX_UPLOAD_BYTES};

fn pdf_upload(bytes: Vec<u8>) -> Upload {
    Upload {
        bytes,
        content_type: Some("application/pdf".to_string()),
    }
}

// ── Rejection paths (no pdfium needed) ───────────────────────────────────────

#[tokio::test]
async fn declared_non_pdf_is_rejected_without_parsing() {
    // The bytes are a perfectly valid PDF; the declared type alone decides.
    let upload = Upload {
        bytes: common::build_pdf(&[(612.0, 792.0)]),
        content_type: Some("text/plain".to_string()),
    };
    let err = convert(upload, false).await.unwrap_err();
    assert_eq!(err.kind(), "invalid_file_type");
}

#[tokio::test]
async fn zero_byte_upload_is_empty_file() {
    let err = convert(pdf_upload(Vec::new()), false).await.unwrap_err();
    assert_eq!(err.kind(), "empty_file");
}

#[tokio::test]
async fn upload_one_byte_over_ceiling_is_file_too_large() {
    let mut bytes = vec![b' '; MAX_UPLOAD_BYTES + 1];
    bytes[..5].copy_from_slice(b"%PDF-");
    let err = convert(pdf_upload(bytes), false).await.unwrap_err();
    assert_eq!(err.kind(), "file_too_large");
}

#[test]
fn convert_sync_classifies_like_convert() {
    let upload = Upload {
        bytes: b"anything".to_vec(),
        content_type: Some("image/png".to_string()),
    };
    let err = convert_sync(upload, true).unwrap_err();
    assert_eq!(err.kind(), "invalid_file_type");
}

// ── Parse-stage classification (pdfium required) ─────────────────────────────

#[tokio::test]
async fn garbage_bytes_are_corrupt_pdf() {
    if common::skip_no_pdfium() {
        return;
    }
    let bytes = b"%PDF-1.7 this is not actually a pdf container".to_vec();
    let err = convert(pdf_upload(bytes), false).await.unwrap_err();
    assert_eq!(err.kind(), "corrupt_pdf");
}

#[tokio::test]
async fn zero_page_document_is_empty_document() {
    if common::skip_no_pdfium() {
        return;
    }
    let err = convert(pdf_upload(common::build_pdf(&[])), false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "empty_document");
}

#[tokio::test]
async fn pathological_page_size_is_resource_exhausted() {
    if common::skip_no_pdfium() {
        return;
    }
    // 200×200 inches → 30000×30000 px at 150 DPI, far over the pixel budget.
    let bytes = common::build_pdf(&[(14_400.0, 14_400.0)]);
    let err = convert(pdf_upload(bytes), false).await.unwrap_err();
    assert_eq!(err.kind(), "resource_exhausted");
}

// ── Successful conversions (pdfium required) ─────────────────────────────────

#[tokio::test]
async fn letter_page_renders_at_contract_dimensions() {
    if common::skip_no_pdfium() {
        return;
    }
    let bytes = common::build_pdf(&[(612.0, 792.0)]);
    let png = convert(pdf_upload(bytes), false).await.expect("convert");

    let decoded = image::load_from_memory(&png).expect("valid PNG");
    assert_eq!((decoded.width(), decoded.height()), (1275, 1650));
}

#[tokio::test]
async fn optimized_letter_page_is_scaled_to_60_percent() {
    if common::skip_no_pdfium() {
        return;
    }
    let bytes = common::build_pdf(&[(612.0, 792.0)]);
    let plain = convert(pdf_upload(bytes.clone()), false)
        .await
        .expect("convert");
    let optimized = convert(pdf_upload(bytes), true).await.expect("convert");

    let decoded = image::load_from_memory(&optimized).expect("valid PNG");
    assert_eq!((decoded.width(), decoded.height()), (765, 990));
    assert!(
        optimized.len() <= plain.len(),
        "optimized {} bytes > plain {} bytes",
        optimized.len(),
        plain.len()
    );
}

#[tokio::test]
async fn conversion_is_idempotent() {
    if common::skip_no_pdfium() {
        return;
    }
    let bytes = common::build_pdf(&[(612.0, 792.0)]);
    let first = convert(pdf_upload(bytes.clone()), true)
        .await
        .expect("convert");
    let second = convert(pdf_upload(bytes), true).await.expect("convert");
    assert_eq!(first, second, "same input + flag must be byte-identical");
}

#[tokio::test]
async fn multi_page_document_renders_first_page_only() {
    if common::skip_no_pdfium() {
        return;
    }
    // Page 2 has a very different size; the output must match page 1.
    let bytes = common::build_pdf(&[(612.0, 792.0), (200.0, 200.0)]);
    let png = convert(pdf_upload(bytes), false).await.expect("convert");

    let decoded = image::load_from_memory(&png).expect("valid PNG");
    assert_eq!((decoded.width(), decoded.height()), (1275, 1650));
}

#[tokio::test]
async fn repeated_conversions_share_no_state() {
    if common::skip_no_pdfium() {
        return;
    }
    // Each request builds and tears down its own pipeline; interleaving
    // sizes and flags must not bleed between runs.
    let letter = common::build_pdf(&[(612.0, 792.0)]);
    let square = common::build_pdf(&[(200.0, 200.0)]);

    for _ in 0..3 {
        let a = convert(pdf_upload(letter.clone()), false)
            .await
            .expect("convert");
        let b = convert(pdf_upload(square.clone()), true)
            .await
            .expect("convert");

        let a = image::load_from_memory(&a).expect("valid PNG");
        let b = image::load_from_memory(&b).expect("valid PNG");
        assert_eq!((a.width(), a.height()), (1275, 1650));
        // 200 pt → round(416.67) = 417 px; 417 × 0.6 → 250.
        assert_eq!((b.width(), b.height()), (250, 250));
    }
}
