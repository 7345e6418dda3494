//! Shared helpers for the integration tests.
//!
//! [`build_pdf`] assembles a minimal but well-formed PDF entirely in memory,
//! with a correct cross-reference table, so the tests never depend on fixture
//! files. Tests that actually rasterize are skip-gated on a pdfium library
//! being present: they print SKIP and pass on hosts without it, while the
//! pure validation/dimension/encoding tests always run.

#![allow(dead_code)]

use pdfium_render::prelude::*;

/// Build a one-or-more-page PDF with the given page sizes in points.
///
/// Each page carries a small filled-rectangle content stream so rendered
/// output is not a uniform white field. `build_pdf(&[])` produces a valid
/// container whose page tree reports zero pages.
pub fn build_pdf(pages: &[(f32, f32)]) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 3 + 2 * i))
        .collect();

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));

    for (i, (w, h)) in pages.iter().enumerate() {
        let content = "0.8 0.2 0.2 rg 20 20 200 100 re f";
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {w} {h}] /Contents {} 0 R >>",
            4 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    assemble(&objects)
}

/// Serialize numbered objects, the xref table, and the trailer.
fn assemble(objects: &[String]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (i, obj) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, obj).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}

/// True when a pdfium library can be bound on this host.
pub fn pdfium_available() -> bool {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .is_ok()
}

/// Print a SKIP notice and return `true` when pdfium is unavailable.
///
/// Usage: `if common::skip_no_pdfium() { return; }`
pub fn skip_no_pdfium() -> bool {
    if pdfium_available() {
        false
    } else {
        println!("SKIP — no pdfium library available on this host");
        true
    }
}
