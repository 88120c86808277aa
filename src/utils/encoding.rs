//! Text reading with encoding fallback
//!
//! Ingestion wants file content as text or nothing: UTF-8 fast path,
//! chardetng-guided decode for legacy encodings, and a binary heuristic so
//! image-like content that slipped past the extension filter is dropped
//! rather than smuggled in as mojibake.

use chardetng::EncodingDetector;
use std::path::Path;

const BINARY_SAMPLE_BYTES: usize = 8192;

/// Read a file as text, or `None` when it cannot be decoded.
///
/// Strategy:
/// 1. Reject content that looks binary (null bytes or a low printable
///    ratio in the leading sample).
/// 2. Strict UTF-8 decode (covers almost all source files).
/// 3. chardetng detection + encoding_rs decode; a decode that still needed
///    replacement characters counts as failure.
pub fn read_file_text(path: &Path) -> Option<String> {
    let bytes = std::fs::read(path).ok()?;
    decode_text(&bytes)
}

/// Decode raw bytes as text, or `None` when they are not text.
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return Some(String::new());
    }
    if looks_binary(bytes) {
        return None;
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return Some(s.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        None
    } else {
        Some(decoded.into_owned())
    }
}

/// Null bytes or a sub-70% printable-ASCII ratio in the leading sample
/// mark the content as binary.
fn looks_binary(bytes: &[u8]) -> bool {
    let sample = &bytes[..bytes.len().min(BINARY_SAMPLE_BYTES)];
    if sample.contains(&0) {
        return true;
    }
    let printable = sample
        .iter()
        .filter(|&&b| (32..=126).contains(&b) || b == b'\t' || b == b'\n' || b == b'\r' || b >= 128)
        .count();
    (printable as f64 / sample.len() as f64) < 0.70
}
