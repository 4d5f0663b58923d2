//! Request path handling
//!
//! Percent-decoding and lexical normalisation of URL paths onto the served
//! root. Normalisation never lets a path climb above the root.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Path, PathBuf};

// Unreserved characters plus `/` stay readable in listing links
const HREF_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Decode `%XX` escapes. Invalid escapes are kept literally and invalid
/// UTF-8 is replaced.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Encode a path for use inside an `href`
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, HREF_ENCODE_SET).to_string()
}

/// Normalised path segments: empty and `.` segments dropped, `..` pops the
/// previous segment and is ignored at the root. Segments holding a NUL byte
/// are dropped.
pub fn normalize_segments(decoded: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            // `\` only separates components on Windows
            s if s.contains('\0') || (cfg!(windows) && s.contains('\\')) => {}
            s => segments.push(s),
        }
    }
    segments
}

/// Map a raw (still percent-encoded) URL path onto a location under `root`
pub fn resolve(root: &Path, raw_path: &str) -> PathBuf {
    let decoded = percent_decode(raw_path);
    let mut target = root.to_path_buf();
    for segment in normalize_segments(&decoded) {
        target.push(segment);
    }
    target
}
