//! `Range` header parsing (single `bytes` range, RFC 9110 §14)

/// Inclusive byte span inside a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub const fn byte_count(self) -> u64 {
        self.end - self.start + 1
    }

    /// Value for the `Content-Range` header
    pub fn content_range(self, total: u64) -> String {
        format!("bytes {}-{}/{total}", self.start, self.end)
    }
}

/// What to do with a request's `Range` header
#[derive(Debug, PartialEq, Eq)]
pub enum RangeOutcome {
    /// Serve only this span (206)
    Partial(ByteRange),
    /// Syntactically valid but outside the file (416)
    Unsatisfiable,
    /// Absent, malformed, multi-range or non-bytes: serve the whole file
    Ignore,
}

/// Resolve a `Range` header against a file of `total` bytes.
///
/// Accepts `bytes=start-end`, `bytes=start-` and `bytes=-suffix`.
pub fn resolve(header: Option<&str>, total: u64) -> RangeOutcome {
    let Some(ranges) = header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
        return RangeOutcome::Ignore;
    };
    if ranges.contains(',') {
        return RangeOutcome::Ignore;
    }
    let Some((first, last)) = ranges.split_once('-') else {
        return RangeOutcome::Ignore;
    };
    let (first, last) = (first.trim(), last.trim());

    if first.is_empty() {
        return suffix(last, total);
    }

    let Ok(start) = first.parse::<u64>() else {
        return RangeOutcome::Ignore;
    };
    let end = if last.is_empty() {
        None
    } else {
        match last.parse::<u64>() {
            Ok(e) => Some(e),
            Err(_) => return RangeOutcome::Ignore,
        }
    };

    if let Some(e) = end {
        if e < start {
            return RangeOutcome::Ignore;
        }
    }
    if start >= total {
        return RangeOutcome::Unsatisfiable;
    }

    let last_byte = total - 1;
    RangeOutcome::Partial(ByteRange {
        start,
        end: end.map_or(last_byte, |e| e.min(last_byte)),
    })
}

fn suffix(len: &str, total: u64) -> RangeOutcome {
    let Ok(len) = len.parse::<u64>() else {
        return RangeOutcome::Ignore;
    };
    if len == 0 || total == 0 {
        return RangeOutcome::Unsatisfiable;
    }
    RangeOutcome::Partial(ByteRange {
        start: total.saturating_sub(len),
        end: total - 1,
    })
}
