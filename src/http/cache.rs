//! Conditional request support
//!
//! `Last-Modified` generation and `If-Modified-Since` evaluation.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a timestamp as an HTTP date
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format(HTTP_DATE_FORMAT)
        .to_string()
}

/// Parse an HTTP date header value, `None` if it is not a valid date
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Decide whether a conditional GET can be answered with 304.
///
/// `If-None-Match` takes precedence: when present the date check is skipped
/// entirely, since no entity tags are generated here. Modification times
/// are compared at whole-second precision.
pub fn is_not_modified(
    if_modified_since: Option<&str>,
    if_none_match: Option<&str>,
    modified: SystemTime,
) -> bool {
    if if_none_match.is_some() {
        return false;
    }
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(at(784_111_777)), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_parse_http_date() {
        let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert_eq!(parsed.timestamp(), 784_111_777);
        assert!(parse_http_date("yesterday").is_none());
    }

    #[test]
    fn test_not_modified_when_older_or_equal() {
        let header = Some("Sun, 06 Nov 1994 08:49:37 GMT");
        assert!(is_not_modified(header, None, at(784_111_777)));
        assert!(is_not_modified(header, None, at(784_111_000)));
        // sub-second precision on the file side is dropped
        assert!(is_not_modified(
            header,
            None,
            at(784_111_777) + Duration::from_millis(900)
        ));
    }

    #[test]
    fn test_modified_when_newer() {
        assert!(!is_not_modified(
            Some("Sun, 06 Nov 1994 08:49:37 GMT"),
            None,
            at(784_111_778)
        ));
    }

    #[test]
    fn test_if_none_match_disables_date_check() {
        assert!(!is_not_modified(
            Some("Sun, 06 Nov 1994 08:49:37 GMT"),
            Some("\"abc\""),
            at(0)
        ));
    }

    #[test]
    fn test_invalid_or_missing_header() {
        assert!(!is_not_modified(Some("garbage"), None, at(0)));
        assert!(!is_not_modified(None, None, at(0)));
    }
}
