//! HTTP response builders
//!
//! Every builder returns a finished `Response`; a builder failure is logged
//! and degrades to an empty response instead of panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    ACCEPT_RANGES, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, LAST_MODIFIED, LOCATION,
};
use hyper::{Response, StatusCode};

use super::range::ByteRange;

pub type HttpResponse = Response<Full<Bytes>>;

/// 200 with the full file content
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    last_modified: &str,
    is_head: bool,
) -> HttpResponse {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length)
        .header(LAST_MODIFIED, last_modified)
        .header(ACCEPT_RANGES, "bytes")
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback(StatusCode::OK, &e))
}

/// 206 with one span of the file; `data` already holds only that span
pub fn build_partial_response(
    data: Bytes,
    content_type: &str,
    last_modified: &str,
    range: ByteRange,
    total: u64,
    is_head: bool,
) -> HttpResponse {
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, range.byte_count())
        .header(CONTENT_RANGE, range.content_range(total))
        .header(LAST_MODIFIED, last_modified)
        .header(ACCEPT_RANGES, "bytes")
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback(StatusCode::PARTIAL_CONTENT, &e))
}

/// 304 Not Modified
pub fn build_304_response(last_modified: &str) -> HttpResponse {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(LAST_MODIFIED, last_modified)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| fallback(StatusCode::NOT_MODIFIED, &e))
}

/// 301 pointing a directory request at its slash-terminated form
pub fn build_redirect_response(location: &str) -> HttpResponse {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(LOCATION, location)
        .header(CONTENT_LENGTH, 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| fallback(StatusCode::MOVED_PERMANENTLY, &e))
}

/// 200 with a generated HTML page (directory listings)
pub fn build_html_response(html: String, is_head: bool) -> HttpResponse {
    let content_length = html.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(html)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback(StatusCode::OK, &e))
}

/// Error page for any 4xx/5xx status
pub fn build_error_response(status: StatusCode, message: &str, is_head: bool) -> HttpResponse {
    let page = error_page(status, message);
    let content_length = page.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(page)
    };

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/html;charset=utf-8")
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| fallback(status, &e))
}

/// 404 Not Found
pub fn build_404_response(message: &str, is_head: bool) -> HttpResponse {
    build_error_response(StatusCode::NOT_FOUND, message, is_head)
}

/// 416 Range Not Satisfiable
pub fn build_416_response(total: u64, is_head: bool) -> HttpResponse {
    let mut response = build_error_response(
        StatusCode::RANGE_NOT_SATISFIABLE,
        "Requested range not satisfiable",
        is_head,
    );
    if let Ok(value) = format!("bytes */{total}").parse() {
        response.headers_mut().insert(CONTENT_RANGE, value);
    }
    response
}

/// 501 for anything but GET and HEAD
pub fn build_501_response(method: &str, is_head: bool) -> HttpResponse {
    build_error_response(
        StatusCode::NOT_IMPLEMENTED,
        &format!("Unsupported method ('{method}')"),
        is_head,
    )
}

fn error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Error");
    let message = crate::handler::listing::escape_html(message);
    format!(
        "<!DOCTYPE HTML>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Error response</title>\n\
         </head>\n\
         <body>\n\
         <h1>Error response</h1>\n\
         <p>Error code: {code}</p>\n\
         <p>Message: {message}.</p>\n\
         <p>Error code explanation: {code} - {reason}.</p>\n\
         </body>\n\
         </html>\n"
    )
}

fn fallback(status: StatusCode, error: &hyper::http::Error) -> HttpResponse {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    response
}
