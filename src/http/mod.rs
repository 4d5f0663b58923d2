//! HTTP protocol layer
//!
//! Header sets, conditional requests, ranges, MIME lookup and response
//! builders, independent of how paths are mapped onto the filesystem.

pub mod cache;
pub mod headers;
pub mod mime;
pub mod range;
pub mod response;

pub use headers::HeaderSet;
pub use response::{
    build_304_response, build_404_response, build_416_response, build_501_response,
    build_error_response, build_file_response, build_html_response, build_partial_response,
    build_redirect_response, HttpResponse,
};
