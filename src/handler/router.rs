//! Request dispatch
//!
//! Entry point for every request: method check, static file lookup, then
//! response finalisation (server name and the variant's header set) and
//! access logging.

use crate::config::ServerState;
use crate::handler::static_files;
use crate::http::{self, HttpResponse};
use crate::logger::{self, AccessLogEntry};
use hyper::body::Body;
use hyper::header::{
    HeaderMap, HeaderName, HeaderValue, IF_MODIFIED_SINCE, IF_NONE_MATCH, RANGE, REFERER,
    SERVER, USER_AGENT,
};
use hyper::http::request::Parts;
use hyper::{Method, Request, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request fields needed to serve a file
pub struct RequestContext<'a> {
    /// Raw (percent-encoded) URL path
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_modified_since: Option<&'a str>,
    pub if_none_match: Option<&'a str>,
    pub range: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    fn from_parts(parts: &'a Parts) -> Self {
        Self {
            path: parts.uri.path(),
            query: parts.uri.query(),
            is_head: parts.method == Method::HEAD,
            if_modified_since: header_str(&parts.headers, IF_MODIFIED_SINCE),
            if_none_match: header_str(&parts.headers, IF_NONE_MATCH),
            range: header_str(&parts.headers, RANGE),
        }
    }
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Main entry point for HTTP request handling. Request bodies are never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<ServerState>,
    peer_addr: SocketAddr,
) -> Result<HttpResponse, Infallible> {
    let started = Instant::now();
    let (parts, _) = req.into_parts();
    let ctx = RequestContext::from_parts(&parts);

    let mut response = match parts.method {
        Method::GET | Method::HEAD => {
            static_files::serve(&ctx, &state.root, &state.index_files).await
        }
        ref other => http::build_501_response(other.as_str(), false),
    };

    finalize(&mut response, &state);

    if state.access_log {
        let entry = access_entry(&parts, &response, peer_addr, started);
        logger::log_access(&entry, &state.access_log_format);
    }

    Ok(response)
}

/// Stamp the headers every response carries, whatever its status
pub fn finalize(response: &mut HttpResponse, state: &ServerState) {
    if let Ok(server) = HeaderValue::from_str(&state.server_name) {
        response.headers_mut().insert(SERVER, server);
    }
    state.headers.apply(response.headers_mut());
}

fn access_entry(
    parts: &Parts,
    response: &HttpResponse,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = version_label(parts.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().filter(|&n| n > 0);
    entry.referer = header_str(&parts.headers, REFERER).map(ToString::to_string);
    entry.user_agent = header_str(&parts.headers, USER_AGENT).map(ToString::to_string);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Variant};
    use hyper::StatusCode;

    fn state_for(variant: Variant) -> Arc<ServerState> {
        let mut cfg = Config::for_variant(variant);
        cfg.logging.access_log = false;
        let root = std::env::temp_dir().join("devserve-router-unused-root");
        Arc::new(ServerState::new(&cfg, variant, root))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:50000".parse().unwrap()
    }

    #[tokio::test]
    async fn test_unsupported_method_is_501_with_cors() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/index.html")
            .body(())
            .unwrap();
        let response = handle_request(req, state_for(Variant::Cors), peer())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(response.headers()["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(response.headers()["access-control-allow-headers"], "Content-Type");
    }

    #[tokio::test]
    async fn test_missing_root_is_404_with_no_cache_headers() {
        let req = Request::builder().uri("/nope.txt").body(()).unwrap();
        let response = handle_request(req, state_for(Variant::NoCache), peer())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["cache-control"], "no-cache, no-store, must-revalidate");
        assert_eq!(response.headers()["pragma"], "no-cache");
        assert_eq!(response.headers()["expires"], "0");
    }

    #[tokio::test]
    async fn test_plain_adds_only_server_name() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .body(())
            .unwrap();
        let response = handle_request(req, state_for(Variant::Plain), peer())
            .await
            .unwrap();
        assert!(response.headers()[SERVER].to_str().unwrap().starts_with("devserve/"));
        assert!(response.headers().get("access-control-allow-origin").is_none());
        assert!(response.headers().get("pragma").is_none());
        assert!(response.headers().get("expires").is_none());
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_11), "1.1");
    }
}
