//! Static file serving
//!
//! Maps a request onto the served root and answers with the file, an index
//! file, a directory listing, a redirect or a 404.

use hyper::body::Bytes;
use std::fs::Metadata;
use std::path::Path;
use tokio::fs;

use super::listing;
use super::path;
use super::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeOutcome, HttpResponse};
use crate::logger;

/// Serve a GET or HEAD request from `root`
pub async fn serve(ctx: &RequestContext<'_>, root: &Path, index_files: &[String]) -> HttpResponse {
    let target = path::resolve(root, ctx.path);
    let wants_dir = ctx.path.ends_with('/');

    let Ok(meta) = fs::metadata(&target).await else {
        return http::build_404_response("File not found", ctx.is_head);
    };

    if meta.is_dir() {
        if !wants_dir {
            return http::build_redirect_response(&slash_location(ctx));
        }
        for index in index_files {
            let candidate = target.join(index);
            if let Ok(index_meta) = fs::metadata(&candidate).await {
                if index_meta.is_file() {
                    return serve_file(ctx, &candidate, &index_meta).await;
                }
            }
        }
        return serve_listing(ctx, &target).await;
    }

    // only regular files are ever opened
    if wants_dir || !meta.is_file() {
        return http::build_404_response("File not found", ctx.is_head);
    }

    serve_file(ctx, &target, &meta).await
}

/// Location for the slash-terminated form of a directory URL, query kept
fn slash_location(ctx: &RequestContext<'_>) -> String {
    match ctx.query {
        Some(q) => format!("{}/?{q}", ctx.path),
        None => format!("{}/", ctx.path),
    }
}

async fn serve_file(ctx: &RequestContext<'_>, file: &Path, meta: &Metadata) -> HttpResponse {
    let last_modified = meta
        .modified()
        .map(cache::format_http_date)
        .unwrap_or_default();

    if let Ok(modified) = meta.modified() {
        if cache::is_not_modified(ctx.if_modified_since, ctx.if_none_match, modified) {
            return http::build_304_response(&last_modified);
        }
    }

    let content = match fs::read(file).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", file.display()));
            return http::build_404_response("File not found", ctx.is_head);
        }
    };
    let content_type = mime::content_type_for(file);
    let total = content.len() as u64;

    match http::range::resolve(ctx.range, total) {
        RangeOutcome::Partial(span) => {
            // both bounds are below `total`, which came from a usize length
            #[allow(clippy::cast_possible_truncation)]
            let body = Bytes::copy_from_slice(&content[span.start as usize..=span.end as usize]);
            http::build_partial_response(body, content_type, &last_modified, span, total, ctx.is_head)
        }
        RangeOutcome::Unsatisfiable => http::build_416_response(total, ctx.is_head),
        RangeOutcome::Ignore => {
            http::build_file_response(Bytes::from(content), content_type, &last_modified, ctx.is_head)
        }
    }
}

async fn serve_listing(ctx: &RequestContext<'_>, dir: &Path) -> HttpResponse {
    match listing::read_entries(dir).await {
        Ok(entries) => {
            let display_path = path::percent_decode(ctx.path);
            http::build_html_response(listing::render(&display_path, &entries), ctx.is_head)
        }
        Err(e) => {
            logger::log_warning(&format!("Cannot list '{}': {e}", dir.display()));
            http::build_404_response("No permission to list directory", ctx.is_head)
        }
    }
}
