//! Static file resolution and serving
//!
//! Turns a request path into a file under the serve root and loads it. Two
//! layers keep lookups inside the root: the request path is cleaned lexically
//! before it touches the filesystem, and the resolved path is canonicalized
//! and checked for containment afterwards, which also covers symlinks.

use crate::handler::router::RequestContext;
use crate::http::{self, cond, mime, range, RangeOutcome};
use crate::logger;
use crate::settings::INDEX_FILE;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve the file a request path resolves to under `serve_root`
pub async fn serve(ctx: &RequestContext<'_>, serve_root: &Path) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_path(serve_root, ctx.path) else {
        return http::not_found();
    };

    let data = match fs::read(&file_path).await {
        Ok(data) => data,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return http::not_found();
        }
    };

    let content_type = mime::content_type(&file_path);
    let etag = cond::etag(&data);

    if cond::none_match(ctx.if_none_match.as_deref(), &etag) {
        return http::not_modified(&etag);
    }

    let total = data.len();
    match range::evaluate(ctx.range.as_deref(), total) {
        RangeOutcome::Partial(r) => {
            let slice = Bytes::from(data[r.start..=r.end].to_vec());
            http::response::file_partial(slice, content_type, &etag, r, total, ctx.is_head)
        }
        RangeOutcome::Unsatisfiable => http::range_not_satisfiable(total),
        RangeOutcome::Full => {
            http::response::file_full(Bytes::from(data), content_type, &etag, ctx.is_head)
        }
    }
}

/// Resolve a request path to a canonical file path inside the serve root.
///
/// Directory targets fall through to their index file. Returns None for
/// anything that does not end at a readable regular file inside the root,
/// including a serve root that does not exist.
fn resolve_path(serve_root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut candidate = serve_root.join(clean_request_path(request_path));

    if candidate.is_dir() {
        candidate = candidate.join(INDEX_FILE);
    }

    let root = serve_root.canonicalize().ok()?;
    let resolved = candidate.canonicalize().ok()?;

    if !resolved.starts_with(&root) {
        logger::log_warning(&format!(
            "Blocked request resolving outside serve root: {request_path}"
        ));
        return None;
    }

    resolved.is_file().then_some(resolved)
}

/// Clean a request path into a relative path with no traversal segments.
///
/// `.` segments are dropped and `..` pops the previous segment; popping past
/// the first segment is a no-op, so the result can never point above the
/// directory it is joined onto.
fn clean_request_path(request_path: &str) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(segment) => cleaned.push(segment),
            Component::ParentDir => {
                cleaned.pop();
            }
            _ => {}
        }
    }
    cleaned
}
