//! Request entry point
//!
//! Validates the method, extracts the headers the file handler cares about,
//! and hands the request to the static file resolver. There is a single
//! route: every path is a file lookup under the serve root.

use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::settings::Settings;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Per-request information the file handler needs
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range: Option<String>,
}

/// Handle one HTTP request
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    settings: Arc<Settings>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    if !matches!(*method, Method::GET | Method::HEAD) {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Ok(http::method_not_allowed());
    }

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *method == Method::HEAD,
        if_none_match: header_value(&req, "if-none-match"),
        range: header_value(&req, "range"),
    };

    Ok(static_files::serve(&ctx, &settings.serve_root).await)
}

/// Extract a header as an owned string; non-UTF-8 values count as absent
fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
