//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, then the static file
//! responder.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    if let Some(resp) = check_http_method(req.method()) {
        return Ok(resp);
    }

    // Only the path is looked up; `?query` never reaches the filesystem
    Ok(static_files::serve_path(&state, req.uri().path()).await)
}

/// Only GET is served, everything else gets a bare 405
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET => None,
        _ => Some(http::build_405_response()),
    }
}
