//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: extracts and validates the
//! page title from `/<verb>/<title>` paths, enforces method discipline,
//! and dispatches to the page handlers. Title validation happens here,
//! ahead of everything else, so no unvalidated path segment ever reaches
//! the page store.

use crate::config::AppState;
use crate::handler::pages;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::wiki::Title;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// The three wiki verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    View,
    Edit,
    Save,
}

impl Verb {
    /// Methods accepted on this route, for Allow headers
    const fn allowed_methods(self) -> &'static str {
        match self {
            Self::View | Self::Edit => "GET, HEAD, OPTIONS",
            Self::Save => "POST, OPTIONS",
        }
    }
}

/// Split a request path into verb and raw title segment
///
/// Returns `None` for any path not shaped like `/<verb>/<title>`; the
/// title is returned unvalidated.
pub fn parse_route(path: &str) -> Option<(Verb, &str)> {
    let (verb, title) = if let Some(rest) = path.strip_prefix("/view/") {
        (Verb::View, rest)
    } else if let Some(rest) = path.strip_prefix("/edit/") {
        (Verb::Edit, rest)
    } else if let Some(rest) = path.strip_prefix("/save/") {
        (Verb::Save, rest)
    } else {
        return None;
    };
    Some((verb, title))
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let mut entry = new_log_entry(&req, peer_addr);

    let response = dispatch(req, &state).await;

    if state.config.logging.access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes =
            usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

async fn dispatch<B>(req: Request<B>, state: &Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let path = req.uri().path().to_string();

    // 1. Route shape: anything but /<verb>/<title> is a 404
    let Some((verb, raw_title)) = parse_route(&path) else {
        return http::build_404_response();
    };

    // 2. Title allow-list, ahead of any dispatch
    let Ok(title) = state.validator.validate(raw_title) else {
        return http::build_404_response();
    };

    // 3. Method discipline
    let method = req.method().clone();
    let is_head = method == Method::HEAD;
    match (verb, &method) {
        (Verb::View | Verb::Edit, &Method::GET | &Method::HEAD) | (Verb::Save, &Method::POST) => {}
        (_, &Method::OPTIONS) => return http::build_options_response(verb.allowed_methods()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            return http::build_405_response(verb.allowed_methods());
        }
    }

    match verb {
        Verb::View => pages::view(state, &title, is_head).await,
        Verb::Edit => pages::edit(state, &title, is_head).await,
        Verb::Save => save_with_body(req, state, &title).await,
    }
}

/// Collect the request body for a save, enforcing the configured size cap
///
/// The `Content-Length` check rejects oversized uploads up front; the
/// `Limited` wrapper covers chunked bodies that carry no length header,
/// aborting collection once the cap is hit instead of buffering first.
async fn save_with_body<B>(
    req: Request<B>,
    state: &Arc<AppState>,
    title: &Title,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let max_body_size = state.config.http.max_body_size;
    if let Some(resp) = check_body_size(&req, max_body_size) {
        return resp;
    }

    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    let body = match Limited::new(req.into_body(), limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.is::<LengthLimitError>() => {
            logger::log_error(&format!(
                "Request body exceeded limit of {max_body_size} bytes"
            ));
            return http::build_413_response();
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            return http::build_500_response(&e.to_string());
        }
    };

    pages::save(state, title, &body).await
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn new_log_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.http_version = match req.version() {
        Version::HTTP_10 => "1.0".to_string(),
        Version::HTTP_2 => "2".to_string(),
        _ => "1.1".to_string(),
    };
    entry.referer = header_string(req, "referer");
    entry.user_agent = header_string(req, "user-agent");
    entry
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
