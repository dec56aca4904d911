//! Cross-origin access for browser clients served from the local machine.

use std::net::Ipv4Addr;

use axum::http::{HeaderValue, Method, header::CONTENT_TYPE, request};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Create the CORS layer, which only allows origins on the loopback interface.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _: &request::Parts| {
                origin.to_str().is_ok_and(is_loopback_origin)
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}

/// Whether `origin` is an `http` origin for `localhost` or an address in
/// `127.0.0.0/8`, with or without a port.
pub fn is_loopback_origin(origin: &str) -> bool {
    let Some(authority) = origin.strip_prefix("http://") else {
        return false;
    };

    let host = match authority.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => host,
        Some(_) => return false,
        None => authority,
    };

    host == "localhost"
        || host
            .parse::<Ipv4Addr>()
            .is_ok_and(|address| address.is_loopback())
}
