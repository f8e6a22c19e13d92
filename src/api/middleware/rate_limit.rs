//! Rate limiting middleware backed by the in-process sliding window limiter.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::api::AppState;
use crate::utils::templates;

/// Rate limit error response
#[derive(Debug)]
pub struct RateLimitError {
    pub retry_after: u64,
    pub limit: u64,
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert("Retry-After", HeaderValue::from(self.retry_after));
        headers.insert("X-RateLimit-Limit", HeaderValue::from(self.limit));
        headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("0"));

        (
            StatusCode::TOO_MANY_REQUESTS,
            headers,
            Html(templates::too_many_requests_page()),
        )
            .into_response()
    }
}

/// Extract client identifier for rate limiting.
///
/// The peer address is used unless `trust_proxy_headers` is set, in which
/// case the first `X-Forwarded-For` hop or `X-Real-IP` wins. Those headers
/// are client-controlled when no proxy rewrites them.
fn get_client_identifier(request: &Request, trust_proxy_headers: bool) -> String {
    if trust_proxy_headers {
        if let Some(ip) = forwarded_client(request.headers()) {
            return ip;
        }
    }

    if let Some(connect_info) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return connect_info.0.ip().to_string();
    }

    "unknown".to_string()
}

fn forwarded_client(headers: &HeaderMap) -> Option<String> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            // First entry in the chain is the client the proxy saw
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_string)
    };

    header("X-Forwarded-For").or_else(|| header("X-Real-IP"))
}

/// Rate limiting middleware applied to every route.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, RateLimitError> {
    let client_id = get_client_identifier(&request, state.trust_proxy_headers);
    let decision = state.rate_limiter.check(&client_id);

    if !decision.allowed {
        tracing::warn!(client = %client_id, limit = decision.limit, "Rate limit exceeded");
        return Err(RateLimitError {
            // Round up so clients never retry a moment too early
            retry_after: decision.retry_after.as_secs()
                + u64::from(decision.retry_after.subsec_nanos() > 0),
            limit: decision.limit,
        });
    }

    let mut response = next.run(request).await;

    response
        .headers_mut()
        .insert("X-RateLimit-Limit", HeaderValue::from(decision.limit));
    response
        .headers_mut()
        .insert("X-RateLimit-Remaining", HeaderValue::from(decision.remaining));

    Ok(response)
}
