//! Request context derived from an inbound HTTP request.

use axum::http::{header, HeaderMap, Uri};
use healthhelp_core::{CoreConfig, RequestContext};

const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Build the request context used for absolute URLs.
///
/// Host: `X-Forwarded-Host` (first entry), then `Host`, then the URI authority.
/// Scheme: `X-Forwarded-Proto` (first entry), then the URI scheme, then the configured
/// default scheme.
///
/// The `X-Forwarded-*` headers are only read when `cfg.trust_forwarded_headers()` is set.
///
/// Returns `None` when no usable host is present; mappers then fall back to the
/// configured base URL.
pub fn request_context(
    headers: &HeaderMap,
    uri: &Uri,
    cfg: &CoreConfig,
) -> Option<RequestContext> {
    let trust_forwarded = cfg.trust_forwarded_headers();

    let host = trust_forwarded
        .then(|| first_header_value(headers, X_FORWARDED_HOST))
        .flatten()
        .or_else(|| first_header_value(headers, header::HOST.as_str()))
        .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
        .filter(|h| is_valid_host(h));

    let Some(host) = host else {
        tracing::debug!("no usable host on request, mapping without request context");
        return None;
    };

    let scheme = trust_forwarded
        .then(|| first_header_value(headers, X_FORWARDED_PROTO))
        .flatten()
        .map(|s| s.to_ascii_lowercase())
        .filter(|s| s == "http" || s == "https")
        .or_else(|| uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| cfg.default_scheme().to_string());

    Some(RequestContext::new(scheme, host, uri.path()))
}

fn first_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?;
    let first = value.split(',').next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

/// Hostname or IP literal with an optional port; anything else is ignored rather than
/// echoed back into URLs.
fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host.len() <= 255
        && host.bytes().all(|b| {
            b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b':' | b'[' | b']' | b'_')
        })
}
