//! Request context and URL derivation for uploaded files.
//!
//! Mappers never look up a request from ambient state. Callers pass a [`MappingContext`]
//! that may carry a request context (anything implementing [`BuildAbsoluteUri`]) and always
//! carries the fallback base URL used when there is no request.

use healthhelp_types::FileRef;

use crate::config::CoreConfig;
use crate::constants::DEFAULT_FALLBACK_BASE_URL;

/// Turns a relative location into an absolute URL for the current request.
pub trait BuildAbsoluteUri {
    fn build_absolute_uri(&self, location: &str) -> String;
}

/// Absolute-URI builder for one inbound HTTP request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    scheme: String,
    host: String,
    path: String,
}

impl RequestContext {
    /// `path` is the path of the current request and is used to resolve relative locations.
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        Self {
            scheme: scheme.into(),
            host: host.into(),
            path,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl BuildAbsoluteUri for RequestContext {
    fn build_absolute_uri(&self, location: &str) -> String {
        if has_scheme(location) {
            return location.to_string();
        }

        if let Some(rest) = location.strip_prefix("//") {
            return format!("{}://{}", self.scheme, rest);
        }

        if location.starts_with('/') {
            return format!("{}://{}{}", self.scheme, self.host, location);
        }

        let base_dir = match self.path.rfind('/') {
            Some(idx) => &self.path[..=idx],
            None => "/",
        };
        let joined = format!("{base_dir}{location}");

        format!(
            "{}://{}{}",
            self.scheme,
            self.host,
            remove_dot_segments(&joined)
        )
    }
}

/// `scheme://...` where scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn has_scheme(location: &str) -> bool {
    let Some((scheme, _)) = location.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Collapse `.` and `..` segments of an absolute path.
fn remove_dot_segments(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len().saturating_sub(1);
    let mut output: Vec<&str> = Vec::with_capacity(segments.len());

    for (idx, segment) in segments.iter().enumerate() {
        match *segment {
            "." => {
                if idx == last {
                    output.push("");
                }
            }
            ".." => {
                // Never pop the leading empty segment that represents the root.
                if output.len() > 1 {
                    output.pop();
                }
                if idx == last {
                    output.push("");
                }
            }
            other => output.push(other),
        }
    }

    let joined = output.join("/");
    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}

/// Everything a mapper needs besides the record itself.
#[derive(Clone, Copy)]
pub struct MappingContext<'a> {
    request: Option<&'a dyn BuildAbsoluteUri>,
    fallback_base_url: &'a str,
}

impl<'a> MappingContext<'a> {
    pub fn new(config: &'a CoreConfig, request: Option<&'a dyn BuildAbsoluteUri>) -> Self {
        Self {
            request,
            fallback_base_url: config.fallback_base_url(),
        }
    }

    /// A context with a request and the built-in fallback base URL.
    pub fn with_request(request: &'a dyn BuildAbsoluteUri) -> Self {
        Self {
            request: Some(request),
            fallback_base_url: DEFAULT_FALLBACK_BASE_URL,
        }
    }

    /// A context with no request, as used by background jobs and tests.
    pub fn detached() -> MappingContext<'static> {
        MappingContext {
            request: None,
            fallback_base_url: DEFAULT_FALLBACK_BASE_URL,
        }
    }

    pub fn has_request(&self) -> bool {
        self.request.is_some()
    }

    pub fn fallback_base_url(&self) -> &str {
        self.fallback_base_url
    }

    /// Derived `*_url` value for an optional attachment.
    ///
    /// - absent file: `None`
    /// - request context: `request.build_absolute_uri(location)`
    /// - no request context: fallback base URL followed by the location, as-is
    pub fn file_url(&self, file: Option<&FileRef>) -> Option<String> {
        let file = file?;

        match self.request {
            Some(request) => Some(request.build_absolute_uri(file.location())),
            None => {
                tracing::debug!(
                    location = file.location(),
                    "no request context, using fallback base url"
                );
                Some(format!("{}{}", self.fallback_base_url, file.location()))
            }
        }
    }

    /// Value of the attachment field itself: absolute with a request, relative without.
    pub fn file_field(&self, file: Option<&FileRef>) -> Option<String> {
        let file = file?;

        match self.request {
            Some(request) => Some(request.build_absolute_uri(file.location())),
            None => Some(file.location().to_string()),
        }
    }
}
