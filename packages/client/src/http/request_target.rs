//! Request-target extraction.

use http::Uri;

/// The request-target as it goes on the request line: path and query, byte for
/// byte. Nothing is normalized, so `/a?x=1&y=2` and `/a?y=2&x=1` stay distinct.
///
/// A URI with no path (`http://example.com`) is sent as `/`.
#[must_use]
pub fn request_target(uri: &Uri) -> &str {
    match uri.path_and_query() {
        Some(path_and_query) if !path_and_query.as_str().is_empty() => path_and_query.as_str(),
        _ => "/",
    }
}
