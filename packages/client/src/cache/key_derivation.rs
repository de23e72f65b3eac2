//! Primary and variant cache key derivation.
//!
//! Both operations are pure: they read the host, the request-target, request
//! headers and the entry's `Vary` values, and allocate the key string. There
//! is no failure path.

use http::header::VARY;
use http::{HeaderMap, HeaderName, HeaderValue, Request};

use super::cache_entry::CacheEntry;
use super::cache_key::{CacheKey, PAIR_SEPARATOR, VARIANT_CLOSE, VARIANT_OPEN};
use super::header_value::normalize_header_values;
use super::vary::parse_vary;
use crate::http::escape::{push_form_encoded, push_form_encoded_bytes};
use crate::http::host::HttpHost;
use crate::http::request_target::request_target;

/// Resource-level key: the host's canonical form followed directly by the
/// request-target.
///
/// ```
/// use http::Request;
/// use varykey_core::cache::primary_key;
/// use varykey_core::http::HttpHost;
///
/// let host = HttpHost::new("http", "example.com");
/// let request = Request::get("/resource").body(()).unwrap();
/// assert_eq!(primary_key(&host, &request).as_str(), "http://example.com/resource");
/// ```
pub fn primary_key<B>(host: &HttpHost, request: &Request<B>) -> CacheKey {
    let mut key = String::new();
    push_primary(&mut key, host, request);

    tracing::trace!(target: "varykey::cache::key", key = %key, "derived primary cache key");
    CacheKey::from_string(key)
}

/// Key of the negotiated representation of a resource whose stored entry is
/// `entry`. Equal to [`primary_key`] when the entry has no usable `Vary`.
pub fn variant_key<B>(host: &HttpHost, request: &Request<B>, entry: &CacheEntry) -> CacheKey {
    variant_key_for_vary(host, request, entry.headers().get_all(VARY))
}

/// [`variant_key`] over raw `Vary` values, for stores with their own entry type.
///
/// The key is `{name=value&...}` followed by the primary key. Names come from
/// `vary` sorted and deduplicated; each value is read from `request`, so a
/// header the request lacks contributes `name=`. Names are form encoded from
/// their UTF-8 text, values from the raw request header bytes. If `vary`
/// names nothing, the primary key is returned unchanged.
pub fn variant_key_for_vary<'a, B, I>(host: &HttpHost, request: &Request<B>, vary: I) -> CacheKey
where
    I: IntoIterator<Item = &'a HeaderValue>,
{
    let names = parse_vary(vary);
    if names.is_empty() {
        return primary_key(host, request);
    }

    let mut key = String::new();
    key.push(VARIANT_OPEN);
    for (index, name) in names.iter().enumerate() {
        if index > 0 {
            key.push(PAIR_SEPARATOR);
        }
        push_form_encoded(&mut key, name);
        key.push('=');
        push_form_encoded_bytes(&mut key, &request_header_value(request.headers(), name));
    }
    key.push(VARIANT_CLOSE);
    push_primary(&mut key, host, request);

    tracing::debug!(
        target: "varykey::cache::key",
        vary_headers = names.len(),
        key = %key,
        "derived variant cache key"
    );
    CacheKey::from_string(key)
}

fn push_primary<B>(key: &mut String, host: &HttpHost, request: &Request<B>) {
    key.push_str(&host.to_string());
    key.push_str(request_target(request.uri()));
}

// A name that is not a valid header name cannot be present on the request.
fn request_header_value(headers: &HeaderMap, name: &str) -> Vec<u8> {
    match HeaderName::from_bytes(name.as_bytes()) {
        Ok(header) => normalize_header_values(headers.get_all(&header)),
        Err(_) => Vec::new(),
    }
}
