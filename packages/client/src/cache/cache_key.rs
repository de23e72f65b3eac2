//! Cache key type for HTTP responses
//!
//! Provides `CacheKey`, the opaque string a cache store files a response
//! under. Primary keys name a resource; variant keys prefix the primary key
//! with the negotiated request header values named by `Vary`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::http::escape::{form_decode_pairs, form_decode_pairs_raw};

/// Opens the variant prefix of a variant key.
pub const VARIANT_OPEN: char = '{';
/// Closes the variant prefix of a variant key.
pub const VARIANT_CLOSE: char = '}';
/// Separates `name=value` pairs inside the variant prefix.
pub const PAIR_SEPARATOR: char = '&';

/// Cache key for HTTP responses.
///
/// Stable across calls and processes for equal inputs, ordered, hashable and
/// borrowable as `str` so stores can look up by `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    pub(crate) fn from_string(key: String) -> Self {
        Self(key)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether this key carries a variant prefix.
    #[must_use]
    pub fn is_variant(&self) -> bool {
        self.split().0.is_some()
    }

    /// The resource identity: the whole key for a primary key, the part after
    /// the variant prefix for a variant key.
    ///
    /// Stores that want every variant of a resource scan for keys whose
    /// `primary_part` matches; the layout does not support prefix indexing.
    #[must_use]
    pub fn primary_part(&self) -> &str {
        self.split().1
    }

    /// Decoded `(name, value)` pairs of the variant prefix, in key order.
    /// Empty for primary keys. Bytes that are not UTF-8 decode lossily.
    #[must_use]
    pub fn variant_pairs(&self) -> Vec<(String, String)> {
        self.split().0.map(form_decode_pairs).unwrap_or_default()
    }

    /// [`variant_pairs`](Self::variant_pairs) as the exact bytes that were
    /// encoded. Header values that are not UTF-8 only survive decoding here.
    #[must_use]
    pub fn variant_pairs_raw(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.split().0.map(form_decode_pairs_raw).unwrap_or_default()
    }

    // Encoded names and values never contain a raw `}`, so the first one
    // closes the prefix.
    fn split(&self) -> (Option<&str>, &str) {
        if let Some(rest) = self.0.strip_prefix(VARIANT_OPEN)
            && let Some(close) = rest.find(VARIANT_CLOSE)
        {
            return (Some(&rest[..close]), &rest[close + VARIANT_CLOSE.len_utf8()..]);
        }
        (None, &self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}

impl PartialEq<str> for CacheKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CacheKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
