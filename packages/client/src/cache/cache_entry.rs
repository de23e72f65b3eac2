//! Cached response entry as seen by key derivation.
//!
//! A store owns and persists entries. Key derivation only reads the `Vary`
//! response header; the remaining fields are what a store needs to hand the
//! response back and to track the variants filed under a root entry.

use std::collections::BTreeSet;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::{HeaderMap, Response, StatusCode, Version};

use super::cache_key::CacheKey;
use super::vary::vary_header_names;

/// Cached response entry with metadata
#[derive(Debug, Clone)]
pub struct CacheEntry {
    status: StatusCode,
    version: Version,
    headers: HeaderMap,
    body: Bytes,
    /// When the store accepted the response
    stored_at: DateTime<Utc>,
    /// Variant keys filed under this entry when it is a root entry
    variant_keys: BTreeSet<CacheKey>,
}

impl CacheEntry {
    /// Create an entry with an empty body, stored now.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            version: Version::HTTP_11,
            headers,
            body: Bytes::new(),
            stored_at: Utc::now(),
            variant_keys: BTreeSet::new(),
        }
    }

    /// Create an entry from a fully read response.
    #[must_use]
    pub fn from_response(response: Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status,
            version: parts.version,
            headers: parts.headers,
            body,
            stored_at: Utc::now(),
            variant_keys: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_stored_at(mut self, stored_at: DateTime<Utc>) -> Self {
        self.stored_at = stored_at;
        self
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    #[must_use]
    pub fn stored_at(&self) -> DateTime<Utc> {
        self.stored_at
    }

    /// Distinct header names the stored response varies on.
    #[must_use]
    pub fn vary_header_names(&self) -> BTreeSet<String> {
        vary_header_names(&self.headers)
    }

    /// Whether the stored response names at least one header in `Vary`.
    #[must_use]
    pub fn varies(&self) -> bool {
        !self.vary_header_names().is_empty()
    }

    /// Record a variant key under this root entry. Returns `false` if it was
    /// already recorded.
    pub fn record_variant(&mut self, key: CacheKey) -> bool {
        self.variant_keys.insert(key)
    }

    /// Whether any variant has been recorded under this entry.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.variant_keys.is_empty()
    }

    /// Recorded variant keys in key order.
    pub fn variant_keys(&self) -> impl Iterator<Item = &CacheKey> {
        self.variant_keys.iter()
    }
}
