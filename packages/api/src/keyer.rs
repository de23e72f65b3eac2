//! Cache lookup and storage key sequencing.
//!
//! A store never needs more than two reads to find a response: the root
//! entry under the primary key, then, if that entry declares `Vary`, the
//! negotiated representation under the variant key.

use std::borrow::Borrow;

use http::Request;
use varykey_core::cache::{CacheEntry, CacheKey, primary_key, variant_key};
use varykey_core::http::HttpHost;

/// Derives the keys a cache store reads and writes for a request.
///
/// Holds no state; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheKeyer;

impl CacheKeyer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Key of the resource, ignoring content negotiation.
    pub fn primary<B>(&self, host: &HttpHost, request: &Request<B>) -> CacheKey {
        primary_key(host, request)
    }

    /// Key of the representation negotiated by `request`, given the root entry
    /// stored under the primary key.
    pub fn variant<B>(&self, host: &HttpHost, request: &Request<B>, root: &CacheEntry) -> CacheKey {
        variant_key(host, request, root)
    }

    /// Find the entry serving `request`.
    ///
    /// `fetch` reads the store. It is called with the primary key, and a second
    /// time with the variant key only when the root entry varies.
    pub fn lookup<B, E, F>(&self, host: &HttpHost, request: &Request<B>, mut fetch: F) -> Lookup<E>
    where
        E: Borrow<CacheEntry>,
        F: FnMut(&CacheKey) -> Option<E>,
    {
        let primary = self.primary(host, request);
        let Some(root) = fetch(&primary) else {
            tracing::debug!(target: "varykey::keyer", key = %primary, "no root entry");
            return Lookup::Miss { key: primary };
        };

        if !root.borrow().varies() {
            tracing::debug!(target: "varykey::keyer", key = %primary, "root entry hit");
            return Lookup::Hit { key: primary, entry: root };
        }

        let variant = self.variant(host, request, root.borrow());
        match fetch(&variant) {
            Some(entry) => {
                tracing::debug!(target: "varykey::keyer", key = %variant, "variant entry hit");
                Lookup::Hit { key: variant, entry }
            }
            None => {
                tracing::debug!(target: "varykey::keyer", key = %variant, "no entry for negotiated variant");
                Lookup::Miss { key: variant }
            }
        }
    }

    /// Keys to file a freshly received response under.
    ///
    /// The root key is always the primary key. A response that declares `Vary`
    /// is additionally filed under its variant key, which the root entry should
    /// then record with [`CacheEntry::record_variant`].
    pub fn storage_keys<B>(&self, host: &HttpHost, request: &Request<B>, response: &CacheEntry) -> StorageKeys {
        let root = self.primary(host, request);
        let variant = response
            .varies()
            .then(|| self.variant(host, request, response));
        StorageKeys { root, variant }
    }
}

/// Outcome of [`CacheKeyer::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<E> {
    /// An entry was found under `key`.
    Hit { key: CacheKey, entry: E },
    /// Nothing usable is stored. `key` is the last key fetched: the variant key
    /// when the root entry varies, the primary key otherwise.
    Miss { key: CacheKey },
}

impl<E> Lookup<E> {
    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit { .. })
    }

    #[must_use]
    pub fn key(&self) -> &CacheKey {
        match self {
            Lookup::Hit { key, .. } | Lookup::Miss { key } => key,
        }
    }

    #[must_use]
    pub fn entry(&self) -> Option<&E> {
        match self {
            Lookup::Hit { entry, .. } => Some(entry),
            Lookup::Miss { .. } => None,
        }
    }

    #[must_use]
    pub fn into_entry(self) -> Option<E> {
        match self {
            Lookup::Hit { entry, .. } => Some(entry),
            Lookup::Miss { .. } => None,
        }
    }
}

/// Keys returned by [`CacheKeyer::storage_keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Primary key of the resource.
    pub root: CacheKey,
    /// Variant key, present when the response declares `Vary`.
    pub variant: Option<CacheKey>,
}
