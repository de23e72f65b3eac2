//! varykey public API
//!
//! Vary-aware cache keys for HTTP response caches. [`CacheKeyer`] sequences
//! the primary/variant reads a store makes; the free functions expose the two
//! key derivations directly.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use http::{HeaderMap, HeaderValue, Request, StatusCode, header};
//! use varykey::{CacheEntry, CacheKey, CacheKeyer, HttpHost};
//!
//! let keyer = CacheKeyer::new();
//! let host = HttpHost::new("https", "example.com");
//! let request = Request::get("/page").header(header::ACCEPT_LANGUAGE, "fr").body(()).unwrap();
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::VARY, HeaderValue::from_static("Accept-Language"));
//! let response = CacheEntry::new(StatusCode::OK, headers);
//!
//! let mut store: HashMap<CacheKey, CacheEntry> = HashMap::new();
//! let keys = keyer.storage_keys(&host, &request, &response);
//! if let Some(variant) = keys.variant {
//!     store.insert(variant, response.clone());
//! }
//! store.insert(keys.root, response);
//!
//! let found = keyer.lookup(&host, &request, |key| store.get(key));
//! assert_eq!(found.key().as_str(), "{Accept-Language=fr}https://example.com/page");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod keyer;

pub use keyer::{CacheKeyer, Lookup, StorageKeys};

// Re-export important types from the core package
pub use varykey_core::cache::{CacheEntry, CacheKey, primary_key, variant_key, variant_key_for_vary};
pub use varykey_core::http::HttpHost;
pub use varykey_core::{Error, Result};
