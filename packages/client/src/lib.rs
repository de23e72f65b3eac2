//! # varykey core
//!
//! Cache key derivation for HTTP response caches.
//!
//! A cache files each response under a **primary key** naming the resource
//! (`scheme://host[:port]` followed by the request-target). When the stored
//! response declares `Vary`, the negotiated representation lives under a
//! **variant key**: the request's values for the varying headers, sorted by
//! header name and form encoded inside `{...}`, followed by the primary key.
//!
//! ## Usage
//!
//! ```
//! use http::{HeaderMap, HeaderValue, Request, StatusCode, header};
//! use varykey_core::prelude::*;
//!
//! let host = HttpHost::new("http", "example.com");
//! let request = Request::get("/resource")
//!     .header(header::ACCEPT_LANGUAGE, "en-US")
//!     .body(())
//!     .unwrap();
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::VARY, HeaderValue::from_static("Accept-Language"));
//! let entry = CacheEntry::new(StatusCode::OK, headers);
//!
//! assert_eq!(primary_key(&host, &request), "http://example.com/resource");
//! assert_eq!(
//!     variant_key(&host, &request, &entry),
//!     "{Accept-Language=en-US}http://example.com/resource"
//! );
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod cache;
pub mod error;
pub mod http;

pub mod prelude;

pub use crate::cache::{primary_key, variant_key, variant_key_for_vary};
pub use crate::error::{Error, Result};
