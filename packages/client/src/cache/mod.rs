//! HTTP response cache key derivation
//!
//! This module provides the keys a response cache files entries under:
//! - `primary_key`: resource identity, host plus request-target
//! - `variant_key`: primary key refined by the request header values named in
//!   a stored entry's `Vary` header
//! - `header_value`: combining repeated header lines into one value
//! - `vary`: canonical, order-independent parsing of `Vary`
//!
//! Everything here is a pure function of its inputs and safe to call from any
//! number of threads.

pub mod cache_entry;
pub mod cache_key;
pub mod header_value;
pub mod key_derivation;
pub mod vary;

// Re-export all public types and functions
pub use cache_entry::CacheEntry;
pub use cache_key::CacheKey;
pub use header_value::{normalize, normalize_header_values};
pub use key_derivation::{primary_key, variant_key, variant_key_for_vary};
pub use vary::{parse_vary, vary_header_names};
