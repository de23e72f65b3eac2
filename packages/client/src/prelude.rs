//! Prelude
//!
//! The types and functions a cache store needs to derive keys.

pub use crate::cache::{CacheEntry, CacheKey, primary_key, variant_key, variant_key_for_vary};
pub use crate::error::{Error, Result};
pub use crate::http::HttpHost;
