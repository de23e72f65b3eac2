//! `Vary` header parsing.
//!
//! The names listed by `Vary` form a set: the origin may list them in any
//! order, repeat them, or spread them over several header lines. Parsing
//! produces one canonical ordering so the variant key only depends on which
//! names are present.

use std::collections::BTreeSet;

use http::header::VARY;
use http::{HeaderMap, HeaderValue};

use super::header_value::header_text;

/// Distinct header names listed by every `Vary` line in `headers`.
#[must_use]
pub fn vary_header_names(headers: &HeaderMap) -> BTreeSet<String> {
    parse_vary(headers.get_all(VARY))
}

/// Parse raw `Vary` values into a set of header names.
///
/// Each value is a comma-separated element list. An element's name is its
/// leading token, the text before any `=` or `;`, trimmed. Empty elements are
/// skipped. The set orders names byte-wise and case-sensitively, so `Accept`
/// and `accept` are two names.
pub fn parse_vary<'a, I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a HeaderValue>,
{
    let mut names = BTreeSet::new();
    for value in values {
        let text = header_text(value);
        for element in text.split(',') {
            if let Some(name) = element_name(element) {
                names.insert(name.to_string());
            }
        }
    }

    tracing::trace!(
        target: "varykey::cache::vary",
        vary_headers = names.len(),
        "parsed Vary header names"
    );
    names
}

fn element_name(element: &str) -> Option<&str> {
    let end = element.find(['=', ';']).unwrap_or(element.len());
    let name = element[..end].trim_matches([' ', '\t']);
    (!name.is_empty()).then_some(name)
}
