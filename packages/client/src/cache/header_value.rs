//! Header value normalization.
//!
//! One logical header can arrive as several header lines. The variant key
//! needs a single value per header, built from those lines in the order the
//! request carries them.
//!
//! Only SP and HTAB count as surrounding whitespace. Header values are
//! combined as raw bytes so that distinct byte sequences never collapse into
//! the same key.

use std::borrow::Cow;

use http::HeaderValue;

/// Separator placed between the values of repeated header lines.
pub const VALUE_SEPARATOR: &str = ", ";

const OPTIONAL_WHITESPACE: [char; 2] = [' ', '\t'];

/// Trim SP/HTAB from every value and join them with `", "` in the given order.
///
/// No reordering, deduplication or case folding happens. An empty input gives
/// the empty string.
///
/// ```
/// use varykey_core::cache::header_value::normalize;
///
/// assert_eq!(normalize([" gzip", "deflate\t"]), "gzip, deflate");
/// assert_eq!(normalize(Vec::<&str>::new()), "");
/// ```
pub fn normalize<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut combined = String::new();
    for (index, value) in values.into_iter().enumerate() {
        if index > 0 {
            combined.push_str(VALUE_SEPARATOR);
        }
        combined.push_str(value.trim_matches(OPTIONAL_WHITESPACE));
    }
    combined
}

/// [`normalize`] over `http` header values, e.g. `headers.get_all(name)`,
/// working on the raw value bytes.
pub fn normalize_header_values<'a, I>(values: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a HeaderValue>,
{
    let mut combined = Vec::new();
    for (index, value) in values.into_iter().enumerate() {
        if index > 0 {
            combined.extend_from_slice(VALUE_SEPARATOR.as_bytes());
        }
        combined.extend_from_slice(trim_optional_whitespace(value.as_bytes()));
    }
    combined
}

fn trim_optional_whitespace(bytes: &[u8]) -> &[u8] {
    let is_ows = |b: &u8| matches!(b, b' ' | b'\t');
    let start = bytes.iter().position(|b| !is_ows(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_ows(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Text of a header value with every byte read as one ISO-8859-1 character.
///
/// The mapping is total and injective: different byte sequences always give
/// different strings.
#[must_use]
pub fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    if bytes.is_ascii() {
        // ASCII reads the same under ISO-8859-1 and UTF-8.
        return String::from_utf8_lossy(bytes);
    }
    Cow::Owned(bytes.iter().copied().map(char::from).collect())
}
