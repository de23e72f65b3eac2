//! Form encoding for variant key components.
//!
//! Uses the `application/x-www-form-urlencoded` byte serializer: ASCII
//! alphanumerics and `*-._` pass through, space becomes `+`, and every other
//! byte is written as an upper-case `%XX` escape. Text is encoded through its
//! UTF-8 bytes; header values are encoded from their raw bytes. The serializer
//! is total over bytes, so encoding has no failure path.

use url::form_urlencoded;

/// Form-encode `input` into a new string.
#[must_use]
pub fn form_encode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

/// Form-encode `input` onto the end of `buf`.
pub fn push_form_encoded(buf: &mut String, input: &str) {
    buf.extend(form_urlencoded::byte_serialize(input.as_bytes()));
}

/// Form-encode raw bytes onto the end of `buf`.
pub fn push_form_encoded_bytes(buf: &mut String, input: &[u8]) {
    buf.extend(form_urlencoded::byte_serialize(input));
}

/// Decode `name=value` pairs joined by `&`, the inverse of [`form_encode`]
/// applied to both halves of each pair.
#[must_use]
pub fn form_decode_pairs(input: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(input.as_bytes())
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

/// Decode `name=value` pairs joined by `&` back to the exact bytes that were
/// encoded, without any UTF-8 interpretation.
#[must_use]
pub fn form_decode_pairs_raw(input: &str) -> Vec<(Vec<u8>, Vec<u8>)> {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode_bytes(name), form_decode_bytes(value))
        })
        .collect()
}

// The serializer escapes a literal `+`, so every `+` in its output is a space.
fn form_decode_bytes(encoded: &str) -> Vec<u8> {
    let spaced: Vec<u8> = encoded
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();
    urlencoding::decode_binary(&spaced).into_owned()
}
