//! Collaborator-facing HTTP pieces: host identity, request-target and the
//! fixed form encoding used inside variant keys.

pub mod escape;
pub mod host;
pub mod request_target;

pub use escape::{
    form_decode_pairs, form_decode_pairs_raw, form_encode, push_form_encoded, push_form_encoded_bytes,
};
pub use host::HttpHost;
pub use request_target::request_target;
