//! Errors raised while turning collaborator input into key material.
//!
//! Key derivation itself never fails. These errors only come from building an
//! [`HttpHost`](crate::http::HttpHost) out of a URI or string that lacks the
//! pieces a host needs.

/// A Result alias where the Err case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("URI has no scheme: {0}")]
    MissingScheme(String),
    #[error("URI has no host: {0}")]
    MissingHost(String),
    #[error("invalid URI `{input}`: {reason}")]
    InvalidUri { input: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_uri(input: &str, reason: impl ToString) -> Self {
        Error::InvalidUri {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
