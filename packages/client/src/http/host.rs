//! Origin host identity, the leading part of every cache key.

use std::fmt;
use std::str::FromStr;

use http::Uri;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Target host of a request: scheme, hostname and an optional port.
///
/// The canonical form is `scheme://hostname[:port]`. Scheme and hostname are
/// lower-cased on construction. The port is printed whenever one was given,
/// default ports included, so `http://example.com` and `http://example.com:80`
/// are different hosts as far as cache keys are concerned.
///
/// ```
/// use varykey_core::http::HttpHost;
///
/// let host = HttpHost::new("HTTP", "Example.COM").with_port(8080);
/// assert_eq!(host.to_string(), "http://example.com:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "HostParts")]
pub struct HttpHost {
    scheme: String,
    hostname: String,
    port: Option<u16>,
}

/// Wire form of [`HttpHost`]; deserialized hosts go through [`HttpHost::new`]
/// so they come out lower-cased like every other host.
#[derive(Deserialize)]
struct HostParts {
    scheme: String,
    hostname: String,
    port: Option<u16>,
}

impl From<HostParts> for HttpHost {
    fn from(parts: HostParts) -> Self {
        let host = Self::new(&parts.scheme, &parts.hostname);
        match parts.port {
            Some(port) => host.with_port(port),
            None => host,
        }
    }
}

impl HttpHost {
    /// Create a host without an explicit port.
    #[must_use]
    pub fn new(scheme: &str, hostname: &str) -> Self {
        Self {
            scheme: scheme.to_ascii_lowercase(),
            hostname: hostname.to_ascii_lowercase(),
            port: None,
        }
    }

    /// Set an explicit port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for HttpHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.hostname)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl TryFrom<&Uri> for HttpHost {
    type Error = Error;

    /// Take scheme, host and port from an absolute URI. Path and query are ignored.
    fn try_from(uri: &Uri) -> Result<Self> {
        let scheme = uri
            .scheme_str()
            .ok_or_else(|| Error::MissingScheme(uri.to_string()))?;
        let hostname = uri
            .host()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| Error::MissingHost(uri.to_string()))?;

        let host = Self::new(scheme, hostname);
        Ok(match uri.port_u16() {
            Some(port) => host.with_port(port),
            None => host,
        })
    }
}

impl TryFrom<&Url> for HttpHost {
    type Error = Error;

    /// `Url` drops ports that match the scheme default, so those never show
    /// up in the resulting host.
    fn try_from(url: &Url) -> Result<Self> {
        let hostname = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| Error::MissingHost(url.to_string()))?;

        let host = Self::new(url.scheme(), hostname);
        Ok(match url.port() {
            Some(port) => host.with_port(port),
            None => host,
        })
    }
}

impl FromStr for HttpHost {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let uri: Uri = s.parse().map_err(|e| Error::invalid_uri(s, e))?;
        Self::try_from(&uri)
    }
}
