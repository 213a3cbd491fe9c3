//! Gateway URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for the remote data gateway.
///
/// The gateway is a PostgREST-style query service: each record collection is
/// addressed as a path segment under the base URL. For a hosted service the
/// base typically already contains the REST root (e.g.
/// `https://abc.example.co/rest/v1`).
///
/// # Example
///
/// ```
/// use registro_core::GatewayUrl;
///
/// let gw = GatewayUrl::new("https://db.example.org/rest/v1").unwrap();
/// assert_eq!(gw.table_url("people"), "https://db.example.org/rest/v1/people");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GatewayUrl(Url);

impl GatewayUrl {
    /// Create a new gateway URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute, has no host, or uses a
    /// scheme other than HTTPS (HTTP is allowed for localhost only).
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::GatewayUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the endpoint URL for a record collection.
    pub fn table_url(&self, table: &str) -> String {
        // The url crate keeps a trailing slash on root paths; trim so the
        // joined path never contains `//`.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, table)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::GatewayUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::GatewayUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::GatewayUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for GatewayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GatewayUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for GatewayUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for GatewayUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        GatewayUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for GatewayUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let gw = GatewayUrl::new("https://db.example.org").unwrap();
        assert_eq!(gw.host(), Some("db.example.org"));
    }

    #[test]
    fn valid_localhost_http() {
        let gw = GatewayUrl::new("http://localhost:3000").unwrap();
        assert_eq!(gw.host(), Some("localhost"));
    }

    #[test]
    fn table_url_construction() {
        let gw = GatewayUrl::new("https://db.example.org/rest/v1").unwrap();
        assert_eq!(gw.table_url("people"), "https://db.example.org/rest/v1/people");
    }

    #[test]
    fn normalizes_trailing_slash_in_table_url() {
        let gw = GatewayUrl::new("https://db.example.org/").unwrap();
        assert_eq!(gw.table_url("people"), "https://db.example.org/people");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(GatewayUrl::new("http://db.example.org").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(GatewayUrl::new("/rest/v1/people").is_err());
    }

    #[test]
    fn invalid_scheme() {
        assert!(GatewayUrl::new("ftp://db.example.org").is_err());
    }
}
