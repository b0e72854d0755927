use std::path::PathBuf;

use url::Url;

use crate::core::errors::{Result, TrustError};

/// Where the bytes of a key can be obtained, resolved once from the
/// operator-supplied string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyLocation {
    /// A filesystem path (the input carried no scheme).
    Local(PathBuf),
    /// An `http` or `https` URL. `plaintext` is set for `http`.
    Remote { url: Url, plaintext: bool },
}

impl KeyLocation {
    /// Resolve a location string into its variant.
    ///
    /// Strings that do not parse as an absolute URL are treated as paths,
    /// so `./key.asc` and `/etc/keys/a.asc` both become `Local`.
    pub fn parse(location: &str) -> Result<Self> {
        match Url::parse(location) {
            Ok(url) => match url.scheme() {
                "https" => Ok(Self::Remote {
                    url,
                    plaintext: false,
                }),
                "http" => Ok(Self::Remote {
                    url,
                    plaintext: true,
                }),
                other => Err(TrustError::UnsupportedScheme {
                    scheme: other.to_string(),
                }),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                if location.is_empty() {
                    return Err(TrustError::InvalidLocation {
                        location: location.to_string(),
                        reason: "empty location".into(),
                    });
                }
                Ok(Self::Local(PathBuf::from(location)))
            }
            Err(e) => Err(TrustError::InvalidLocation {
                location: location.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
