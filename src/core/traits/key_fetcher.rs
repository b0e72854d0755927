use crate::core::errors::Result;
use crate::core::models::key_source::KeySource;

/// Port for turning a key location string into readable key bytes.
pub trait KeyFetcher {
    /// Fetch the key at `location`. The returned source is positioned at
    /// offset 0 and holds the complete key.
    fn fetch(&self, location: &str, allow_insecure_http: bool) -> Result<KeySource>;
}
