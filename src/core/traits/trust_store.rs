use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::models::key_source::KeySource;

/// Port for the durable, scope-partitioned store of trusted keys.
///
/// Both operations read `key` from its current position and return the
/// path the key was written to.
pub trait TrustStore {
    /// Store a key trusted for every prefix.
    fn store_root_key(&self, key: &mut KeySource) -> Result<PathBuf>;

    /// Store a key trusted only under `prefix`.
    fn store_key_for_prefix(&self, prefix: &str, key: &mut KeySource) -> Result<PathBuf>;
}
