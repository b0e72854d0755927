use std::io::Read;

use crate::core::errors::Result;
use crate::core::models::key_ring::ParsedKeyRing;

/// Port for OpenPGP key-ring parsing.
///
/// Parsing is pure: bytes in, display model out. Callers own positioning
/// of the reader.
pub trait KeyRingParser {
    /// Parse ASCII-armored key data. Fails with `TrustError::Parse`.
    fn parse(&self, armored: &mut dyn Read) -> Result<ParsedKeyRing>;
}
