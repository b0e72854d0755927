use std::io::{BufReader, Read};

use pgp::types::PublicKeyTrait;
use pgp::{Deserializable, SignedPublicKey};

use crate::core::errors::{Result, TrustError};
use crate::core::models::key_ring::{Fingerprint, ParsedKey, ParsedKeyRing};
use crate::core::traits::key_parser::KeyRingParser;

/// Parses ASCII-armored OpenPGP public key rings with rPGP.
#[derive(Debug, Default, Clone)]
pub struct ArmoredKeyParser;

impl ArmoredKeyParser {
    pub fn new() -> Self {
        Self
    }

    fn fingerprint(key: &impl PublicKeyTrait) -> Result<Fingerprint> {
        let fpr = key.fingerprint();
        Fingerprint::try_from(fpr.as_bytes()).map_err(|len| TrustError::Parse {
            reason: format!("unsupported {len}-byte fingerprint (only v4 keys are supported)"),
        })
    }

    fn summarize(key: &SignedPublicKey) -> Result<ParsedKey> {
        let subkeys = key
            .public_subkeys
            .iter()
            .map(|sk| Self::fingerprint(&sk.key))
            .collect::<Result<Vec<_>>>()?;

        let identities = key
            .details
            .users
            .iter()
            .map(|user| String::from_utf8_lossy(user.id.id().as_ref()).into_owned())
            .collect();

        Ok(ParsedKey {
            fingerprint: Self::fingerprint(&key.primary_key)?,
            subkeys,
            identities,
        })
    }
}

impl KeyRingParser for ArmoredKeyParser {
    fn parse(&self, armored: &mut dyn Read) -> Result<ParsedKeyRing> {
        let parse_err = |e: pgp::errors::Error| TrustError::Parse {
            reason: e.to_string(),
        };

        let (keys, _headers) =
            SignedPublicKey::from_armor_many(BufReader::new(armored)).map_err(parse_err)?;

        let mut ring = ParsedKeyRing::default();
        for key in keys {
            let key = key.map_err(parse_err)?;
            ring.keys.push(Self::summarize(&key)?);
        }
        Ok(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_1: &str = include_str!("../../../tests/fixtures/signing-key-1.asc");
    const KEYRING: &str = include_str!("../../../tests/fixtures/signing-keyring.asc");

    fn parse(data: &str) -> Result<ParsedKeyRing> {
        ArmoredKeyParser::new().parse(&mut data.as_bytes())
    }

    #[test]
    fn parses_fingerprints_and_identities() {
        let ring = parse(KEY_1).unwrap();
        assert_eq!(ring.keys.len(), 1);

        let key = &ring.keys[0];
        assert_eq!(
            key.fingerprint.to_string(),
            "9AF8 A392 9BDB 993A 5160  BCAC E319 57F2 E922 70A2"
        );
        assert_eq!(key.subkeys.len(), 1);
        assert_eq!(
            key.subkeys[0].to_string(),
            "EECC D0CD B1DA 0ADB 242E  F8E8 6E06 73D0 3C22 1977"
        );
        assert_eq!(key.identities.len(), 2);
        assert!(
            key.identities
                .contains(&"Example Signing Key 1 <signing1@example.com>".to_string())
        );
        assert!(
            key.identities
                .contains(&"Example Releases <releases@example.com>".to_string())
        );
    }

    #[test]
    fn parses_every_key_in_a_ring() {
        let ring = parse(KEYRING).unwrap();
        let primaries: Vec<String> = ring
            .keys
            .iter()
            .map(|k| k.fingerprint.to_file_name())
            .collect();
        assert_eq!(
            primaries,
            vec![
                "9af8a3929bdb993a5160bcace31957f2e92270a2",
                "5ff87cf58bbde3ef5ccd37c5fb839073687a003b",
            ]
        );
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse("this is not a key\n").unwrap_err();
        assert!(matches!(err, TrustError::Parse { .. }));
    }
}
