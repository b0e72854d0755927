/// A 20-byte OpenPGP v4 fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub [u8; 20]);

impl Fingerprint {
    /// Lower-case hex without separators, used as a trust-store file name.
    pub fn to_file_name(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl TryFrom<&[u8]> for Fingerprint {
    type Error = usize;

    /// Fails with the actual length when it is not 20 bytes.
    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        <[u8; 20]>::try_from(bytes)
            .map(Self)
            .map_err(|_| bytes.len())
    }
}

/// GPG-style grouping: pairs of bytes separated by a space, with a double
/// space after the tenth byte.
///
/// `DC55 6D6C 97EB 44D5 90DB  27EB 5A9F 303C 35BE A4F5`
impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 && i % 2 == 0 {
                f.write_str(" ")?;
                if i == 10 {
                    f.write_str(" ")?;
                }
            }
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

/// One key from an armored key ring, reduced to what an operator reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub fingerprint: Fingerprint,
    pub subkeys: Vec<Fingerprint>,
    pub identities: Vec<String>,
}

/// Keys parsed from armored data. Display-only: the trust store keeps the
/// original armored bytes, never this form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedKeyRing {
    pub keys: Vec<ParsedKey>,
}

impl ParsedKeyRing {
    /// Summary lines for the operator, one key after another.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for key in &self.keys {
            lines.push(format!("GPG key fingerprint is: {}", key.fingerprint));
            for sk in &key.subkeys {
                lines.push(format!("    Subkey fingerprint: {sk}"));
            }
            for id in &key.identities {
                lines.push(format!("\t{id}"));
            }
        }
        lines
    }
}
