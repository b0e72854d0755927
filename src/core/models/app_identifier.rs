use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::errors::{Result, TrustError};

/// Lower-case identifier: alphanumeric runs joined by `-`, `.`, `_`, `~` or `/`.
fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+([-._~/][a-z0-9]+)*$").expect("static regex is valid")
    })
}

/// Check that `name` is a valid identifier for discovery and for use as a
/// trust-store directory.
pub fn validate_name(name: &str) -> Result<()> {
    if name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(TrustError::InvalidPrefix {
            prefix: name.to_string(),
            reason: "must be lower-case alphanumerics separated by one of '-._~/'".into(),
        })
    }
}

/// Canonical application identifier used for prefix discovery.
///
/// Accepts `name`, `name:version` and trailing `,label=value` pairs, e.g.
/// `example.com/app:1.0.0,os=linux`. Labels are checked for shape only;
/// key discovery depends on the name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentifier {
    pub name: String,
}

impl AppIdentifier {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| TrustError::InvalidPrefix {
            prefix: input.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = input.split(',');
        let head = parts.next().unwrap_or_default();
        let mut labels = BTreeSet::new();

        let name = match head.split_once(':') {
            Some((name, version)) => {
                if version.is_empty() {
                    return Err(invalid("empty version after ':'"));
                }
                labels.insert("version");
                name
            }
            None => head,
        };
        validate_name(name)?;

        for part in parts {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| invalid(&format!("label '{part}' is not key=value")))?;
            if key.is_empty() || value.is_empty() {
                return Err(invalid(&format!("label '{part}' is not key=value")));
            }
            if !labels.insert(key) {
                return Err(invalid(&format!("label '{key}' given twice")));
            }
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Path prefixes of the name, longest first:
    /// `example.com/a/b`, `example.com/a`, `example.com`.
    pub fn walk_prefixes(&self) -> Vec<&str> {
        let mut prefixes = vec![self.name.as_str()];
        let mut rest = self.name.as_str();
        while let Some((head, _)) = rest.rsplit_once('/') {
            prefixes.push(head);
            rest = head;
        }
        prefixes
    }
}
