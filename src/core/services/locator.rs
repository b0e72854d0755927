use std::io::{BufRead, Write};

use crate::core::errors::{Result, TrustError};
use crate::core::models::app_identifier::AppIdentifier;
use crate::core::models::trust_options::TrustOptions;
use crate::core::services::operator::Operator;
use crate::core::traits::discovery::KeyDiscovery;

/// Resolves the key locations a batch will process.
pub struct Locator<'a, D: KeyDiscovery + ?Sized> {
    pub discovery: &'a D,
}

impl<D: KeyDiscovery + ?Sized> Locator<'_, D> {
    /// Explicit locations win; otherwise discover them under `prefix`.
    pub fn resolve_locations<R: BufRead, W: Write>(
        &self,
        explicit: &[String],
        prefix: &str,
        options: &TrustOptions,
        operator: &mut Operator<R, W>,
    ) -> Result<Vec<String>> {
        if !explicit.is_empty() {
            return Ok(explicit.to_vec());
        }

        if prefix.is_empty() {
            return Err(TrustError::MissingInput);
        }

        let app = AppIdentifier::parse(prefix).map_err(|e| TrustError::Discovery {
            prefix: prefix.to_string(),
            reason: e.to_string(),
        })?;

        let found = self
            .discovery
            .discover(&app, options.allow_insecure_http)
            .map_err(|e| TrustError::Discovery {
                prefix: prefix.to_string(),
                reason: e.to_string(),
            })?;

        if options.debug {
            for a in &found.attempts {
                operator.say(&format!(
                    "meta tag 'ac-discovery-pubkeys' not found on {}: {}",
                    a.prefix, a.error
                ))?;
            }
        }

        if found.key_locations.is_empty() {
            return Err(TrustError::NoKeysDiscovered {
                prefix: prefix.to_string(),
            });
        }

        Ok(found.key_locations)
    }
}
