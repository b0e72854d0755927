use std::io::{BufRead, Write};

use crate::core::errors::{Result, TrustError};
use crate::core::models::trust_options::TrustOptions;
use crate::core::models::trust_scope::TrustScope;
use crate::core::services::operator::Operator;
use crate::core::services::registrar::Registrar;
use crate::core::services::reviewer::Reviewer;
use crate::core::traits::key_fetcher::KeyFetcher;
use crate::core::traits::key_parser::KeyRingParser;
use crate::core::traits::trust_store::TrustStore;

/// Drives fetch, review and registration for a batch of key locations.
pub struct TrustService<F: KeyFetcher, P: KeyRingParser, S: TrustStore> {
    pub fetcher: F,
    pub parser: P,
    pub store: S,
}

impl<F: KeyFetcher, P: KeyRingParser, S: TrustStore> TrustService<F, P, S> {
    /// Process `locations` in order under `scope`.
    ///
    /// The first fetch, review or store failure aborts the whole batch.
    /// A rejected key is skipped.
    pub fn add_keys<R: BufRead, W: Write>(
        &self,
        locations: &[String],
        scope: &TrustScope,
        options: &TrustOptions,
        operator: &mut Operator<R, W>,
    ) -> Result<()> {
        let reviewer = Reviewer {
            parser: &self.parser,
        };
        let registrar = Registrar { store: &self.store };

        for location in locations {
            // Dropped at the end of each iteration, closing the handle.
            let mut key = self
                .fetcher
                .fetch(location, options.allow_insecure_http)
                .map_err(|e| TrustError::KeyAccess {
                    location: location.clone(),
                    source: Box::new(e),
                })?;

            let accepted = reviewer
                .review(scope, location, &mut key, options.force_accept, operator)
                .map_err(|e| TrustError::KeyReview {
                    location: location.clone(),
                    source: Box::new(e),
                })?;

            if !accepted {
                operator.say(&format!("Not trusting {location:?}"))?;
                continue;
            }

            let review = if options.force_accept {
                "without fingerprint review"
            } else {
                "after fingerprint review"
            };
            operator.say(&format!(
                "Trusting {location:?} for prefix {:?} {review}.",
                scope.prefix()
            ))?;

            registrar
                .register(scope, &mut key, operator)
                .map_err(|e| TrustError::KeyStore {
                    location: location.clone(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }
}
