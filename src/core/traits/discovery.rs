use crate::core::errors::Result;
use crate::core::models::app_identifier::AppIdentifier;
use crate::core::models::discovery::DiscoveredKeys;

/// Port for prefix-based public key discovery.
///
/// Implementations live in `adapters::discovery`. An `Err` means discovery
/// itself could not run; a walk that merely found nothing returns `Ok` with
/// no locations and the failed attempts.
pub trait KeyDiscovery {
    fn discover(&self, app: &AppIdentifier, allow_insecure_http: bool) -> Result<DiscoveredKeys>;
}
