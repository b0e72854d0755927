/// A discovery step that did not produce keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryAttempt {
    pub prefix: String,
    pub error: String,
}

/// Result of a discovery walk: the key locations found plus every failed step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredKeys {
    pub key_locations: Vec<String>,
    pub attempts: Vec<DiscoveryAttempt>,
}
