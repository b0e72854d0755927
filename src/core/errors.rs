use std::path::PathBuf;

/// All domain errors for keytrust.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger. The `Key*` variants wrap a per-location
/// failure and name the location that aborted the batch.
#[derive(Debug, thiserror::Error)]
pub enum TrustError {
    #[error(
        "At least one key or --prefix required\n\n  \
         Pass key locations explicitly: keytrust trust --root ./key.asc\n  \
         Or let keytrust discover them: keytrust trust --prefix example.com/app"
    )]
    MissingInput,

    #[error(
        "--root required for non-prefixed (root) keys\n\n  \
         Root keys are trusted for every prefix. Pass --root to confirm,\n  \
         or limit trust with --prefix example.com/app."
    )]
    RootNotRequested,

    #[error("Invalid prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("--prefix meta discovery error on '{prefix}': {reason}")]
    Discovery { prefix: String, reason: String },

    #[error(
        "Meta discovery on '{prefix}' resulted in no keys\n\n  \
         Run again with --debug to see every discovery attempt."
    )]
    NoKeysDiscovered { prefix: String },

    #[error("Key file not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid key location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    #[error("Unsupported scheme '{scheme}': only http and https URLs are supported")]
    UnsupportedScheme { scheme: String },

    #[error(
        "--insecure-allow-http required for http URLs\n\n  \
         Refusing to fetch {location} over plaintext HTTP."
    )]
    InsecureTransport { location: String },

    #[error("Error getting key from {location}: {reason}")]
    Transport { location: String, reason: String },

    #[error("Failed to create HTTP client: {reason}")]
    HttpClient { reason: String },

    #[error("Bad HTTP status code: {code}")]
    HttpStatus { code: u16 },

    #[error("Error reading key: {reason}")]
    Parse { reason: String },

    #[error("Error reading input: {reason}")]
    Input { reason: String },

    #[error("Trust store rejected key for {scope}: {source}")]
    Store {
        scope: String,
        #[source]
        source: Box<TrustError>,
    },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Error accessing key {location:?}: {source}")]
    KeyAccess {
        location: String,
        #[source]
        source: Box<TrustError>,
    },

    #[error("Error reviewing key {location:?}: {source}")]
    KeyReview {
        location: String,
        #[source]
        source: Box<TrustError>,
    },

    #[error("Error adding key {location:?}: {source}")]
    KeyStore {
        location: String,
        #[source]
        source: Box<TrustError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrustError>;
