use tokio::runtime::Runtime;

use crate::core::errors::{Result, TrustError};

/// Build the reqwest client used for key fetches and discovery.
///
/// No request timeout is set; fetches are bounded by the transport alone.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("keytrust/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TrustError::HttpClient {
            reason: e.to_string(),
        })
}

/// A single-threaded runtime to drive one blocking call at a time.
pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(TrustError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_and_runtime_build() {
        assert!(build_client().is_ok());
        assert!(runtime().is_ok());
    }

    #[test]
    fn client_error_names_no_location() {
        let err = TrustError::HttpClient {
            reason: "no TLS backend".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create HTTP client: no TLS backend"
        );
    }
}
