use std::fs::File;
use std::io::{self, Write};

use url::Url;

use crate::adapters::http::client;
use crate::core::errors::{Result, TrustError};
use crate::core::models::key_location::KeyLocation;
use crate::core::models::key_source::KeySource;
use crate::core::traits::key_fetcher::KeyFetcher;

/// Fetches keys from local paths or over http(s).
///
/// Remote bodies are streamed into an anonymous temp file so a fetched
/// key never appears under a name on disk.
#[derive(Debug, Default, Clone)]
pub struct RemoteKeyFetcher;

impl RemoteKeyFetcher {
    pub fn new() -> Self {
        Self
    }

    fn open_local(path: &std::path::Path) -> Result<KeySource> {
        let file = File::open(path).map_err(|e| TrustError::NotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(KeySource::from_file(file))
    }

    fn download(url: &Url) -> Result<KeySource> {
        let transport = |reason: String| TrustError::Transport {
            location: url.to_string(),
            reason,
        };

        let rt = client::runtime()?;
        rt.block_on(async {
            let http = client::build_client()?;
            let mut resp = http
                .get(url.clone())
                .send()
                .await
                .map_err(|e| transport(e.to_string()))?;

            if resp.status() != reqwest::StatusCode::OK {
                return Err(TrustError::HttpStatus {
                    code: resp.status().as_u16(),
                });
            }

            let mut source = KeySource::anonymous()?;
            while let Some(chunk) = resp.chunk().await.map_err(io::Error::other)? {
                source.write_all(&chunk)?;
            }
            source.flush()?;
            source.rewind()?;
            Ok(source)
        })
    }
}

impl KeyFetcher for RemoteKeyFetcher {
    fn fetch(&self, location: &str, allow_insecure_http: bool) -> Result<KeySource> {
        match KeyLocation::parse(location)? {
            KeyLocation::Local(path) => Self::open_local(&path),
            KeyLocation::Remote { plaintext: true, .. } if !allow_insecure_http => {
                Err(TrustError::InsecureTransport {
                    location: location.to_string(),
                })
            }
            KeyLocation::Remote { url, .. } => Self::download(&url),
        }
    }
}
