use std::path::PathBuf;

use crate::adapters::parsers::armored_key_parser::ArmoredKeyParser;
use crate::adapters::trust_stores::file_trust_store::FileTrustStore;
use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

/// Settings resolved once per invocation: CLI flag or env var first,
/// then the config file, then built-in defaults.
#[derive(Debug, Clone)]
pub struct Context {
    pub system_config_dir: PathBuf,
    pub user_config_dir: PathBuf,
    pub insecure_allow_http: bool,
}

impl Context {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = AppConfig::load(cli.config.as_deref())?;

        Ok(Self {
            system_config_dir: cli
                .system_config
                .clone()
                .unwrap_or(config.trust.system_config_dir),
            user_config_dir: cli
                .user_config
                .clone()
                .unwrap_or(config.trust.user_config_dir),
            insecure_allow_http: config.trust.insecure_allow_http,
        })
    }

    /// The on-disk trust store rooted at the resolved directories.
    pub fn trust_store(&self) -> FileTrustStore<ArmoredKeyParser> {
        FileTrustStore::new(
            self.system_config_dir.clone(),
            self.user_config_dir.clone(),
            ArmoredKeyParser::new(),
        )
    }
}
