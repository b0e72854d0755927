use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, TrustError};

/// System-wide trust store root, normally populated by packaging.
pub const DEFAULT_SYSTEM_CONFIG_DIR: &str = "/usr/lib/keytrust";

/// Local trust store root, the one `keytrust trust` writes to.
pub const DEFAULT_USER_CONFIG_DIR: &str = "/etc/keytrust";

/// Top-level keytrust configuration read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub trust: TrustSection,
}

impl AppConfig {
    /// Default location: `<config dir>/keytrust/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("keytrust").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the default path is read
    /// if present and built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(TrustError::InvalidConfig {
                        detail: format!("{} not found", path.display()),
                    });
                }
                Self::load_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TrustError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })
    }
}

/// The `[trust]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TrustSection {
    #[serde(default = "default_system_config_dir")]
    pub system_config_dir: PathBuf,
    #[serde(default = "default_user_config_dir")]
    pub user_config_dir: PathBuf,
    /// Allow plaintext HTTP without passing --insecure-allow-http.
    #[serde(default)]
    pub insecure_allow_http: bool,
}

impl Default for TrustSection {
    fn default() -> Self {
        Self {
            system_config_dir: default_system_config_dir(),
            user_config_dir: default_user_config_dir(),
            insecure_allow_http: false,
        }
    }
}

fn default_system_config_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SYSTEM_CONFIG_DIR)
}

fn default_user_config_dir() -> PathBuf {
    PathBuf::from(DEFAULT_USER_CONFIG_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_file_uses_defaults() {
        let (_dir, path) = write_config("");
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(
            config.trust.system_config_dir,
            PathBuf::from(DEFAULT_SYSTEM_CONFIG_DIR)
        );
        assert_eq!(
            config.trust.user_config_dir,
            PathBuf::from(DEFAULT_USER_CONFIG_DIR)
        );
        assert!(!config.trust.insecure_allow_http);
    }

    #[test]
    fn trust_section_overrides_defaults() {
        let (_dir, path) = write_config(
            "[trust]\nuser_config_dir = \"/home/ops/.keytrust\"\ninsecure_allow_http = true\n",
        );
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(
            config.trust.user_config_dir,
            PathBuf::from("/home/ops/.keytrust")
        );
        assert_eq!(
            config.trust.system_config_dir,
            PathBuf::from(DEFAULT_SYSTEM_CONFIG_DIR)
        );
        assert!(config.trust.insecure_allow_http);
    }

    #[test]
    fn missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, TrustError::InvalidConfig { .. }));
    }

    #[test]
    fn malformed_file_fails() {
        let (_dir, path) = write_config("[trust\n");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, TrustError::InvalidConfig { .. }));
    }
}
