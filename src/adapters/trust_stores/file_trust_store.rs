use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, TrustError};
use crate::core::models::app_identifier::validate_name;
use crate::core::models::key_source::KeySource;
use crate::core::models::trust_scope::TrustScope;
use crate::core::traits::key_parser::KeyRingParser;
use crate::core::traits::trust_store::TrustStore;

const TRUSTED_KEYS_DIR: &str = "trustedkeys";
const ROOT_DIR: &str = "root.d";
const PREFIX_DIR: &str = "prefix.d";

/// Directory-backed trust store split into a system and a user tree.
///
/// Layout under each config dir:
/// ```text
/// trustedkeys/
///   root.d/<fingerprint>
///   prefix.d/example.com/app/<fingerprint>
/// ```
/// Files hold the armored key exactly as fetched and are named after the
/// lower-case hex fingerprint of the first key. Only the user tree is written.
#[derive(Clone)]
pub struct FileTrustStore<P: KeyRingParser> {
    system_dir: PathBuf,
    user_dir: PathBuf,
    parser: P,
}

/// A key file found by [`FileTrustStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredKey {
    pub scope: TrustScope,
    pub path: PathBuf,
}

impl<P: KeyRingParser> FileTrustStore<P> {
    /// Create a store over the given system and user config directories.
    pub fn new(system_config_dir: PathBuf, user_config_dir: PathBuf, parser: P) -> Self {
        Self {
            system_dir: system_config_dir.join(TRUSTED_KEYS_DIR),
            user_dir: user_config_dir.join(TRUSTED_KEYS_DIR),
            parser,
        }
    }

    /// Directory holding user-level keys for `scope`.
    fn user_scope_dir(&self, scope: &TrustScope) -> Result<PathBuf> {
        Self::scope_dir(&self.user_dir, scope)
    }

    fn scope_dir(base: &Path, scope: &TrustScope) -> Result<PathBuf> {
        match scope {
            TrustScope::Root => Ok(base.join(ROOT_DIR)),
            TrustScope::Prefix(prefix) => {
                validate_name(prefix)?;
                Ok(base.join(PREFIX_DIR).join(prefix))
            }
        }
    }

    /// Write the armored bytes into `dir`, named by the first fingerprint.
    fn store(&self, dir: PathBuf, key: &mut KeySource) -> Result<PathBuf> {
        let mut armored = Vec::new();
        key.read_to_end(&mut armored)?;

        let ring = self.parser.parse(&mut armored.as_slice())?;
        let first = ring.keys.first().ok_or_else(|| TrustError::Parse {
            reason: "missing OpenPGP key".into(),
        })?;

        std::fs::create_dir_all(&dir)?;
        let path = dir.join(first.fingerprint.to_file_name());
        std::fs::write(&path, &armored)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))?;
        }

        Ok(path)
    }

    /// Key files for `scope` (or every scope when `None`), system tree first.
    pub fn list(&self, scope: Option<&TrustScope>) -> Result<Vec<StoredKey>> {
        let mut keys = Vec::new();
        for base in [&self.system_dir, &self.user_dir] {
            match scope {
                Some(scope) => Self::collect(&Self::scope_dir(base, scope)?, scope, &mut keys)?,
                None => {
                    Self::collect(&base.join(ROOT_DIR), &TrustScope::Root, &mut keys)?;
                    Self::collect_prefixes(&base.join(PREFIX_DIR), "", &mut keys)?;
                }
            }
        }
        Ok(keys)
    }

    /// Regular files directly inside `dir`, sorted by name.
    fn collect(dir: &Path, scope: &TrustScope, out: &mut Vec<StoredKey>) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();
        paths.sort();
        out.extend(paths.into_iter().map(|path| StoredKey {
            scope: scope.clone(),
            path,
        }));
        Ok(())
    }

    /// Walk `prefix.d`, treating every directory holding files as a prefix.
    fn collect_prefixes(dir: &Path, prefix: &str, out: &mut Vec<StoredKey>) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }
        if !prefix.is_empty() {
            Self::collect(dir, &TrustScope::Prefix(prefix.to_string()), out)?;
        }

        let mut children: Vec<(String, PathBuf)> = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| (e.file_name().to_string_lossy().into_owned(), e.path()))
            .collect();
        children.sort();

        for (name, path) in children {
            let child = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };
            Self::collect_prefixes(&path, &child, out)?;
        }
        Ok(())
    }
}

impl<P: KeyRingParser> TrustStore for FileTrustStore<P> {
    fn store_root_key(&self, key: &mut KeySource) -> Result<PathBuf> {
        let dir = self.user_scope_dir(&TrustScope::Root)?;
        self.store(dir, key)
    }

    fn store_key_for_prefix(&self, prefix: &str, key: &mut KeySource) -> Result<PathBuf> {
        let dir = self.user_scope_dir(&TrustScope::from_prefix(prefix))?;
        self.store(dir, key)
    }
}
