use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::core::errors::{Result, TrustError};
use crate::core::models::key_source::KeySource;
use crate::core::models::trust_scope::TrustScope;
use crate::core::services::operator::Operator;
use crate::core::traits::trust_store::TrustStore;

/// Writes accepted keys into the trust store under their scope.
pub struct Registrar<'a, S: TrustStore + ?Sized> {
    pub store: &'a S,
}

impl<S: TrustStore + ?Sized> Registrar<'_, S> {
    /// Store `source` under `scope` and return the stored path.
    pub fn register<R: BufRead, W: Write>(
        &self,
        scope: &TrustScope,
        source: &mut KeySource,
        operator: &mut Operator<R, W>,
    ) -> Result<PathBuf> {
        source.rewind()?;

        let stored = match scope {
            TrustScope::Root => self.store.store_root_key(source),
            TrustScope::Prefix(prefix) => self.store.store_key_for_prefix(prefix, source),
        };
        let path = stored.map_err(|e| TrustError::Store {
            scope: scope.to_string(),
            source: Box::new(e),
        })?;

        let shown = path.display().to_string();
        match scope {
            TrustScope::Root => operator.say(&format!("Added root key at {shown:?}"))?,
            TrustScope::Prefix(prefix) => {
                operator.say(&format!("Added key for prefix {prefix:?} at {shown:?}"))?
            }
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Read;

    use super::*;

    #[derive(Default)]
    struct RecordingStore {
        writes: RefCell<Vec<(String, String)>>,
        fail: bool,
    }

    impl RecordingStore {
        fn record(&self, scope: &str, key: &mut KeySource) -> Result<PathBuf> {
            if self.fail {
                return Err(TrustError::InvalidConfig {
                    detail: "read-only".into(),
                });
            }
            let mut data = String::new();
            key.read_to_string(&mut data)?;
            self.writes.borrow_mut().push((scope.to_string(), data));
            Ok(PathBuf::from(format!("/store/{scope}/key")))
        }
    }

    impl TrustStore for RecordingStore {
        fn store_root_key(&self, key: &mut KeySource) -> Result<PathBuf> {
            self.record("root", key)
        }

        fn store_key_for_prefix(&self, prefix: &str, key: &mut KeySource) -> Result<PathBuf> {
            self.record(prefix, key)
        }
    }

    fn consumed_source() -> KeySource {
        let mut src = KeySource::spool(&mut &b"armored key"[..]).unwrap();
        let mut sink = Vec::new();
        src.read_to_end(&mut sink).unwrap();
        src
    }

    #[test]
    fn root_scope_uses_root_store() {
        let store = RecordingStore::default();
        let registrar = Registrar { store: &store };
        let mut op = Operator::new(&b""[..], Vec::new());
        let mut src = consumed_source();

        let path = registrar.register(&TrustScope::Root, &mut src, &mut op).unwrap();

        assert_eq!(path, PathBuf::from("/store/root/key"));
        assert_eq!(
            *store.writes.borrow(),
            vec![("root".to_string(), "armored key".to_string())]
        );
        let out = String::from_utf8(op.output().clone()).unwrap();
        assert_eq!(out, "Added root key at \"/store/root/key\"\n");
    }

    #[test]
    fn prefix_scope_uses_prefix_store() {
        let store = RecordingStore::default();
        let registrar = Registrar { store: &store };
        let mut op = Operator::new(&b""[..], Vec::new());
        let mut src = consumed_source();
        let scope = TrustScope::from_prefix("example.com/app");

        registrar.register(&scope, &mut src, &mut op).unwrap();

        assert_eq!(store.writes.borrow()[0].0, "example.com/app");
        let out = String::from_utf8(op.output().clone()).unwrap();
        assert!(out.starts_with("Added key for prefix \"example.com/app\" at "));
    }

    #[test]
    fn store_failure_is_wrapped() {
        let store = RecordingStore {
            fail: true,
            ..RecordingStore::default()
        };
        let registrar = Registrar { store: &store };
        let mut op = Operator::new(&b""[..], Vec::new());
        let mut src = consumed_source();

        let err = registrar
            .register(&TrustScope::Root, &mut src, &mut op)
            .unwrap_err();

        assert!(matches!(err, TrustError::Store { .. }));
        assert!(op.output().is_empty());
    }
}
