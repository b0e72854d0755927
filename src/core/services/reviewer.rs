use std::io::{BufRead, Write};

use crate::core::errors::Result;
use crate::core::models::key_source::KeySource;
use crate::core::models::trust_scope::TrustScope;
use crate::core::services::operator::Operator;
use crate::core::traits::key_parser::KeyRingParser;

const TRUST_PROMPT: &str = "Are you sure you want to trust this key (yes/no)?";

/// Rewinds the borrowed source when dropped, whatever the exit path.
struct RewindOnDrop<'s>(&'s mut KeySource);

impl Drop for RewindOnDrop<'_> {
    fn drop(&mut self) {
        let _ = self.0.rewind();
    }
}

/// Shows a key's fingerprints and identities and decides whether to trust it.
pub struct Reviewer<'a, P: KeyRingParser + ?Sized> {
    pub parser: &'a P,
}

impl<P: KeyRingParser + ?Sized> Reviewer<'_, P> {
    /// Returns `true` when the key is accepted.
    ///
    /// `source` is left at offset 0 on return, including on errors.
    pub fn review<R: BufRead, W: Write>(
        &self,
        scope: &TrustScope,
        location: &str,
        source: &mut KeySource,
        force_accept: bool,
        operator: &mut Operator<R, W>,
    ) -> Result<bool> {
        let guard = RewindOnDrop(source);
        guard.0.rewind()?;

        let ring = self.parser.parse(&mut *guard.0)?;

        operator.say(&format!("Prefix: {:?}", scope.prefix()))?;
        operator.say(&format!("Key: {location:?}"))?;
        for line in ring.summary_lines() {
            operator.say(&line)?;
        }

        if force_accept {
            return Ok(true);
        }

        operator.confirm(TRUST_PROMPT)
    }
}
