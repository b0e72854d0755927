/// Flags for one `add_keys` batch. Read-only for the whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrustOptions {
    /// Permit plaintext HTTP for discovery and key fetches.
    pub allow_insecure_http: bool,
    /// Accept every key without asking the operator.
    pub force_accept: bool,
    /// Report failed discovery attempts.
    pub debug: bool,
}
