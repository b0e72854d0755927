/// The trust-store partition a key is written to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrustScope {
    /// Keys trusted globally, independent of any prefix.
    Root,
    /// Keys trusted only for images under this prefix.
    Prefix(String),
}

impl TrustScope {
    /// Build a scope from a `--prefix` value. An empty prefix means root.
    pub fn from_prefix(prefix: &str) -> Self {
        if prefix.is_empty() {
            Self::Root
        } else {
            Self::Prefix(prefix.to_string())
        }
    }

    /// The prefix string, empty for the root scope.
    pub fn prefix(&self) -> &str {
        match self {
            Self::Root => "",
            Self::Prefix(p) => p,
        }
    }
}

impl std::fmt::Display for TrustScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Prefix(p) => write!(f, "prefix {p:?}"),
        }
    }
}
