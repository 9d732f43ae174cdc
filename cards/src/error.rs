//! Typed resolver errors.

/// Typed failure for card resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// No candidate matched the reference, either as a direct path or
    /// across the search space.
    NotFound { reference: String },

    /// A direct-path card declared a `sha256` that did not match its
    /// canonical hash. Fatal: direct-path loads never swallow a hash
    /// mismatch, unlike IRI scans.
    HashMismatch {
        path: String,
        declared: String,
        computed: String,
    },

    /// The referenced JSON document did not parse, or did not match the
    /// law-card schema.
    Schema { reference: String, detail: String },

    /// An I/O failure reading a referenced path or a search directory.
    Io { path: String, detail: String },
}

impl std::fmt::Display for ResolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { reference } => write!(
                f,
                "cannot resolve LawCard ref '{reference}'. Provide a local path or set RULEGRAPH_CARD_PATHS."
            ),
            Self::HashMismatch {
                path,
                declared,
                computed,
            } => write!(f, "sha256 mismatch for {path}: expected {declared}, computed {computed}"),
            Self::Schema { reference, detail } => write!(f, "schema error resolving '{reference}': {detail}"),
            Self::Io { path, detail } => write!(f, "i/o error reading '{path}': {detail}"),
        }
    }
}

impl std::error::Error for ResolverError {}
