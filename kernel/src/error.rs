//! Kernel-level typed errors.
//!
//! Every error type in this workspace is a plain enum with manual
//! `Display`/`Error` impls, no derive-macro crate.

/// Failure constructing a typed model object from raw JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// JSON did not parse, or did not match the expected shape.
    Deserialize { detail: String },
    /// The document's `type` field didn't match any recognized root type:
    /// `rg:World`/`gw:World` or `rg:LawCard`/`gw:LawCard`.
    UnrecognizedType { expected: &'static str, found: String },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deserialize { detail } => write!(f, "schema error: {detail}"),
            Self::UnrecognizedType { expected, found } => {
                write!(f, "schema error: expected type {expected}, found '{found}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}
