//! Typed errors for the validator, simulation driver, and provenance writer.

/// Failure raised by the simulation driver. A missing solver is the only
/// fatal driver error; budget violations are early-aborts, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    /// No dynamic in the world could be selected as the gravity dynamic.
    /// Selecting one always succeeds when `world.dynamics` is nonempty,
    /// which the validator already requires; this variant exists for a
    /// world handed to the driver without going through validation.
    NoDynamics,
    /// The gravity dynamic's card id has no entry in the solver registry.
    MissingSolver { card_id: String },
    /// The gravity dynamic's `ref` does not resolve to any card in the
    /// supplied card map.
    MissingCard { law_ref: String },
    /// `config.steps` was absent, zero, or not a positive integer.
    InvalidSteps,
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDynamics => write!(f, "world has no dynamics to drive the simulation"),
            Self::MissingSolver { card_id } => write!(f, "no solver registered for card '{card_id}'"),
            Self::MissingCard { law_ref } => write!(f, "no resolved card for dynamic ref '{law_ref}'"),
            Self::InvalidSteps => write!(f, "config.steps must be a positive integer"),
        }
    }
}

impl std::error::Error for DriverError {}

/// Failure writing the provenance lockfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvenanceError {
    Io { path: String, detail: String },
    Serialize { detail: String },
}

impl std::fmt::Display for ProvenanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "i/o error writing lockfile '{path}': {detail}"),
            Self::Serialize { detail } => write!(f, "failed to serialize lockfile: {detail}"),
        }
    }
}

impl std::error::Error for ProvenanceError {}
