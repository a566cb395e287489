//! Error handling for the pedigree layout engine.
//!
//! "No layout found" is not an error: the solver reports it through
//! `Option`/`SearchOutcome`. Errors here describe inputs the engine refuses
//! to work with.

/// Errors raised while building or laying out a family
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The family references members that were never materialized
    #[error("Malformed family {family_id}: {reason}")]
    MalformedFamily {
        /// Identifier of the offending family
        family_id: String,
        /// What was missing
        reason: String,
    },

    /// An edge references a vertex outside the instance's vertex set
    #[error("Unknown vertex in sandwich instance: {0}")]
    UnknownVertex(String),

    /// Solver or layout configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Layout could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LayoutError {
    /// Create a malformed family error
    pub fn malformed(family_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFamily {
            family_id: family_id.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error means the family itself cannot be laid out
    #[must_use]
    pub const fn is_malformed_family(&self) -> bool {
        matches!(self, Self::MalformedFamily { .. })
    }
}

/// Result type for pedigree layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
