//! Error types for sqlsnip

use thiserror::Error;

/// Result type alias for sqlsnip operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for template resolution
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A parameter marker survived into the substitution pass with no bound
    /// value in the merged parameter mapping.
    ///
    /// Clause filtering is expected to drop any clause referencing an
    /// unavailable name, so this indicates a template authored outside the
    /// clause-filtering discipline. Silent omission would corrupt positional
    /// binding alignment, so it is a hard failure.
    #[error("missing value for parameter '{name}' (marker #{ordinal})")]
    MissingParameter {
        /// Parameter name referenced by the marker.
        name: String,
        /// 1-based position of the marker among all markers in the statement.
        ordinal: usize,
    },

    /// A snippet reference named a snippet that was never registered.
    #[error("unknown snippet: '{0}'")]
    UnknownSnippet(String),
}

impl BuildError {
    /// Create a missing-parameter error
    pub fn missing_parameter(name: impl Into<String>, ordinal: usize) -> Self {
        Self::MissingParameter {
            name: name.into(),
            ordinal,
        }
    }

    /// Check if this is a missing-parameter error
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }

    /// Check if this is an unknown-snippet error
    pub fn is_unknown_snippet(&self) -> bool {
        matches!(self, Self::UnknownSnippet(_))
    }
}
