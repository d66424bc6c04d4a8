//! Error types for the playground session
//!
//! Parse misses and unrecognised return shapes are not errors: they are
//! absorbed by the synthesizer's fallback chain. Only lookups against the
//! template catalog can fail.

use thiserror::Error;

/// Main error type for playground operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundError {
    /// No server template with this name
    #[error("Unknown server template: {0}")]
    UnknownTemplate(String),

    /// The server template has no client snippets for this framework
    #[error("Unknown client framework `{framework}` for template `{template}`")]
    UnknownClientFramework {
        /// Selected server template
        template: String,
        /// Requested client framework
        framework: String,
    },

    /// The client framework has no snippet in this language
    #[error("Unknown client language `{language}` for framework `{framework}`")]
    UnknownClientLanguage {
        /// Selected client framework
        framework: String,
        /// Requested client language
        language: String,
    },

    /// A catalog could not be loaded
    #[error("Invalid template catalog: {0}")]
    InvalidCatalog(String),
}

/// Result type alias for playground operations
pub type Result<T> = std::result::Result<T, PlaygroundError>;
