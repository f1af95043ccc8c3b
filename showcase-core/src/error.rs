//! Error types for the showcase controllers.

use thiserror::Error;

/// Failures that can happen while reading card markup or rendering the modal.
///
/// None of these are surfaced to the visitor; the modal controller turns
/// them into a degraded rendering and hands them back for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    /// A region the renderer needs does not exist in the markup
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A selector query on a card or the modal failed
    #[error("lookup failed for `{selector}`: {reason}")]
    Lookup { selector: String, reason: String },

    /// A DOM mutation (create/append/attribute) was rejected
    #[error("dom operation failed: {0}")]
    Dom(String),

    /// Host-supplied configuration could not be parsed
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
