/// Convenience result type used across pathsplit.
pub type SplitResult<T> = Result<T, SplitError>;

/// Top-level error taxonomy used by document and configuration APIs.
///
/// The path engine itself never returns this type: malformed path data degrades to the
/// "not decomposable" result instead of failing.
#[derive(thiserror::Error, Debug)]
pub enum SplitError {
    /// Invalid user-provided options or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The SVG text could not be parsed as XML.
    #[error("xml error: {0}")]
    Xml(String),

    /// A document operation referenced a missing or unsuitable node.
    #[error("document error: {0}")]
    Document(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SplitError {
    /// Build a [`SplitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SplitError::Xml`] value.
    pub fn xml(msg: impl Into<String>) -> Self {
        Self::Xml(msg.into())
    }

    /// Build a [`SplitError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`SplitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<roxmltree::Error> for SplitError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
