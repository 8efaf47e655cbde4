//! Error types for vimsoap-core.

use std::path::Path;

/// Errors that can occur while decoding vim25 payloads.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The payload is not well-formed XML.
    #[error("XML error: {message}")]
    Xml {
        /// Parser message, including the position of the problem
        message: String,
    },

    /// The payload is not well-formed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (reading payloads or config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required child element is absent.
    #[error("Missing element <{name}> in <{parent}>")]
    MissingElement {
        /// Element that was being decoded
        parent: String,
        /// Child element that was expected
        name: String,
    },

    /// An element or attribute holds a value that cannot be decoded.
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        /// Field that failed to decode
        field: String,
        /// Offending raw value
        value: String,
        /// What went wrong
        reason: String,
    },

    /// A polymorphic element names a type the registry does not know.
    #[error("Unknown type: {name}")]
    UnknownType {
        /// Type name carried in the document
        name: String,
    },

    /// The document is well-formed but not shaped as expected.
    #[error("Unexpected element: expected <{expected}>, found <{found}>")]
    UnexpectedElement {
        /// Element name that was expected
        expected: String,
        /// Element name that was found
        found: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for vimsoap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error was caused by the remote payload.
    ///
    /// Configuration and local I/O problems are not the payload's fault.
    pub fn is_malformed_input(&self) -> bool {
        match self {
            Error::Xml { .. } => true,
            Error::Json(_) => true,
            Error::MissingElement { .. } => true,
            Error::InvalidValue { .. } => true,
            Error::UnknownType { .. } => true,
            Error::UnexpectedElement { .. } => true,
            Error::Io(_) => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new XML error from any displayable parser error.
    pub fn xml<S: ToString>(message: S) -> Self {
        Error::Xml {
            message: message.to_string(),
        }
    }

    /// Creates a new missing-element error.
    pub fn missing<P, N>(parent: P, name: N) -> Self
    where
        P: Into<String>,
        N: Into<String>,
    {
        Error::MissingElement {
            parent: parent.into(),
            name: name.into(),
        }
    }

    /// Creates a new invalid-value error.
    pub fn invalid<F, V, R>(field: F, value: V, reason: R) -> Self
    where
        F: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        Error::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new unexpected-element error.
    pub fn unexpected<E, F>(expected: E, found: F) -> Self
    where
        E: Into<String>,
        F: Into<String>,
    {
        Error::UnexpectedElement {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a configuration error for a file that could not be read.
    pub fn config_io(err: std::io::Error, path: &Path) -> Self {
        Error::Config {
            message: format!("{}: {err}", path.display()),
        }
    }
}
