//! Error types for vocabulary transfer.

use thiserror::Error;

/// Result type alias for vocabulary transfer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting, diffing, or replaying vocabulary.
#[derive(Error, Debug)]
pub enum Error {
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// A word unit closed without the expected property child.
    #[error("element <{unit}> has no <{property}> child")]
    MissingProperty { unit: String, property: String },

    /// Unrecognized key name in a key or combo spec.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// Keyboard backend failure.
    #[error("keyboard input error: {0}")]
    Input(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error from quick-xml.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}
