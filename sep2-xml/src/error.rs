use sep2_core::Sep2Error;
use thiserror::Error;

/// Main error type for XML encode/decode operations
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML parse error: {0}")]
    Parse(String),

    #[error("Unexpected root element: expected {expected}, got {found}")]
    UnexpectedRoot { expected: String, found: String },

    #[error("Unexpected namespace: {0}")]
    UnexpectedNamespace(String),

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error(transparent)]
    Scalar(#[from] Sep2Error),
}

/// Result type alias for XML encode/decode operations
pub type XmlResult<T> = Result<T, XmlError>;
