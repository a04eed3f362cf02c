use thiserror::Error;

/// Main error type for SEP2 scalar validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Sep2Error {
    #[error("{type_name} max length of {max}.")]
    LengthExceeded { type_name: &'static str, max: usize },

    #[error("Unknown value {value} for {type_name}")]
    UnknownValue { type_name: &'static str, value: i64 },

    #[error("Unknown bits {bits:#x} for {type_name}")]
    UnknownBits { type_name: &'static str, bits: u32 },

    #[error("Value {value} out of range for {type_name}")]
    OutOfRange { type_name: &'static str, value: i64 },
}

/// Result type alias for SEP2 scalar validation
pub type Sep2Result<T> = Result<T, Sep2Error>;
