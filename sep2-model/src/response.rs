//! Error response resource

use sep2_core::ReasonCodeType;
use serde::{Deserialize, Serialize};

/// Error detail returned alongside an HTTP error status.
///
/// `message` is an extension field: when absent it must not appear on the
/// wire at all (an explicitly empty element fails schema validation), so the
/// codec emits the element only when the value is present - even if present
/// as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Seconds the client should wait before retrying, for rate limiting
    pub max_retry_duration: Option<u32>,
    pub reason_code: ReasonCodeType,
    /// Optional human readable detail (extension)
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(reason_code: ReasonCodeType) -> Self {
        Self {
            max_retry_duration: None,
            reason_code,
            message: None,
        }
    }
}
