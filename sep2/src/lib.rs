//! IEEE 2030.5 (SEP2) resource model with the CSIP-Aus extension profile
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `sep2-core`: Scalar types (hex binaries, percents, enumerations, flag
//!   sets), error handling
//! - `sep2-model`: The resource structs (DER controls, pricing, end devices,
//!   metering, pub/sub, responses)
//! - `sep2-xml`: The namespace-qualified XML wire codec
//!
//! # Usage
//!
//! ```
//! use sep2::model::metering::Reading;
//! use sep2::xml::{XmlDecode, XmlEncode};
//!
//! let xml = Reading::new(1500).to_xml().unwrap();
//! let back = Reading::from_xml(&xml).unwrap();
//! assert_eq!(back.value, 1500);
//! ```

// Re-export core scalar types
pub use sep2_core::*;

// Re-export the resource model
pub mod model {
    pub use sep2_model::*;
}

// Re-export the XML codec
pub mod xml {
    pub use sep2_xml::*;
}
