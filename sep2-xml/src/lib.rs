//! Namespace-qualified XML wire codec for the SEP2 resource model
//!
//! Documents are exchanged as standalone XML with the SEP2 namespace as the
//! default, the CSIP-Aus extension namespace under the `csipaus` prefix and
//! the XML Schema instance namespace under `xsi` (for the notification
//! payload discriminator). Encoding is schema-sequence ordered; decoding is
//! name based and tolerant of reordered or unknown siblings.

pub mod codec;
pub mod dom;
pub mod error;

mod common;
mod der;
mod device;
mod ident;
mod metering;
mod pricing;
mod pubsub;

pub use codec::{ListItem, XmlDecode, XmlEncode};
pub use dom::{CSIP_NS, CSIP_PREFIX, Element, SEP2_NS, XSI_NS};
pub use error::{XmlError, XmlResult};
