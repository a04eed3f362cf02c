//! Base resource shapes: Resource, Link, ListLink, the generic list wrapper
//! and the capability structs shared by concrete resources.
//!
//! SEP2 composes its resources from a handful of abstract shapes
//! (IdentifiedObject, SubscribableResource, RespondableResource). Here these
//! are independent structs embedded by value into each concrete resource
//! rather than an inheritance lattice; validation and encoding are uniform
//! per field, so no dispatch is needed.

use sep2_core::{HexBinary128, HexBinary8, SubscribableType};
use serde::{Deserialize, Serialize};

/// The bare addressable resource: just a reverse reference to itself.
///
/// Also serves as the fallback shape when a notification carries a resource
/// type the consumer does not recognize. The `href` is never authoritative
/// for identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// URI of this resource
    pub href: Option<String>,
}

impl Resource {
    /// Create a resource with the given href.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
        }
    }
}

/// A typed reference to another resource's address.
///
/// Links are weak: resolution happens out-of-band via the href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// URI of the referenced resource
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// A typed reference to a list resource, optionally carrying a count hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLink {
    /// URI of the referenced list
    pub href: String,
    /// Hint of how many items the referenced list holds
    pub all: Option<u32>,
}

impl ListLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            all: None,
        }
    }

    pub fn with_all(href: impl Into<String>, all: u32) -> Self {
        Self {
            href: href.into(),
            all: Some(all),
        }
    }
}

/// Description and master resource identifier carried by identified objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedObject {
    /// Globally unique 128 bit identifier
    pub mrid: HexBinary128,
    /// Human readable description
    pub description: Option<String>,
    /// Contents version, incremented on change
    pub version: Option<u16>,
}

impl IdentifiedObject {
    pub fn new(mrid: HexBinary128) -> Self {
        Self {
            mrid,
            description: None,
            version: None,
        }
    }
}

/// Response routing carried by respondable resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondable {
    /// URI responses must be posted to
    pub reply_to: Option<String>,
    /// Bitmap of which response kinds are required
    pub response_required: Option<HexBinary8>,
}

/// Generic paginated/subscribable collection wrapper.
///
/// Every SEP2 list resource follows this shape: `all` counts the matching
/// items server-side, `results` counts the items present in this payload,
/// and `items` is the ordered page itself. `items` is always a concrete
/// sequence - a payload with no item children decodes to an empty vec, never
/// to an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// URI of this list resource
    pub href: Option<String>,
    /// Number of items matching server-side
    pub all: u32,
    /// Number of items in this payload
    pub results: u32,
    /// Default polling rate for this resource in seconds
    pub poll_rate: Option<u32>,
    /// Subscription support indicator
    pub subscribable: Option<SubscribableType>,
    /// The items of this page, in server order
    pub items: Vec<T>,
}

impl<T> List<T> {
    /// Wrap a page of items. `results` is set to `items.len()`; `all` may
    /// legitimately be larger to indicate server-side truncation.
    pub fn wrap(items: Vec<T>, all: u32, poll_rate: Option<u32>) -> Self {
        Self {
            href: None,
            all,
            results: items.len() as u32,
            poll_rate,
            subscribable: None,
            items,
        }
    }

    /// An empty list advertising zero matching items.
    pub fn empty() -> Self {
        Self::wrap(Vec::new(), 0, None)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_sets_results_to_len() {
        let list = List::wrap(vec![1u32, 2, 3], 10, Some(300));
        assert_eq!(list.results, 3);
        assert_eq!(list.all, 10);
        assert_eq!(list.poll_rate, Some(300));
    }

    #[test]
    fn test_empty_list_is_iterable() {
        let list: List<u32> = List::empty();
        assert_eq!(list.items.len(), 0);
        assert_eq!(list.all, 0);
        assert_eq!(list.results, 0);
    }

    #[test]
    fn test_wrap_preserves_order() {
        let list = List::wrap(vec!["a", "b", "c"], 3, None);
        assert_eq!(list.items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_list_link_count_hint() {
        let ll = ListLink::with_all("/edev", 12);
        assert_eq!(ll.all, Some(12));
        assert_eq!(ListLink::new("/edev").all, None);
    }
}
