//! Subscription and notification resources
//!
//! A `Subscription` is a standing request to be told when a resource
//! changes; a `Notification` is one such delivery. The notification's
//! embedded resource is polymorphic: the wire always uses the element name
//! `Resource` and discriminates the actual shape with an `xsi:type`
//! attribute, so the model exposes it as the `NotificationResource` union
//! with a generic fallback for unrecognized types.

use crate::der::{DefaultDerControl, DerAvailability, DerCapability, DerControlList, DerSettings, DerStatus};
use crate::end_device::EndDeviceList;
use crate::identification::{List, Resource};
use crate::metering::Reading;
use crate::pricing::TimeTariffIntervalList;
use sep2_core::{ConditionAttributeIdentifier, NotificationStatus, SubscriptionEncoding};
use serde::{Deserialize, Serialize};

/// Threshold condition gating notification delivery: notify when the
/// monitored attribute leaves the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub attribute_identifier: ConditionAttributeIdentifier,
    /// Lower bound of the band
    pub lower_threshold: i64,
    /// Upper bound of the band
    pub upper_threshold: i64,
}

/// A standing request to receive updates to a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub href: Option<String>,
    /// The resource this subscription applies to
    pub subscribed_resource: String,
    pub encoding: SubscriptionEncoding,
    /// Preferred schema and extensibility level indication, e.g. "+S1"
    pub level: String,
    /// Maximum number of list items to include in a notification
    pub limit: u32,
    /// Where notifications are posted
    pub notification_uri: String,
    pub condition: Option<Condition>,
}

/// The resource payload embedded in a notification.
///
/// Exactly one shape is present per notification; which one is identified
/// by the `xsi:type` discriminator on the wire, not by the element name.
/// `Resource` is the forward-compatible fallback for discriminators this
/// implementation does not recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationResource {
    TimeTariffIntervalList(TimeTariffIntervalList),
    DerControlList(DerControlList),
    DefaultDerControl(DefaultDerControl),
    EndDeviceList(EndDeviceList),
    Reading(Reading),
    DerStatus(DerStatus),
    DerAvailability(DerAvailability),
    DerCapability(DerCapability),
    DerSettings(DerSettings),
    /// Generic fallback: href only
    Resource(Resource),
}

impl NotificationResource {
    /// The `xsi:type` discriminator this shape travels under.
    pub fn xsi_type(&self) -> &'static str {
        match self {
            Self::TimeTariffIntervalList(_) => "TimeTariffIntervalList",
            Self::DerControlList(_) => "DERControlList",
            Self::DefaultDerControl(_) => "DefaultDERControl",
            Self::EndDeviceList(_) => "EndDeviceList",
            Self::Reading(_) => "Reading",
            Self::DerStatus(_) => "DERStatus",
            Self::DerAvailability(_) => "DERAvailability",
            Self::DerCapability(_) => "DERCapability",
            Self::DerSettings(_) => "DERSettings",
            Self::Resource(_) => "Resource",
        }
    }
}

/// Delivery of a change to a subscribed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub href: Option<String>,
    /// The resource this notification is about
    pub subscribed_resource: String,
    /// New location of the resource, if moved
    pub new_resource_uri: Option<String>,
    pub status: NotificationStatus,
    /// The subscription that triggered this notification
    pub subscription_uri: String,
    /// The changed resource, absent for e.g. deletion notifications
    pub resource: Option<NotificationResource>,
}

pub type SubscriptionList = List<Subscription>;
pub type NotificationList = List<Notification>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_without_resource() {
        let n = Notification {
            href: None,
            subscribed_resource: "/edev/1/derp/1/derc".to_string(),
            new_resource_uri: None,
            status: NotificationStatus::SubscriptionCancelledResourceDeleted,
            subscription_uri: "/edev/1/sub/4".to_string(),
            resource: None,
        };
        assert!(n.resource.is_none());
    }
}
