//! Codec for subscription and notification resources
//!
//! The notification payload always uses the element name `Resource`; the
//! actual shape is identified by the `xsi:type` attribute. Decoding resolves
//! the discriminator against the shapes this implementation understands and
//! falls back to the generic `Resource` (href only) for anything else, so a
//! server adding new notification types never breaks existing consumers.

use crate::codec::{
    ListItem, XmlDecode, XmlEncode, opt_child_text, req_child_text, req_num, text_el,
};
use crate::common::{parse_href, push_href};
use crate::dom::Element;
use crate::error::XmlResult;
use sep2_core::{ConditionAttributeIdentifier, NotificationStatus, SubscriptionEncoding};
use sep2_model::der::{DefaultDerControl, DerAvailability, DerCapability, DerSettings, DerStatus};
use sep2_model::identification::Resource;
use sep2_model::metering::Reading;
use sep2_model::pub_sub::{Condition, Notification, NotificationResource, Subscription};

impl XmlEncode for Condition {
    const TAG: &'static str = "Condition";

    fn build(&self, el: &mut Element) {
        el.add_child(text_el("attributeIdentifier", self.attribute_identifier.to_u8()));
        el.add_child(text_el("lowerThreshold", self.lower_threshold));
        el.add_child(text_el("upperThreshold", self.upper_threshold));
    }
}

impl XmlDecode for Condition {
    const TAG: &'static str = "Condition";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Condition {
            attribute_identifier: ConditionAttributeIdentifier::from_u8(req_num(
                el,
                "attributeIdentifier",
            )?)?,
            lower_threshold: req_num(el, "lowerThreshold")?,
            upper_threshold: req_num(el, "upperThreshold")?,
        })
    }
}

impl XmlEncode for Subscription {
    const TAG: &'static str = "Subscription";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        el.add_child(text_el("subscribedResource", &self.subscribed_resource));
        if let Some(c) = &self.condition {
            el.add_child(c.to_element());
        }
        el.add_child(text_el("encoding", self.encoding.to_u8()));
        el.add_child(text_el("level", &self.level));
        el.add_child(text_el("limit", self.limit));
        el.add_child(text_el("notificationURI", &self.notification_uri));
    }
}

impl XmlDecode for Subscription {
    const TAG: &'static str = "Subscription";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Subscription {
            href: parse_href(el),
            subscribed_resource: req_child_text(el, "subscribedResource")?.to_string(),
            encoding: SubscriptionEncoding::from_u8(req_num(el, "encoding")?)?,
            level: req_child_text(el, "level")?.to_string(),
            limit: req_num(el, "limit")?,
            notification_uri: req_child_text(el, "notificationURI")?.to_string(),
            condition: el
                .child("Condition")
                .map(Condition::from_element)
                .transpose()?,
        })
    }
}

impl ListItem for Subscription {
    const LIST_TAG: &'static str = "SubscriptionList";
}

fn resource_element(resource: &NotificationResource) -> Element {
    let mut el = Element::new("Resource");
    el.set_attr("xsi:type", resource.xsi_type());
    match resource {
        NotificationResource::TimeTariffIntervalList(v) => v.build(&mut el),
        NotificationResource::DerControlList(v) => v.build(&mut el),
        NotificationResource::DefaultDerControl(v) => v.build(&mut el),
        NotificationResource::EndDeviceList(v) => v.build(&mut el),
        NotificationResource::Reading(v) => v.build(&mut el),
        NotificationResource::DerStatus(v) => v.build(&mut el),
        NotificationResource::DerAvailability(v) => v.build(&mut el),
        NotificationResource::DerCapability(v) => v.build(&mut el),
        NotificationResource::DerSettings(v) => v.build(&mut el),
        NotificationResource::Resource(v) => v.build(&mut el),
    }
    el
}

/// Resolve the embedded `Resource` element against its `xsi:type`
/// discriminator. Unrecognized (or absent) discriminators degrade to the
/// generic `Resource`.
fn resolve_notification_resource(el: &Element) -> XmlResult<NotificationResource> {
    let resolved = match el.xsi_type() {
        Some("TimeTariffIntervalList") => {
            NotificationResource::TimeTariffIntervalList(XmlDecode::from_element(el)?)
        }
        Some("DERControlList") => NotificationResource::DerControlList(XmlDecode::from_element(el)?),
        Some("EndDeviceList") => NotificationResource::EndDeviceList(XmlDecode::from_element(el)?),
        Some("Reading") => NotificationResource::Reading(Reading::from_element(el)?),
        Some("DefaultDERControl") => {
            NotificationResource::DefaultDerControl(DefaultDerControl::from_element(el)?)
        }
        Some("DERStatus") => NotificationResource::DerStatus(DerStatus::from_element(el)?),
        Some("DERAvailability") => {
            NotificationResource::DerAvailability(DerAvailability::from_element(el)?)
        }
        Some("DERCapability") => {
            NotificationResource::DerCapability(DerCapability::from_element(el)?)
        }
        Some("DERSettings") => NotificationResource::DerSettings(DerSettings::from_element(el)?),
        Some("Resource") | None => NotificationResource::Resource(Resource::from_element(el)?),
        Some(other) => {
            log::debug!("unrecognized notification resource type {other}, using generic fallback");
            NotificationResource::Resource(Resource::from_element(el)?)
        }
    };
    Ok(resolved)
}

impl XmlEncode for Notification {
    const TAG: &'static str = "Notification";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        el.add_child(text_el("subscribedResource", &self.subscribed_resource));
        if let Some(uri) = &self.new_resource_uri {
            el.add_child(text_el("newResourceURI", uri));
        }
        if let Some(resource) = &self.resource {
            el.add_child(resource_element(resource));
        }
        el.add_child(text_el("status", self.status.to_u8()));
        el.add_child(text_el("subscriptionURI", &self.subscription_uri));
    }
}

impl XmlDecode for Notification {
    const TAG: &'static str = "Notification";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Notification {
            href: parse_href(el),
            subscribed_resource: req_child_text(el, "subscribedResource")?.to_string(),
            new_resource_uri: opt_child_text(el, "newResourceURI").map(str::to_string),
            status: NotificationStatus::from_u8(req_num(el, "status")?)?,
            subscription_uri: req_child_text(el, "subscriptionURI")?.to_string(),
            resource: el
                .child("Resource")
                .map(resolve_notification_resource)
                .transpose()?,
        })
    }
}

impl ListItem for Notification {
    const LIST_TAG: &'static str = "NotificationList";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{CSIP_NS, SEP2_NS, XSI_NS};
    use sep2_core::{
        CurrentStatusType, DateTimeInterval, DerControlType, DerType, HexBinary128,
    };
    use sep2_model::der::{DerControl, DerControlBase, DerControlList};
    use sep2_model::der_control_types::ActivePower;
    use sep2_model::event::{EventInfo, EventStatus};
    use sep2_model::identification::{IdentifiedObject, List, Respondable};
    use sep2_model::pub_sub::NotificationList;

    fn sample_subscription() -> Subscription {
        Subscription {
            href: Some("/edev/1/sub/4".to_string()),
            subscribed_resource: "/edev/1/derp/1/derc".to_string(),
            encoding: SubscriptionEncoding::Xml,
            level: "+S1".to_string(),
            limit: 10,
            notification_uri: "https://aggregator.example/notify".to_string(),
            condition: None,
        }
    }

    fn sample_control(mrid: &str) -> DerControl {
        DerControl {
            href: None,
            respondable: Respondable::default(),
            ident: IdentifiedObject::new(HexBinary128::new(mrid).unwrap()),
            event: EventInfo {
                creation_time: 1_700_000_000,
                event_status: EventStatus {
                    current_status: CurrentStatusType::Scheduled,
                    date_time: 1_700_000_000,
                    potentially_superseded: false,
                },
                interval: DateTimeInterval::new(1_700_000_000, 1800),
                randomize_duration: None,
                randomize_start: None,
            },
            device_category: None,
            base: DerControlBase {
                op_mod_exp_lim_w: Some(ActivePower::new(3, 5)),
                ..Default::default()
            },
        }
    }

    fn notification_with(resource: NotificationResource) -> Notification {
        Notification {
            href: None,
            subscribed_resource: "/edev/1/derp/1/derc".to_string(),
            new_resource_uri: None,
            status: NotificationStatus::Default,
            subscription_uri: "/edev/1/sub/4".to_string(),
            resource: Some(resource),
        }
    }

    #[test]
    fn test_subscription_round_trip() {
        let sub = sample_subscription();
        let xml = sub.to_xml().unwrap();
        assert_eq!(Subscription::from_xml(&xml).unwrap(), sub);
    }

    #[test]
    fn test_subscription_with_condition_round_trip() {
        let sub = Subscription {
            condition: Some(Condition {
                attribute_identifier: ConditionAttributeIdentifier::ReadingValue,
                lower_threshold: -1000,
                upper_threshold: 1000,
            }),
            ..sample_subscription()
        };
        let xml = sub.to_xml().unwrap();
        assert_eq!(Subscription::from_xml(&xml).unwrap(), sub);
    }

    #[test]
    fn test_notification_root_declares_all_namespaces() {
        let n = notification_with(NotificationResource::Reading(Reading::new(1500)));
        let xml = n.to_xml().unwrap();
        assert!(xml.contains(&format!(r#"xmlns="{SEP2_NS}""#)));
        assert!(xml.contains(&format!(r#"xmlns:csipaus="{CSIP_NS}""#)));
        assert!(xml.contains(&format!(r#"xmlns:xsi="{XSI_NS}""#)));
    }

    #[test]
    fn test_notification_reading_resource_round_trip() {
        let n = notification_with(NotificationResource::Reading(Reading::new(1500)));
        let xml = n.to_xml().unwrap();
        assert!(xml.contains(r#"<Resource xsi:type="Reading">"#));
        assert_eq!(Notification::from_xml(&xml).unwrap(), n);
    }

    #[test]
    fn test_notification_der_control_list_resource_round_trip() {
        let items = vec![sample_control("01"), sample_control("02"), sample_control("03")];
        let list = DerControlList::wrap(items, 3, None);
        let n = notification_with(NotificationResource::DerControlList(list));
        let xml = n.to_xml().unwrap();
        assert!(xml.contains(r#"<Resource xsi:type="DERControlList" all="3" results="3">"#));
        let back = Notification::from_xml(&xml).unwrap();
        match &back.resource {
            Some(NotificationResource::DerControlList(l)) => assert_eq!(l.items.len(), 3),
            other => panic!("resolved to {other:?}"),
        }
        assert_eq!(back, n);
    }

    #[test]
    fn test_notification_der_capability_resource_round_trip() {
        let cap = DerCapability {
            href: None,
            subscribable: None,
            modes_supported: DerControlType::OP_MOD_ENERGIZE,
            rtg_max_va: None,
            rtg_max_var: None,
            rtg_max_w: ActivePower::new(3, 7),
            der_type: DerType::CombinedPvAndStorage,
        };
        let n = notification_with(NotificationResource::DerCapability(cap));
        let xml = n.to_xml().unwrap();
        assert_eq!(Notification::from_xml(&xml).unwrap(), n);
    }

    #[test]
    fn test_unknown_discriminator_falls_back_to_generic_resource() {
        let xml = format!(
            r#"<Notification xmlns="{SEP2_NS}" xmlns:xsi="{XSI_NS}"><subscribedResource>/edev/1</subscribedResource><Resource xsi:type="UnknownFutureType" href="/edev/1/thing"><mystery>1</mystery></Resource><status>0</status><subscriptionURI>/edev/1/sub/4</subscriptionURI></Notification>"#
        );
        let n = Notification::from_xml(&xml).unwrap();
        assert_eq!(
            n.resource,
            Some(NotificationResource::Resource(Resource::new("/edev/1/thing")))
        );
    }

    #[test]
    fn test_missing_discriminator_falls_back_to_generic_resource() {
        let xml = format!(
            r#"<Notification xmlns="{SEP2_NS}"><subscribedResource>/edev/1</subscribedResource><Resource href="/edev/1/thing"/><status>0</status><subscriptionURI>/edev/1/sub/4</subscriptionURI></Notification>"#
        );
        let n = Notification::from_xml(&xml).unwrap();
        assert_eq!(
            n.resource,
            Some(NotificationResource::Resource(Resource::new("/edev/1/thing")))
        );
    }

    #[test]
    fn test_notification_without_resource_round_trip() {
        let n = Notification {
            href: None,
            subscribed_resource: "/edev/1/derp/1/derc".to_string(),
            new_resource_uri: Some("/edev/1/derp/2/derc".to_string()),
            status: NotificationStatus::SubscriptionCancelledResourceMoved,
            subscription_uri: "/edev/1/sub/4".to_string(),
            resource: None,
        };
        let xml = n.to_xml().unwrap();
        assert!(!xml.contains("<Resource"));
        assert_eq!(Notification::from_xml(&xml).unwrap(), n);
    }

    #[test]
    fn test_notification_list_round_trip() {
        let list = NotificationList::wrap(
            vec![
                notification_with(NotificationResource::Reading(Reading::new(1))),
                notification_with(NotificationResource::Resource(Resource::new("/x"))),
            ],
            2,
            None,
        );
        let xml = list.to_xml().unwrap();
        assert_eq!(NotificationList::from_xml(&xml).unwrap(), list);
    }

    #[test]
    fn test_subscription_list_round_trip() {
        let list = List::wrap(vec![sample_subscription()], 1, Some(900));
        let xml = list.to_xml().unwrap();
        let back: List<Subscription> = List::from_xml(&xml).unwrap();
        assert_eq!(back, list);
    }
}
