//! Codec for tariff and pricing resources

use crate::codec::{
    ListItem, XmlDecode, XmlEncode, opt_child_text, opt_num, parse_hex_bits, push_opt, req_child,
    req_num, text_el,
};
use crate::common::{
    build_event, build_ident, build_respondable, link_el, list_link_el, opt_list_link,
    parse_event, parse_href, parse_ident, parse_link, parse_list_link, parse_respondable,
    parse_unit_value, push_href, push_opt_list_link, unit_value_el,
};
use crate::dom::Element;
use crate::error::XmlResult;
use sep2_core::{
    ConsumptionBlockType, CurrencyCode, PrimacyType, RoleFlagsType, ServiceKind, TouType,
};
use sep2_model::pricing::{
    ConsumptionTariffInterval, RateComponent, TariffProfile, TimeTariffInterval,
};

impl XmlEncode for TariffProfile {
    const TAG: &'static str = "TariffProfile";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        build_ident(&self.ident, el);
        if let Some(c) = self.currency {
            el.add_child(text_el("currency", c.to_u16()));
        }
        push_opt(el, "pricePowerOfTenMultiplier", self.price_power_of_ten_multiplier);
        if let Some(p) = self.primacy_type {
            el.add_child(text_el("primacyType", p.to_u8()));
        }
        push_opt(el, "rateCode", self.rate_code.as_ref());
        el.add_child(text_el("serviceCategoryKind", self.service_category_kind.to_u8()));
        push_opt_list_link(el, "RateComponentListLink", &self.rate_component_list_link);
    }
}

impl XmlDecode for TariffProfile {
    const TAG: &'static str = "TariffProfile";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(TariffProfile {
            href: parse_href(el),
            ident: parse_ident(el)?,
            currency: opt_num::<u16>(el, "currency")?
                .map(CurrencyCode::from_u16)
                .transpose()?,
            price_power_of_ten_multiplier: opt_num(el, "pricePowerOfTenMultiplier")?,
            primacy_type: opt_num::<u8>(el, "primacyType")?
                .map(PrimacyType::from_u8)
                .transpose()?,
            rate_code: opt_child_text(el, "rateCode").map(str::to_string),
            service_category_kind: ServiceKind::from_u8(req_num(el, "serviceCategoryKind")?)?,
            rate_component_list_link: opt_list_link(el, "RateComponentListLink")?,
        })
    }
}

impl ListItem for TariffProfile {
    const LIST_TAG: &'static str = "TariffProfileList";
}

impl XmlEncode for RateComponent {
    const TAG: &'static str = "RateComponent";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        build_ident(&self.ident, el);
        if let Some(v) = &self.flow_rate_end_limit {
            el.add_child(unit_value_el("flowRateEndLimit", v));
        }
        if let Some(v) = &self.flow_rate_start_limit {
            el.add_child(unit_value_el("flowRateStartLimit", v));
        }
        el.add_child(text_el("roleFlags", format!("{:x}", self.role_flags.bits())));
        el.add_child(link_el("ReadingTypeLink", &self.reading_type_link));
        if let Some(l) = &self.active_time_tariff_interval_list_link {
            el.add_child(list_link_el("ActiveTimeTariffIntervalListLink", l));
        }
        el.add_child(list_link_el(
            "TimeTariffIntervalListLink",
            &self.time_tariff_interval_list_link,
        ));
    }
}

impl XmlDecode for RateComponent {
    const TAG: &'static str = "RateComponent";

    fn from_element(el: &Element) -> XmlResult<Self> {
        let bits = parse_hex_bits("roleFlags", req_child(el, "roleFlags")?.text.as_str())?;
        Ok(RateComponent {
            href: parse_href(el),
            ident: parse_ident(el)?,
            flow_rate_end_limit: el
                .child("flowRateEndLimit")
                .map(parse_unit_value)
                .transpose()?,
            flow_rate_start_limit: el
                .child("flowRateStartLimit")
                .map(parse_unit_value)
                .transpose()?,
            role_flags: RoleFlagsType::from_bits(bits)?,
            reading_type_link: parse_link(req_child(el, "ReadingTypeLink")?)?,
            active_time_tariff_interval_list_link: opt_list_link(
                el,
                "ActiveTimeTariffIntervalListLink",
            )?,
            time_tariff_interval_list_link: parse_list_link(req_child(
                el,
                "TimeTariffIntervalListLink",
            )?)?,
        })
    }
}

impl ListItem for RateComponent {
    const LIST_TAG: &'static str = "RateComponentList";
}

impl XmlEncode for TimeTariffInterval {
    const TAG: &'static str = "TimeTariffInterval";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        build_respondable(&self.respondable, el);
        build_ident(&self.ident, el);
        build_event(&self.event, el);
        el.add_child(text_el("touTier", self.tou_tier.to_u8()));
        el.add_child(list_link_el(
            "ConsumptionTariffIntervalListLink",
            &self.consumption_tariff_interval_list_link,
        ));
    }
}

impl XmlDecode for TimeTariffInterval {
    const TAG: &'static str = "TimeTariffInterval";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(TimeTariffInterval {
            href: parse_href(el),
            respondable: parse_respondable(el)?,
            ident: parse_ident(el)?,
            event: parse_event(el)?,
            tou_tier: TouType::from_u8(req_num(el, "touTier")?)?,
            consumption_tariff_interval_list_link: parse_list_link(req_child(
                el,
                "ConsumptionTariffIntervalListLink",
            )?)?,
        })
    }
}

impl ListItem for TimeTariffInterval {
    const LIST_TAG: &'static str = "TimeTariffIntervalList";
}

impl XmlEncode for ConsumptionTariffInterval {
    const TAG: &'static str = "ConsumptionTariffInterval";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        el.add_child(text_el("consumptionBlock", self.consumption_block.to_u8()));
        push_opt(el, "price", self.price);
        el.add_child(text_el("startValue", self.start_value));
    }
}

impl XmlDecode for ConsumptionTariffInterval {
    const TAG: &'static str = "ConsumptionTariffInterval";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(ConsumptionTariffInterval {
            href: parse_href(el),
            consumption_block: ConsumptionBlockType::from_u8(req_num(el, "consumptionBlock")?)?,
            price: opt_num(el, "price")?,
            start_value: req_num(el, "startValue")?,
        })
    }
}

impl ListItem for ConsumptionTariffInterval {
    const LIST_TAG: &'static str = "ConsumptionTariffIntervalList";
}

#[cfg(test)]
mod tests {
    use super::*;
    use sep2_core::{CurrentStatusType, DateTimeInterval, HexBinary128, UomType};
    use sep2_model::event::{EventInfo, EventStatus};
    use sep2_model::identification::{IdentifiedObject, Link, List, ListLink, Respondable};
    use sep2_model::pricing::{
        ConsumptionTariffIntervalList, TimeTariffIntervalList, UnitValueType,
    };

    #[test]
    fn test_tariff_profile_round_trip() {
        let profile = TariffProfile {
            href: Some("/tp/1".to_string()),
            ident: IdentifiedObject::new(HexBinary128::new("1f".repeat(16)).unwrap()),
            currency: Some(CurrencyCode::Aud),
            price_power_of_ten_multiplier: Some(-4),
            primacy_type: Some(PrimacyType::InHome),
            rate_code: Some("DYN-2024".to_string()),
            service_category_kind: ServiceKind::Electricity,
            rate_component_list_link: Some(ListLink::with_all("/tp/1/rc", 2)),
        };
        let xml = profile.to_xml().unwrap();
        assert_eq!(TariffProfile::from_xml(&xml).unwrap(), profile);
    }

    #[test]
    fn test_tariff_profile_minimal() {
        let xml = r#"<TariffProfile xmlns="urn:ieee:std:2030.5:ns"><mRID>aa</mRID><serviceCategoryKind>0</serviceCategoryKind></TariffProfile>"#;
        let profile = TariffProfile::from_xml(xml).unwrap();
        assert_eq!(profile.currency, None);
        assert_eq!(profile.service_category_kind, ServiceKind::Electricity);
    }

    #[test]
    fn test_rate_component_round_trip() {
        let rc = RateComponent {
            href: Some("/tp/1/rc/1".to_string()),
            ident: IdentifiedObject::new(HexBinary128::new("ab").unwrap()),
            flow_rate_end_limit: None,
            flow_rate_start_limit: Some(UnitValueType {
                multiplier: 0,
                unit: UomType::Watts,
                value: 1500,
            }),
            role_flags: RoleFlagsType::IS_MIRROR | RoleFlagsType::IS_DER,
            reading_type_link: Link::new("/rt/1"),
            active_time_tariff_interval_list_link: None,
            time_tariff_interval_list_link: ListLink::with_all("/tp/1/rc/1/tti", 4),
        };
        let xml = rc.to_xml().unwrap();
        assert!(xml.contains("<roleFlags>9</roleFlags>"));
        assert_eq!(RateComponent::from_xml(&xml).unwrap(), rc);
    }

    #[test]
    fn test_rate_component_unknown_role_flag_bit_rejected() {
        let rc = RateComponent {
            href: None,
            ident: IdentifiedObject::new(HexBinary128::new("ab").unwrap()),
            flow_rate_end_limit: None,
            flow_rate_start_limit: None,
            role_flags: RoleFlagsType::IS_PREMISES_AGGREGATION_POINT,
            reading_type_link: Link::new("/rt/1"),
            active_time_tariff_interval_list_link: None,
            time_tariff_interval_list_link: ListLink::with_all("/tp/1/rc/1/tti", 4),
        };
        let xml = rc.to_xml().unwrap();
        // bit 7 is past the last defined role flag
        let bad = xml.replace("<roleFlags>2</roleFlags>", "<roleFlags>80</roleFlags>");
        assert_ne!(bad, xml);
        assert!(RateComponent::from_xml(&bad).is_err());
    }

    #[test]
    fn test_time_tariff_interval_list_round_trip() {
        let tti = TimeTariffInterval {
            href: Some("/tp/1/rc/1/tti/1".to_string()),
            respondable: Respondable::default(),
            ident: IdentifiedObject::new(HexBinary128::new("01").unwrap()),
            event: EventInfo {
                creation_time: 1_700_000_000,
                event_status: EventStatus {
                    current_status: CurrentStatusType::Active,
                    date_time: 1_700_000_000,
                    potentially_superseded: false,
                },
                interval: DateTimeInterval::new(1_700_000_000, 3600),
                randomize_duration: None,
                randomize_start: None,
            },
            tou_tier: TouType::from_u8(2).unwrap(),
            consumption_tariff_interval_list_link: ListLink::new("/tp/1/rc/1/tti/1/cti"),
        };
        let list = TimeTariffIntervalList::wrap(vec![tti], 1, None);
        let xml = list.to_xml().unwrap();
        assert_eq!(TimeTariffIntervalList::from_xml(&xml).unwrap(), list);
    }

    #[test]
    fn test_consumption_tariff_interval_price_omitted_when_absent() {
        let cti = ConsumptionTariffInterval {
            href: None,
            consumption_block: ConsumptionBlockType::from_u8(1).unwrap(),
            price: None,
            start_value: 0,
        };
        let xml = cti.to_xml().unwrap();
        assert!(!xml.contains("price"));
        assert_eq!(ConsumptionTariffInterval::from_xml(&xml).unwrap(), cti);
    }

    #[test]
    fn test_empty_consumption_tariff_interval_list() {
        let list: ConsumptionTariffIntervalList = List::empty();
        let xml = list.to_xml().unwrap();
        let back = ConsumptionTariffIntervalList::from_xml(&xml).unwrap();
        assert!(back.items.is_empty());
        assert_eq!(back, list);
    }

    #[test]
    fn test_negative_price_round_trip() {
        let cti = ConsumptionTariffInterval {
            href: None,
            consumption_block: ConsumptionBlockType::from_u8(0).unwrap(),
            price: Some(-1234),
            start_value: 500,
        };
        let xml = cti.to_xml().unwrap();
        assert!(xml.contains("<price>-1234</price>"));
        assert_eq!(ConsumptionTariffInterval::from_xml(&xml).unwrap(), cti);
    }
}
