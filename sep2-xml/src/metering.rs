//! Codec for metering resources

use crate::codec::{XmlDecode, XmlEncode, opt_num, parse_subscribable, push_opt, req_num, text_el};
use crate::common::{interval_el, parse_href, parse_interval, push_href, push_subscribable};
use crate::dom::Element;
use crate::error::XmlResult;
use sep2_core::{ConsumptionBlockType, HexBinary16, TouType};
use sep2_model::metering::Reading;

impl XmlEncode for Reading {
    const TAG: &'static str = "Reading";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        push_opt(el, "localID", self.local_id.as_ref());
        if let Some(b) = self.consumption_block {
            el.add_child(text_el("consumptionBlock", b.to_u8()));
        }
        push_opt(el, "qualityFlags", self.quality_flags.as_ref());
        if let Some(p) = &self.time_period {
            el.add_child(interval_el("timePeriod", p));
        }
        if let Some(t) = self.tou_tier {
            el.add_child(text_el("touTier", t.to_u8()));
        }
        el.add_child(text_el("value", self.value));
    }
}

impl XmlDecode for Reading {
    const TAG: &'static str = "Reading";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Reading {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            local_id: el
                .child("localID")
                .map(|c| HexBinary16::new(c.text.as_str()))
                .transpose()?,
            consumption_block: opt_num::<u8>(el, "consumptionBlock")?
                .map(ConsumptionBlockType::from_u8)
                .transpose()?,
            quality_flags: el
                .child("qualityFlags")
                .map(|c| HexBinary16::new(c.text.as_str()))
                .transpose()?,
            time_period: el.child("timePeriod").map(parse_interval).transpose()?,
            tou_tier: opt_num::<u8>(el, "touTier")?.map(TouType::from_u8).transpose()?,
            value: req_num(el, "value")?,
        })
    }
}
