//! Shared encode/decode blocks for the capability structs and power value
//! types embedded across resources.

use crate::codec::{
    opt_num, parse_num, push_opt, req_bool, req_child, req_child_text, req_num, text_el,
};
use crate::dom::Element;
use crate::error::{XmlError, XmlResult};
use sep2_core::{CurrentStatusType, DateTimeInterval, HexBinary8, HexBinary128};
use sep2_model::der_control_types::{
    ActivePower, FixedVar, PowerFactorWithExcitation, ReactivePower,
};
use sep2_model::event::{EventInfo, EventStatus};
use sep2_model::identification::{IdentifiedObject, Link, ListLink, Respondable};
use sep2_model::pricing::UnitValueType;

// ---- href / Respondable (attributes) ----

pub(crate) fn push_href(el: &mut Element, href: &Option<String>) {
    if let Some(h) = href {
        el.set_attr("href", h);
    }
}

pub(crate) fn parse_href(el: &Element) -> Option<String> {
    el.attr("href").map(str::to_string)
}

pub(crate) fn push_subscribable(el: &mut Element, sub: &Option<sep2_core::SubscribableType>) {
    if let Some(s) = sub {
        el.set_attr("subscribable", s.to_u8().to_string());
    }
}

pub(crate) fn build_respondable(r: &Respondable, el: &mut Element) {
    if let Some(reply_to) = &r.reply_to {
        el.set_attr("replyTo", reply_to);
    }
    if let Some(rr) = &r.response_required {
        el.set_attr("responseRequired", rr.as_str());
    }
}

pub(crate) fn parse_respondable(el: &Element) -> XmlResult<Respondable> {
    Ok(Respondable {
        reply_to: el.attr("replyTo").map(str::to_string),
        response_required: el
            .attr("responseRequired")
            .map(HexBinary8::new)
            .transpose()?,
    })
}

// ---- IdentifiedObject (elements: mRID, description, version) ----

pub(crate) fn build_ident(i: &IdentifiedObject, el: &mut Element) {
    el.add_child(text_el("mRID", &i.mrid));
    push_opt(el, "description", i.description.as_ref());
    push_opt(el, "version", i.version);
}

pub(crate) fn parse_ident(el: &Element) -> XmlResult<IdentifiedObject> {
    Ok(IdentifiedObject {
        mrid: HexBinary128::new(req_child_text(el, "mRID")?)?,
        description: el.child("description").map(|c| c.text.clone()),
        version: opt_num(el, "version")?,
    })
}

// ---- Event / EventStatus / interval ----

pub(crate) fn interval_el(name: &str, i: &DateTimeInterval) -> Element {
    let mut el = Element::new(name);
    el.add_child(text_el("duration", i.duration));
    el.add_child(text_el("start", i.start));
    el
}

pub(crate) fn parse_interval(el: &Element) -> XmlResult<DateTimeInterval> {
    Ok(DateTimeInterval {
        duration: req_num(el, "duration")?,
        start: req_num(el, "start")?,
    })
}

pub(crate) fn build_event(e: &EventInfo, el: &mut Element) {
    el.add_child(text_el("creationTime", e.creation_time));
    let mut status = Element::new("EventStatus");
    status.add_child(text_el("currentStatus", e.event_status.current_status.to_u8()));
    status.add_child(text_el("dateTime", e.event_status.date_time));
    status.add_child(text_el(
        "potentiallySuperseded",
        e.event_status.potentially_superseded,
    ));
    el.add_child(status);
    el.add_child(interval_el("interval", &e.interval));
    push_opt(el, "randomizeDuration", e.randomize_duration);
    push_opt(el, "randomizeStart", e.randomize_start);
}

pub(crate) fn parse_event(el: &Element) -> XmlResult<EventInfo> {
    let status = req_child(el, "EventStatus")?;
    Ok(EventInfo {
        creation_time: req_num(el, "creationTime")?,
        event_status: EventStatus {
            current_status: CurrentStatusType::from_u8(req_num(status, "currentStatus")?)?,
            date_time: req_num(status, "dateTime")?,
            potentially_superseded: req_bool(status, "potentiallySuperseded")?,
        },
        interval: parse_interval(req_child(el, "interval")?)?,
        randomize_duration: opt_num(el, "randomizeDuration")?,
        randomize_start: opt_num(el, "randomizeStart")?,
    })
}

// ---- Link / ListLink (href carried as an attribute) ----

pub(crate) fn link_el(name: &str, link: &Link) -> Element {
    let mut el = Element::new(name);
    el.set_attr("href", &link.href);
    el
}

pub(crate) fn parse_link(el: &Element) -> XmlResult<Link> {
    Ok(Link {
        href: el
            .attr("href")
            .ok_or_else(|| XmlError::MissingAttribute("href".to_string()))?
            .to_string(),
    })
}

pub(crate) fn push_opt_link(el: &mut Element, name: &str, link: &Option<Link>) {
    if let Some(l) = link {
        el.add_child(link_el(name, l));
    }
}

pub(crate) fn opt_link(el: &Element, name: &str) -> XmlResult<Option<Link>> {
    el.child(name).map(parse_link).transpose()
}

pub(crate) fn list_link_el(name: &str, link: &ListLink) -> Element {
    let mut el = Element::new(name);
    el.set_attr("href", &link.href);
    if let Some(all) = link.all {
        el.set_attr("all", all.to_string());
    }
    el
}

pub(crate) fn parse_list_link(el: &Element) -> XmlResult<ListLink> {
    Ok(ListLink {
        href: el
            .attr("href")
            .ok_or_else(|| XmlError::MissingAttribute("href".to_string()))?
            .to_string(),
        all: el.attr("all").map(|s| parse_num("all", s)).transpose()?,
    })
}

pub(crate) fn push_opt_list_link(el: &mut Element, name: &str, link: &Option<ListLink>) {
    if let Some(l) = link {
        el.add_child(list_link_el(name, l));
    }
}

pub(crate) fn opt_list_link(el: &Element, name: &str) -> XmlResult<Option<ListLink>> {
    el.child(name).map(parse_list_link).transpose()
}

// ---- power value types ----

pub(crate) fn active_power_el(name: &str, p: &ActivePower) -> Element {
    let mut el = Element::new(name);
    el.add_child(text_el("multiplier", p.multiplier));
    el.add_child(text_el("value", p.value));
    el
}

pub(crate) fn parse_active_power(el: &Element) -> XmlResult<ActivePower> {
    Ok(ActivePower {
        multiplier: req_num(el, "multiplier")?,
        value: req_num(el, "value")?,
    })
}

pub(crate) fn push_opt_active_power(el: &mut Element, name: &str, p: &Option<ActivePower>) {
    if let Some(p) = p {
        el.add_child(active_power_el(name, p));
    }
}

pub(crate) fn opt_active_power(el: &Element, name: &str) -> XmlResult<Option<ActivePower>> {
    el.child(name).map(parse_active_power).transpose()
}

pub(crate) fn reactive_power_el(name: &str, p: &ReactivePower) -> Element {
    let mut el = Element::new(name);
    el.add_child(text_el("multiplier", p.multiplier));
    el.add_child(text_el("value", p.value));
    el
}

pub(crate) fn parse_reactive_power(el: &Element) -> XmlResult<ReactivePower> {
    Ok(ReactivePower {
        multiplier: req_num(el, "multiplier")?,
        value: req_num(el, "value")?,
    })
}

pub(crate) fn push_opt_reactive_power(el: &mut Element, name: &str, p: &Option<ReactivePower>) {
    if let Some(p) = p {
        el.add_child(reactive_power_el(name, p));
    }
}

pub(crate) fn opt_reactive_power(el: &Element, name: &str) -> XmlResult<Option<ReactivePower>> {
    el.child(name).map(parse_reactive_power).transpose()
}

pub(crate) fn fixed_var_el(name: &str, v: &FixedVar) -> Element {
    let mut el = Element::new(name);
    el.add_child(text_el("refType", v.ref_type));
    el.add_child(text_el("value", v.value));
    el
}

pub(crate) fn parse_fixed_var(el: &Element) -> XmlResult<FixedVar> {
    Ok(FixedVar {
        ref_type: req_num(el, "refType")?,
        value: sep2_core::SignedPerCent::new(req_num(el, "value")?)?,
    })
}

pub(crate) fn pf_with_excitation_el(name: &str, pf: &PowerFactorWithExcitation) -> Element {
    let mut el = Element::new(name);
    el.add_child(text_el("displacement", pf.displacement));
    el.add_child(text_el("excitation", pf.excitation));
    el.add_child(text_el("multiplier", pf.multiplier));
    el
}

pub(crate) fn parse_pf_with_excitation(el: &Element) -> XmlResult<PowerFactorWithExcitation> {
    Ok(PowerFactorWithExcitation {
        displacement: req_num(el, "displacement")?,
        excitation: req_bool(el, "excitation")?,
        multiplier: req_num(el, "multiplier")?,
    })
}

pub(crate) fn unit_value_el(name: &str, v: &UnitValueType) -> Element {
    let mut el = Element::new(name);
    el.add_child(text_el("multiplier", v.multiplier));
    el.add_child(text_el("unit", v.unit.to_u8()));
    el.add_child(text_el("value", v.value));
    el
}

pub(crate) fn parse_unit_value(el: &Element) -> XmlResult<UnitValueType> {
    Ok(UnitValueType {
        multiplier: req_num(el, "multiplier")?,
        unit: sep2_core::UomType::from_u8(req_num(el, "unit")?)?,
        value: req_num(el, "value")?,
    })
}
