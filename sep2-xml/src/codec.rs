//! Encode/decode traits and the generic list plumbing
//!
//! The structural rules of the wire contract live here: which fields are
//! attributes versus child elements is baked into each `build`/
//! `from_element` pair, sibling elements are emitted in schema sequence
//! order, and optional fields that are absent produce no node at all (a
//! present-but-empty value still produces its node - only absence is
//! special).

use crate::dom::{CSIP_NS, Element, SEP2_NS, XSI_NS};
use crate::error::{XmlError, XmlResult};
use sep2_model::identification::List;
use std::fmt::Display;
use std::str::FromStr;

/// Types that serialize to a SEP2 XML element.
pub trait XmlEncode {
    /// Wire tag of this resource's element
    const TAG: &'static str;

    /// Fill attributes and children of an element already named `TAG`.
    fn build(&self, el: &mut Element);

    /// Build the element for this value.
    fn to_element(&self) -> Element {
        let mut el = Element::new(Self::TAG);
        self.build(&mut el);
        el
    }

    /// Serialize as a standalone document, namespace declarations on the
    /// root.
    fn to_xml(&self) -> XmlResult<String> {
        let mut el = Element::new(Self::TAG);
        el.set_attr("xmlns", SEP2_NS);
        el.set_attr("xmlns:csipaus", CSIP_NS);
        el.set_attr("xmlns:xsi", XSI_NS);
        self.build(&mut el);
        el.to_xml_string()
    }
}

/// Types that deserialize from a SEP2 XML element.
pub trait XmlDecode: Sized {
    /// Expected wire tag when this resource is a document root
    const TAG: &'static str;

    /// Decode from an element, regardless of the element's own name.
    fn from_element(el: &Element) -> XmlResult<Self>;

    /// Parse a standalone document. Fails if the root tag is not `TAG` or
    /// declares a foreign default namespace.
    fn from_xml(xml: &str) -> XmlResult<Self> {
        let el = Element::parse(xml)?;
        if el.local_name() != Self::TAG {
            return Err(XmlError::UnexpectedRoot {
                expected: Self::TAG.to_string(),
                found: el.local_name().to_string(),
            });
        }
        if let Some(ns) = el.attrs.iter().find(|(k, _)| k == "xmlns").map(|(_, v)| v) {
            if ns != SEP2_NS {
                return Err(XmlError::UnexpectedNamespace(ns.clone()));
            }
        }
        Self::from_element(&el)
    }
}

/// Element types that may appear as items of a SEP2 list resource.
pub trait ListItem: XmlEncode + XmlDecode {
    /// Wire tag of the containing list resource
    const LIST_TAG: &'static str;
}

impl<T: ListItem> XmlEncode for List<T> {
    const TAG: &'static str = T::LIST_TAG;

    fn build(&self, el: &mut Element) {
        if let Some(href) = &self.href {
            el.set_attr("href", href);
        }
        el.set_attr("all", self.all.to_string());
        el.set_attr("results", self.results.to_string());
        if let Some(rate) = self.poll_rate {
            el.set_attr("pollRate", rate.to_string());
        }
        if let Some(sub) = self.subscribable {
            el.set_attr("subscribable", sub.to_u8().to_string());
        }
        for item in &self.items {
            el.add_child(item.to_element());
        }
    }
}

impl<T: ListItem> XmlDecode for List<T> {
    const TAG: &'static str = T::LIST_TAG;

    fn from_element(el: &Element) -> XmlResult<Self> {
        // Item children entirely absent decodes to the empty sequence.
        let items = el
            .children_named(<T as XmlEncode>::TAG)
            .map(T::from_element)
            .collect::<XmlResult<Vec<T>>>()?;
        Ok(List {
            href: el.attr("href").map(str::to_string),
            all: req_attr_num(el, "all")?,
            results: req_attr_num(el, "results")?,
            poll_rate: opt_attr_num(el, "pollRate")?,
            subscribable: parse_subscribable(el)?,
            items,
        })
    }
}

// ---- attribute helpers ----

pub(crate) fn req_attr<'a>(el: &'a Element, name: &str) -> XmlResult<&'a str> {
    el.attr(name)
        .ok_or_else(|| XmlError::MissingAttribute(name.to_string()))
}

pub(crate) fn req_attr_num<T>(el: &Element, name: &str) -> XmlResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_num(name, req_attr(el, name)?)
}

pub(crate) fn opt_attr_num<T>(el: &Element, name: &str) -> XmlResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    el.attr(name).map(|s| parse_num(name, s)).transpose()
}

pub(crate) fn parse_subscribable(
    el: &Element,
) -> XmlResult<Option<sep2_core::SubscribableType>> {
    opt_attr_num::<u8>(el, "subscribable")?
        .map(|v| sep2_core::SubscribableType::from_u8(v).map_err(XmlError::from))
        .transpose()
}

// ---- element helpers ----

/// Build a child element holding only text.
pub(crate) fn text_el(name: &str, value: impl Display) -> Element {
    let mut el = Element::new(name);
    el.text = value.to_string();
    el
}

/// Push `<name>value</name>` when the value is present.
pub(crate) fn push_opt(el: &mut Element, name: &str, value: Option<impl Display>) {
    if let Some(v) = value {
        el.add_child(text_el(name, v));
    }
}

pub(crate) fn req_child<'a>(el: &'a Element, name: &str) -> XmlResult<&'a Element> {
    el.child(name)
        .ok_or_else(|| XmlError::MissingElement(name.to_string()))
}

pub(crate) fn req_child_text<'a>(el: &'a Element, name: &str) -> XmlResult<&'a str> {
    Ok(req_child(el, name)?.text.as_str())
}

/// Text of an optional child; a present-but-empty element yields `Some("")`.
pub(crate) fn opt_child_text<'a>(el: &'a Element, name: &str) -> Option<&'a str> {
    el.child(name).map(|c| c.text.as_str())
}

pub(crate) fn parse_num<T>(field: &str, s: &str) -> XmlResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    s.trim().parse().map_err(|e: T::Err| XmlError::InvalidValue {
        field: field.to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn req_num<T>(el: &Element, name: &str) -> XmlResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_num(name, req_child_text(el, name)?)
}

pub(crate) fn opt_num<T>(el: &Element, name: &str) -> XmlResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    opt_child_text(el, name).map(|s| parse_num(name, s)).transpose()
}

pub(crate) fn parse_bool(field: &str, s: &str) -> XmlResult<bool> {
    match s.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(XmlError::InvalidValue {
            field: field.to_string(),
            message: format!("not a boolean: {other}"),
        }),
    }
}

pub(crate) fn req_bool(el: &Element, name: &str) -> XmlResult<bool> {
    parse_bool(name, req_child_text(el, name)?)
}

pub(crate) fn opt_bool(el: &Element, name: &str) -> XmlResult<Option<bool>> {
    opt_child_text(el, name).map(|s| parse_bool(name, s)).transpose()
}

/// Parse a hex-encoded bit pattern (flag fields travel as hex strings).
pub(crate) fn parse_hex_bits(field: &str, s: &str) -> XmlResult<u32> {
    u32::from_str_radix(s.trim(), 16).map_err(|e| XmlError::InvalidValue {
        field: field.to_string(),
        message: e.to_string(),
    })
}
