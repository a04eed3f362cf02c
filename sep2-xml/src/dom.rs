//! Lightweight element tree over quick-xml
//!
//! The codec parses documents into this tree before decoding models from
//! it, and builds the tree before writing. Going through a tree rather than
//! streaming keeps the polymorphic notification resolution simple: the same
//! element can be inspected for its discriminator and then decoded as
//! whichever shape that names.
//!
//! Namespaces are handled by fixed prefixes rather than full resolution:
//! the protocol pins the default namespace to the SEP2 namespace, CSIP-Aus
//! extension elements to the `csipaus` prefix and the discriminator
//! attribute to the `xsi` prefix. Child and attribute lookups match on the
//! local part of the name, so a conforming document decodes regardless of
//! prefix spelling.

use crate::error::{XmlError, XmlResult};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// Default namespace of the base standard
pub const SEP2_NS: &str = "urn:ieee:std:2030.5:ns";
/// Namespace of the CSIP-Aus extension profile
pub const CSIP_NS: &str = "https://csipaus.org/ns";
/// XML Schema instance namespace (carries the type discriminator)
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Prefix extension elements are written with
pub const CSIP_PREFIX: &str = "csipaus";

/// A parsed XML element: name as written, attributes, text and children in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written, e.g. `DERControl` or `csipaus:opModImpLimW`
    pub name: String,
    /// Attributes in document order, excluding nothing (xmlns included)
    pub attrs: Vec<(String, String)>,
    /// Concatenated character data directly under this element
    pub text: String,
    /// Child elements in document order
    pub children: Vec<Element>,
}

fn local_part(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

impl Element {
    /// Create an empty element with the given (possibly prefixed) name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The name without its prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// The prefix, if the name carries one.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(p, _)| p)
    }

    /// Append an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Look up an attribute by local name. Namespace declarations are never
    /// matched. A qualified query (`xsi:type`) matches only that exact name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let qualified = name.contains(':');
        self.attrs.iter().find_map(|(k, v)| {
            if k == name {
                return Some(v.as_str());
            }
            if !qualified && !k.starts_with("xmlns") && local_part(k) == name && k.contains(':') {
                return Some(v.as_str());
            }
            None
        })
    }

    /// The `xsi:type` discriminator attribute, if present.
    pub fn xsi_type(&self) -> Option<&str> {
        self.attr("xsi:type")
    }

    /// Append a child element.
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First child whose local name matches.
    pub fn child(&self, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.local_name() == local)
    }

    /// All children whose local name matches, in document order.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.local_name() == local)
    }

    /// Parse a document into its root element.
    pub fn parse(xml: &str) -> XmlResult<Element> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let el = element_from_start(&e)?;
                    stack.push(el);
                }
                Ok(Event::Empty(e)) => {
                    let el = element_from_start(&e)?;
                    finish_element(el, &mut stack, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| XmlError::Parse("unbalanced end tag".to_string()))?;
                    finish_element(el, &mut stack, &mut root)?;
                }
                Ok(Event::Text(t)) => {
                    if let Some(top) = stack.last_mut() {
                        let text = t
                            .unescape()
                            .map_err(|e| XmlError::Parse(e.to_string()))?;
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(XmlError::Parse(e.to_string())),
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(XmlError::Parse("document ended inside an element".to_string()));
        }
        root.ok_or_else(|| XmlError::Parse("document contains no root element".to_string()))
    }

    /// Serialize this element (and subtree) to an XML string.
    pub fn to_xml_string(&self) -> XmlResult<String> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self)?;
        String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Parse(e.to_string()))
    }
}

fn element_from_start(e: &BytesStart<'_>) -> XmlResult<Element> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut el = Element::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(|e| XmlError::Parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| XmlError::Parse(e.to_string()))?
            .into_owned();
        el.set_attr(key, value);
    }
    Ok(el)
}

fn finish_element(
    el: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> XmlResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.add_child(el),
        None => {
            if root.is_some() {
                return Err(XmlError::Parse("multiple root elements".to_string()));
            }
            *root = Some(el);
        }
    }
    Ok(())
}

fn write_element(writer: &mut Writer<Vec<u8>>, el: &Element) -> XmlResult<()> {
    let mut start = BytesStart::new(el.name.as_str());
    for (k, v) in &el.attrs {
        start.push_attribute((k.as_str(), v.as_str()));
    }
    if el.text.is_empty() && el.children.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| XmlError::Parse(e.to_string()))?;
        return Ok(());
    }
    writer
        .write_event(Event::Start(start))
        .map_err(|e| XmlError::Parse(e.to_string()))?;
    if !el.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&el.text)))
            .map_err(|e| XmlError::Parse(e.to_string()))?;
    }
    for child in &el.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(el.name.as_str())))
        .map_err(|e| XmlError::Parse(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let el = Element::parse(r#"<Resource href="/edev/1"/>"#).unwrap();
        assert_eq!(el.name, "Resource");
        assert_eq!(el.attr("href"), Some("/edev/1"));
        assert!(el.children.is_empty());
    }

    #[test]
    fn test_parse_nested_and_text() {
        let el = Element::parse("<a><b>1</b><c><d>x</d></c><b>2</b></a>").unwrap();
        assert_eq!(el.children.len(), 3);
        assert_eq!(el.child("b").unwrap().text, "1");
        assert_eq!(el.children_named("b").count(), 2);
        assert_eq!(el.child("c").unwrap().child("d").unwrap().text, "x");
    }

    #[test]
    fn test_local_name_matching_ignores_prefix() {
        let el = Element::parse(
            r#"<a xmlns:csipaus="https://csipaus.org/ns"><csipaus:opModImpLimW>5</csipaus:opModImpLimW></a>"#,
        )
        .unwrap();
        let child = el.child("opModImpLimW").unwrap();
        assert_eq!(child.prefix(), Some("csipaus"));
        assert_eq!(child.text, "5");
    }

    #[test]
    fn test_attr_does_not_match_xmlns() {
        let el = Element::parse(r#"<a xmlns:x="urn:x" x:type="T"/>"#).unwrap();
        assert_eq!(el.attr("type"), Some("T"));
        assert_eq!(el.attr("x"), None);
    }

    #[test]
    fn test_xsi_type() {
        let el = Element::parse(r#"<Resource xsi:type="Reading" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"/>"#).unwrap();
        assert_eq!(el.xsi_type(), Some("Reading"));
    }

    #[test]
    fn test_write_round_trip() {
        let mut el = Element::new("DERControl");
        el.set_attr("href", "/derc/1");
        let mut child = Element::new("mRID");
        child.text = "abc123".to_string();
        el.add_child(child);
        el.add_child(Element::new("DERControlBase"));
        let xml = el.to_xml_string().unwrap();
        assert_eq!(
            xml,
            r#"<DERControl href="/derc/1"><mRID>abc123</mRID><DERControlBase/></DERControl>"#
        );
        assert_eq!(Element::parse(&xml).unwrap(), el);
    }

    #[test]
    fn test_text_escaping() {
        let mut el = Element::new("message");
        el.text = "a<b&c".to_string();
        let xml = el.to_xml_string().unwrap();
        assert!(xml.contains("a&lt;b&amp;c"));
        assert_eq!(Element::parse(&xml).unwrap().text, "a<b&c");
    }

    #[test]
    fn test_unbalanced_fails() {
        assert!(Element::parse("<a><b></a>").is_err());
    }

    #[test]
    fn test_empty_document_fails() {
        assert!(Element::parse("").is_err());
    }
}
