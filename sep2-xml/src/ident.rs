//! Codec for the base resource shapes

use crate::codec::{XmlDecode, XmlEncode, opt_num, push_opt, req_num, text_el};
use crate::common::{parse_href, push_href};
use crate::dom::Element;
use crate::error::XmlResult;
use sep2_core::ReasonCodeType;
use sep2_model::identification::Resource;
use sep2_model::response::ErrorResponse;

impl XmlEncode for Resource {
    const TAG: &'static str = "Resource";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
    }
}

impl XmlDecode for Resource {
    const TAG: &'static str = "Resource";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Resource {
            href: parse_href(el),
        })
    }
}

impl XmlEncode for ErrorResponse {
    const TAG: &'static str = "Error";

    fn build(&self, el: &mut Element) {
        push_opt(el, "maxRetryDuration", self.max_retry_duration);
        el.add_child(text_el("reasonCode", self.reason_code.to_u8()));
        // Absent message produces no element; an empty string still does.
        if let Some(message) = &self.message {
            el.add_child(text_el("message", message));
        }
    }
}

impl XmlDecode for ErrorResponse {
    const TAG: &'static str = "Error";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(ErrorResponse {
            max_retry_duration: opt_num(el, "maxRetryDuration")?,
            reason_code: ReasonCodeType::from_u8(req_num(el, "reasonCode")?)?,
            message: el.child("message").map(|c| c.text.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_round_trip() {
        let r = Resource::new("/edev/1");
        let xml = r.to_xml().unwrap();
        assert!(xml.contains(r#"href="/edev/1""#));
        assert_eq!(Resource::from_xml(&xml).unwrap(), r);
    }

    #[test]
    fn test_error_absent_message_is_omitted() {
        let e = ErrorResponse::new(ReasonCodeType::ResourceLimitReached);
        let xml = e.to_xml().unwrap();
        assert!(!xml.contains("message"));
        let back = ErrorResponse::from_xml(&xml).unwrap();
        assert_eq!(back.message, None);
        assert_eq!(back, e);
    }

    #[test]
    fn test_error_empty_message_is_emitted() {
        let mut e = ErrorResponse::new(ReasonCodeType::InvalidRequestFormat);
        e.message = Some(String::new());
        let xml = e.to_xml().unwrap();
        assert!(xml.contains("<message/>"));
        assert_eq!(ErrorResponse::from_xml(&xml).unwrap().message, Some(String::new()));
    }

    #[test]
    fn test_error_full_round_trip() {
        let e = ErrorResponse {
            max_retry_duration: Some(30),
            reason_code: ReasonCodeType::MaximumRequestFrequencyExceeded,
            message: Some("slow down".to_string()),
        };
        let xml = e.to_xml().unwrap();
        assert_eq!(ErrorResponse::from_xml(&xml).unwrap(), e);
    }

    #[test]
    fn test_unexpected_root() {
        let err = ErrorResponse::from_xml("<NotError/>").unwrap_err();
        assert!(matches!(
            err,
            crate::error::XmlError::UnexpectedRoot { .. }
        ));
    }

    #[test]
    fn test_foreign_default_namespace_rejected() {
        let err = Resource::from_xml(r#"<Resource xmlns="urn:wrong:ns"/>"#).unwrap_err();
        assert!(matches!(
            err,
            crate::error::XmlError::UnexpectedNamespace(_)
        ));
    }
}
