//! Codec for end device and function set assignment resources
//!
//! The `csipaus:ConnectionPointLink` child of `EndDevice` is the one
//! extension-namespace field on this surface.

use crate::codec::{
    ListItem, XmlDecode, XmlEncode, opt_bool, opt_num, parse_subscribable, push_opt, req_num,
    text_el,
};
use crate::common::{
    build_ident, opt_link, opt_list_link, parse_href, parse_ident, push_href, push_opt_link,
    push_opt_list_link, push_subscribable,
};
use crate::dom::{CSIP_PREFIX, Element};
use crate::error::XmlResult;
use sep2_core::{HexBinary32, HexBinary160};
use sep2_model::end_device::EndDevice;
use sep2_model::function_set_assignments::FunctionSetAssignments;

impl XmlEncode for EndDevice {
    const TAG: &'static str = "EndDevice";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        push_opt_link(el, "ConfigurationLink", &self.configuration_link);
        push_opt_list_link(el, "DERListLink", &self.der_list_link);
        push_opt(el, "deviceCategory", self.device_category.as_ref());
        push_opt_link(el, "DeviceInformationLink", &self.device_information_link);
        push_opt_link(el, "DeviceStatusLink", &self.device_status_link);
        push_opt(el, "lFDI", self.lfdi.as_ref());
        el.add_child(text_el("sFDI", self.sfdi));
        el.add_child(text_el("changedTime", self.changed_time));
        push_opt(el, "enabled", self.enabled);
        push_opt_list_link(
            el,
            "FunctionSetAssignmentsListLink",
            &self.function_set_assignments_list_link,
        );
        push_opt(el, "postRate", self.post_rate);
        push_opt_link(el, "RegistrationLink", &self.registration_link);
        push_opt_list_link(el, "SubscriptionListLink", &self.subscription_list_link);
        push_opt_link(
            el,
            &format!("{CSIP_PREFIX}:ConnectionPointLink"),
            &self.connection_point_link,
        );
    }
}

impl XmlDecode for EndDevice {
    const TAG: &'static str = "EndDevice";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(EndDevice {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            configuration_link: opt_link(el, "ConfigurationLink")?,
            der_list_link: opt_list_link(el, "DERListLink")?,
            device_category: el
                .child("deviceCategory")
                .map(|c| HexBinary32::new(c.text.as_str()))
                .transpose()?,
            device_information_link: opt_link(el, "DeviceInformationLink")?,
            device_status_link: opt_link(el, "DeviceStatusLink")?,
            lfdi: el
                .child("lFDI")
                .map(|c| HexBinary160::new(c.text.as_str()))
                .transpose()?,
            sfdi: req_num(el, "sFDI")?,
            changed_time: req_num(el, "changedTime")?,
            enabled: opt_bool(el, "enabled")?,
            function_set_assignments_list_link: opt_list_link(el, "FunctionSetAssignmentsListLink")?,
            post_rate: opt_num(el, "postRate")?,
            registration_link: opt_link(el, "RegistrationLink")?,
            subscription_list_link: opt_list_link(el, "SubscriptionListLink")?,
            connection_point_link: opt_link(el, "ConnectionPointLink")?,
        })
    }
}

impl ListItem for EndDevice {
    const LIST_TAG: &'static str = "EndDeviceList";
}

impl XmlEncode for FunctionSetAssignments {
    const TAG: &'static str = "FunctionSetAssignments";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        build_ident(&self.ident, el);
        push_opt_link(el, "TimeLink", &self.time_link);
        push_opt_list_link(
            el,
            "DemandResponseProgramListLink",
            &self.demand_response_program_list_link,
        );
        push_opt_list_link(el, "DERProgramListLink", &self.der_program_list_link);
        push_opt_list_link(el, "MessagingProgramListLink", &self.messaging_program_list_link);
        push_opt_list_link(el, "TariffProfileListLink", &self.tariff_profile_list_link);
        push_opt_list_link(el, "UsagePointListLink", &self.usage_point_list_link);
    }
}

impl XmlDecode for FunctionSetAssignments {
    const TAG: &'static str = "FunctionSetAssignments";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(FunctionSetAssignments {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            ident: parse_ident(el)?,
            time_link: opt_link(el, "TimeLink")?,
            demand_response_program_list_link: opt_list_link(el, "DemandResponseProgramListLink")?,
            der_program_list_link: opt_list_link(el, "DERProgramListLink")?,
            messaging_program_list_link: opt_list_link(el, "MessagingProgramListLink")?,
            tariff_profile_list_link: opt_list_link(el, "TariffProfileListLink")?,
            usage_point_list_link: opt_list_link(el, "UsagePointListLink")?,
        })
    }
}

impl ListItem for FunctionSetAssignments {
    const LIST_TAG: &'static str = "FunctionSetAssignmentsList";
}
