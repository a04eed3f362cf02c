//! Codec for DER control and status resources
//!
//! The CSIP-Aus extension fields of `DERControlBase` are emitted under the
//! `csipaus` prefix; all sibling base-standard fields stay in the default
//! namespace.

use crate::codec::{
    ListItem, XmlDecode, XmlEncode, opt_bool, opt_num, parse_hex_bits, parse_subscribable,
    push_opt, req_bool, req_child, req_num, text_el,
};
use crate::common::{
    active_power_el, build_event, build_ident, build_respondable, fixed_var_el, opt_active_power,
    opt_link, opt_list_link, opt_reactive_power, parse_active_power, parse_event, parse_fixed_var,
    parse_href, parse_ident, parse_pf_with_excitation, parse_respondable, pf_with_excitation_el,
    push_href, push_opt_active_power, push_opt_link, push_opt_list_link, push_opt_reactive_power,
    push_subscribable,
};
use crate::dom::{CSIP_PREFIX, Element};
use crate::error::XmlResult;
use sep2_core::{
    DerControlType, DerType, DeviceCategoryType, HexBinary8, HexBinary32, InverterStatusType,
    LocalControlModeStatusType, OperationalModeStatusType, PerCent, PrimacyType, SignedPerCent,
    StorageModeStatusType,
};
use sep2_model::der::{
    ConnectStatusValue, DefaultDerControl, DemandResponseProgram, Der, DerAvailability, DerCapability,
    DerControl, DerControlBase, DerProgram, DerSettings, DerStatus, EndDeviceControl,
    InverterStatusValue, LocalControlModeStatusValue, ManufacturerStatusValue,
    OperationalModeStatusValue, StateOfChargeStatusValue, StorageModeStatusValue,
};

fn csip(name: &str) -> String {
    format!("{CSIP_PREFIX}:{name}")
}

impl XmlEncode for DerControlBase {
    const TAG: &'static str = "DERControlBase";

    fn build(&self, el: &mut Element) {
        push_opt(el, "opModConnect", self.op_mod_connect);
        push_opt(el, "opModEnergize", self.op_mod_energize);
        if let Some(pf) = &self.op_mod_fixed_pf_absorb_w {
            el.add_child(pf_with_excitation_el("opModFixedPFAbsorbW", pf));
        }
        if let Some(pf) = &self.op_mod_fixed_pf_inject_w {
            el.add_child(pf_with_excitation_el("opModFixedPFInjectW", pf));
        }
        if let Some(fv) = &self.op_mod_fixed_var {
            el.add_child(fixed_var_el("opModFixedVar", fv));
        }
        push_opt(el, "opModFixedW", self.op_mod_fixed_w);
        push_opt(el, "opModFreqDroop", self.op_mod_freq_droop);
        push_opt_link(el, "opModFreqWatt", &self.op_mod_freq_watt);
        push_opt(el, "opModMaxLimW", self.op_mod_max_lim_w);
        push_opt_reactive_power(el, "opModTargetVar", &self.op_mod_target_var);
        push_opt_active_power(el, "opModTargetW", &self.op_mod_target_w);
        push_opt_link(el, "opModVoltVar", &self.op_mod_volt_var);
        push_opt(el, "rampTms", self.ramp_tms);
        push_opt_active_power(el, &csip("opModImpLimW"), &self.op_mod_imp_lim_w);
        push_opt_active_power(el, &csip("opModExpLimW"), &self.op_mod_exp_lim_w);
        push_opt_active_power(el, &csip("opModGenLimW"), &self.op_mod_gen_lim_w);
        push_opt_active_power(el, &csip("opModLoadLimW"), &self.op_mod_load_lim_w);
    }
}

impl XmlDecode for DerControlBase {
    const TAG: &'static str = "DERControlBase";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DerControlBase {
            op_mod_connect: opt_bool(el, "opModConnect")?,
            op_mod_energize: opt_bool(el, "opModEnergize")?,
            op_mod_fixed_pf_absorb_w: el
                .child("opModFixedPFAbsorbW")
                .map(parse_pf_with_excitation)
                .transpose()?,
            op_mod_fixed_pf_inject_w: el
                .child("opModFixedPFInjectW")
                .map(parse_pf_with_excitation)
                .transpose()?,
            op_mod_fixed_var: el.child("opModFixedVar").map(parse_fixed_var).transpose()?,
            op_mod_fixed_w: opt_num::<i16>(el, "opModFixedW")?
                .map(SignedPerCent::new)
                .transpose()?,
            op_mod_freq_droop: opt_num(el, "opModFreqDroop")?,
            op_mod_freq_watt: opt_link(el, "opModFreqWatt")?,
            op_mod_max_lim_w: opt_num::<u16>(el, "opModMaxLimW")?
                .map(PerCent::new)
                .transpose()?,
            op_mod_target_var: opt_reactive_power(el, "opModTargetVar")?,
            op_mod_target_w: opt_active_power(el, "opModTargetW")?,
            op_mod_volt_var: opt_link(el, "opModVoltVar")?,
            ramp_tms: opt_num(el, "rampTms")?,
            op_mod_imp_lim_w: opt_active_power(el, "opModImpLimW")?,
            op_mod_exp_lim_w: opt_active_power(el, "opModExpLimW")?,
            op_mod_gen_lim_w: opt_active_power(el, "opModGenLimW")?,
            op_mod_load_lim_w: opt_active_power(el, "opModLoadLimW")?,
        })
    }
}

impl XmlEncode for DerControl {
    const TAG: &'static str = "DERControl";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        build_respondable(&self.respondable, el);
        build_ident(&self.ident, el);
        build_event(&self.event, el);
        push_opt(el, "deviceCategory", self.device_category.as_ref());
        el.add_child(self.base.to_element());
    }
}

impl XmlDecode for DerControl {
    const TAG: &'static str = "DERControl";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DerControl {
            href: parse_href(el),
            respondable: parse_respondable(el)?,
            ident: parse_ident(el)?,
            event: parse_event(el)?,
            device_category: el
                .child("deviceCategory")
                .map(|c| HexBinary32::new(c.text.as_str()))
                .transpose()?,
            base: DerControlBase::from_element(req_child(el, "DERControlBase")?)?,
        })
    }
}

impl ListItem for DerControl {
    const LIST_TAG: &'static str = "DERControlList";
}

impl XmlEncode for DefaultDerControl {
    const TAG: &'static str = "DefaultDERControl";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        build_ident(&self.ident, el);
        push_opt(el, "setESDelay", self.set_es_delay);
        push_opt(el, "setESHighFreq", self.set_es_high_freq);
        push_opt(el, "setESHighVolt", self.set_es_high_volt);
        push_opt(el, "setESLowFreq", self.set_es_low_freq);
        push_opt(el, "setESLowVolt", self.set_es_low_volt);
        push_opt(el, "setESRampTms", self.set_es_ramp_tms);
        push_opt(el, "setESRandomDelay", self.set_es_random_delay);
        push_opt(el, "setGradW", self.set_grad_w);
        push_opt(el, "setSoftGradW", self.set_soft_grad_w);
        el.add_child(self.base.to_element());
    }
}

impl XmlDecode for DefaultDerControl {
    const TAG: &'static str = "DefaultDERControl";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DefaultDerControl {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            ident: parse_ident(el)?,
            set_es_delay: opt_num(el, "setESDelay")?,
            set_es_high_freq: opt_num(el, "setESHighFreq")?,
            set_es_high_volt: opt_num(el, "setESHighVolt")?,
            set_es_low_freq: opt_num(el, "setESLowFreq")?,
            set_es_low_volt: opt_num(el, "setESLowVolt")?,
            set_es_ramp_tms: opt_num(el, "setESRampTms")?,
            set_es_random_delay: opt_num(el, "setESRandomDelay")?,
            set_grad_w: opt_num(el, "setGradW")?,
            set_soft_grad_w: opt_num(el, "setSoftGradW")?,
            base: DerControlBase::from_element(req_child(el, "DERControlBase")?)?,
        })
    }
}

impl XmlEncode for DerProgram {
    const TAG: &'static str = "DERProgram";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        build_ident(&self.ident, el);
        el.add_child(text_el("primacy", self.primacy.to_u8()));
        push_opt_link(el, "DefaultDERControlLink", &self.default_der_control_link);
        push_opt_list_link(el, "ActiveDERControlListLink", &self.active_der_control_list_link);
        push_opt_list_link(el, "DERControlListLink", &self.der_control_list_link);
        push_opt_list_link(el, "DERCurveListLink", &self.der_curve_list_link);
    }
}

impl XmlDecode for DerProgram {
    const TAG: &'static str = "DERProgram";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DerProgram {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            ident: parse_ident(el)?,
            primacy: PrimacyType::from_u8(req_num(el, "primacy")?)?,
            default_der_control_link: opt_link(el, "DefaultDERControlLink")?,
            active_der_control_list_link: opt_list_link(el, "ActiveDERControlListLink")?,
            der_control_list_link: opt_list_link(el, "DERControlListLink")?,
            der_curve_list_link: opt_list_link(el, "DERCurveListLink")?,
        })
    }
}

impl ListItem for DerProgram {
    const LIST_TAG: &'static str = "DERProgramList";
}

impl XmlEncode for Der {
    const TAG: &'static str = "DER";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        push_opt_link(el, "AssociatedUsagePointLink", &self.associated_usage_point_link);
        push_opt_list_link(
            el,
            "AssociatedDERProgramListLink",
            &self.associated_der_program_list_link,
        );
        push_opt_link(el, "CurrentDERProgramLink", &self.current_der_program_link);
        push_opt_link(el, "DERStatusLink", &self.der_status_link);
        push_opt_link(el, "DERCapabilityLink", &self.der_capability_link);
        push_opt_link(el, "DERSettingsLink", &self.der_settings_link);
        push_opt_link(el, "DERAvailabilityLink", &self.der_availability_link);
    }
}

impl XmlDecode for Der {
    const TAG: &'static str = "DER";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(Der {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            associated_usage_point_link: opt_link(el, "AssociatedUsagePointLink")?,
            associated_der_program_list_link: opt_list_link(el, "AssociatedDERProgramListLink")?,
            current_der_program_link: opt_link(el, "CurrentDERProgramLink")?,
            der_status_link: opt_link(el, "DERStatusLink")?,
            der_capability_link: opt_link(el, "DERCapabilityLink")?,
            der_settings_link: opt_link(el, "DERSettingsLink")?,
            der_availability_link: opt_link(el, "DERAvailabilityLink")?,
        })
    }
}

impl ListItem for Der {
    const LIST_TAG: &'static str = "DERList";
}

// Timestamped status value wrappers: <dateTime> then <value>.

fn status_value_el(name: &str, date_time: i64, value: impl std::fmt::Display) -> Element {
    let mut el = Element::new(name);
    el.add_child(text_el("dateTime", date_time));
    el.add_child(text_el("value", value));
    el
}

impl XmlEncode for DerStatus {
    const TAG: &'static str = "DERStatus";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        push_opt(el, "alarmStatus", self.alarm_status.as_ref());
        if let Some(v) = &self.gen_connect_status {
            el.add_child(status_value_el("genConnectStatus", v.date_time, &v.value));
        }
        if let Some(v) = &self.inverter_status {
            el.add_child(status_value_el("inverterStatus", v.date_time, v.value.to_u8()));
        }
        if let Some(v) = &self.local_control_mode_status {
            el.add_child(status_value_el("localControlModeStatus", v.date_time, v.value.to_u8()));
        }
        if let Some(v) = &self.manufacturer_status {
            el.add_child(status_value_el("manufacturerStatus", v.date_time, &v.value));
        }
        if let Some(v) = &self.operational_mode_status {
            el.add_child(status_value_el("operationalModeStatus", v.date_time, v.value.to_u8()));
        }
        el.add_child(text_el("readingTime", self.reading_time));
        if let Some(v) = &self.state_of_charge_status {
            el.add_child(status_value_el("stateOfChargeStatus", v.date_time, v.value));
        }
        if let Some(v) = &self.storage_mode_status {
            el.add_child(status_value_el("storageModeStatus", v.date_time, v.value.to_u8()));
        }
        if let Some(v) = &self.stor_connect_status {
            el.add_child(status_value_el("storConnectStatus", v.date_time, &v.value));
        }
    }
}

impl XmlDecode for DerStatus {
    const TAG: &'static str = "DERStatus";

    fn from_element(el: &Element) -> XmlResult<Self> {
        let connect_status = |name: &str| -> XmlResult<Option<ConnectStatusValue>> {
            el.child(name)
                .map(|c| -> XmlResult<_> {
                    Ok(ConnectStatusValue {
                        date_time: req_num(c, "dateTime")?,
                        value: HexBinary8::new(req_child(c, "value")?.text.as_str())?,
                    })
                })
                .transpose()
        };
        Ok(DerStatus {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            alarm_status: el
                .child("alarmStatus")
                .map(|c| HexBinary32::new(c.text.as_str()))
                .transpose()?,
            gen_connect_status: connect_status("genConnectStatus")?,
            inverter_status: el
                .child("inverterStatus")
                .map(|c| -> XmlResult<_> {
                    Ok(InverterStatusValue {
                        date_time: req_num(c, "dateTime")?,
                        value: InverterStatusType::from_u8(req_num(c, "value")?)?,
                    })
                })
                .transpose()?,
            local_control_mode_status: el
                .child("localControlModeStatus")
                .map(|c| -> XmlResult<_> {
                    Ok(LocalControlModeStatusValue {
                        date_time: req_num(c, "dateTime")?,
                        value: LocalControlModeStatusType::from_u8(req_num(c, "value")?)?,
                    })
                })
                .transpose()?,
            manufacturer_status: el
                .child("manufacturerStatus")
                .map(|c| -> XmlResult<_> {
                    Ok(ManufacturerStatusValue {
                        date_time: req_num(c, "dateTime")?,
                        value: req_child(c, "value")?.text.clone(),
                    })
                })
                .transpose()?,
            operational_mode_status: el
                .child("operationalModeStatus")
                .map(|c| -> XmlResult<_> {
                    Ok(OperationalModeStatusValue {
                        date_time: req_num(c, "dateTime")?,
                        value: OperationalModeStatusType::from_u8(req_num(c, "value")?)?,
                    })
                })
                .transpose()?,
            reading_time: req_num(el, "readingTime")?,
            state_of_charge_status: el
                .child("stateOfChargeStatus")
                .map(|c| -> XmlResult<_> {
                    Ok(StateOfChargeStatusValue {
                        date_time: req_num(c, "dateTime")?,
                        value: PerCent::new(req_num(c, "value")?)?,
                    })
                })
                .transpose()?,
            storage_mode_status: el
                .child("storageModeStatus")
                .map(|c| -> XmlResult<_> {
                    Ok(StorageModeStatusValue {
                        date_time: req_num(c, "dateTime")?,
                        value: StorageModeStatusType::from_u8(req_num(c, "value")?)?,
                    })
                })
                .transpose()?,
            stor_connect_status: connect_status("storConnectStatus")?,
        })
    }
}

impl XmlEncode for DerAvailability {
    const TAG: &'static str = "DERAvailability";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        push_opt(el, "availabilityDuration", self.availability_duration);
        push_opt(el, "maxChargeDuration", self.max_charge_duration);
        el.add_child(text_el("readingTime", self.reading_time));
        push_opt(el, "reserveChargePercent", self.reserve_charge_percent);
        push_opt(el, "reservePercent", self.reserve_percent);
        push_opt_reactive_power(el, "statVarAvail", &self.stat_var_avail);
        push_opt_active_power(el, "statWAvail", &self.stat_w_avail);
    }
}

impl XmlDecode for DerAvailability {
    const TAG: &'static str = "DERAvailability";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DerAvailability {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            availability_duration: opt_num(el, "availabilityDuration")?,
            max_charge_duration: opt_num(el, "maxChargeDuration")?,
            reading_time: req_num(el, "readingTime")?,
            reserve_charge_percent: opt_num::<u16>(el, "reserveChargePercent")?
                .map(PerCent::new)
                .transpose()?,
            reserve_percent: opt_num::<u16>(el, "reservePercent")?
                .map(PerCent::new)
                .transpose()?,
            stat_var_avail: opt_reactive_power(el, "statVarAvail")?,
            stat_w_avail: opt_active_power(el, "statWAvail")?,
        })
    }
}

impl XmlEncode for DerCapability {
    const TAG: &'static str = "DERCapability";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        el.add_child(text_el("modesSupported", format!("{:x}", self.modes_supported.bits())));
        push_opt_active_power(el, "rtgMaxVA", &self.rtg_max_va);
        push_opt_reactive_power(el, "rtgMaxVar", &self.rtg_max_var);
        el.add_child(active_power_el("rtgMaxW", &self.rtg_max_w));
        el.add_child(text_el("type", self.der_type.to_u8()));
    }
}

impl XmlDecode for DerCapability {
    const TAG: &'static str = "DERCapability";

    fn from_element(el: &Element) -> XmlResult<Self> {
        let bits = parse_hex_bits("modesSupported", req_child(el, "modesSupported")?.text.as_str())?;
        Ok(DerCapability {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            modes_supported: DerControlType::from_bits(bits)?,
            rtg_max_va: opt_active_power(el, "rtgMaxVA")?,
            rtg_max_var: opt_reactive_power(el, "rtgMaxVar")?,
            rtg_max_w: parse_active_power(req_child(el, "rtgMaxW")?)?,
            der_type: DerType::from_u8(req_num(el, "type")?)?,
        })
    }
}

impl XmlEncode for DerSettings {
    const TAG: &'static str = "DERSettings";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        push_subscribable(el, &self.subscribable);
        if let Some(modes) = &self.modes_enabled {
            el.add_child(text_el("modesEnabled", format!("{:x}", modes.bits())));
        }
        el.add_child(text_el("setGradW", self.set_grad_w));
        push_opt_active_power(el, "setMaxVA", &self.set_max_va);
        push_opt_reactive_power(el, "setMaxVar", &self.set_max_var);
        el.add_child(active_power_el("setMaxW", &self.set_max_w));
        el.add_child(text_el("updatedTime", self.updated_time));
    }
}

impl XmlDecode for DerSettings {
    const TAG: &'static str = "DERSettings";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DerSettings {
            href: parse_href(el),
            subscribable: parse_subscribable(el)?,
            modes_enabled: el
                .child("modesEnabled")
                .map(|c| -> XmlResult<_> {
                    let bits = parse_hex_bits("modesEnabled", c.text.as_str())?;
                    DerControlType::from_bits(bits).map_err(crate::error::XmlError::from)
                })
                .transpose()?,
            set_grad_w: req_num(el, "setGradW")?,
            set_max_va: opt_active_power(el, "setMaxVA")?,
            set_max_var: opt_reactive_power(el, "setMaxVar")?,
            set_max_w: parse_active_power(req_child(el, "setMaxW")?)?,
            updated_time: req_num(el, "updatedTime")?,
        })
    }
}

impl XmlEncode for DemandResponseProgram {
    const TAG: &'static str = "DemandResponseProgram";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        build_ident(&self.ident, el);
        push_opt(
            el,
            "availabilityUpdatePercentChangeThreshold",
            self.availability_update_percent_change_threshold,
        );
        push_opt_active_power(
            el,
            "availabilityUpdatePowerChangeThreshold",
            &self.availability_update_power_change_threshold,
        );
        el.add_child(text_el("primacy", self.primacy.to_u8()));
        push_opt_list_link(
            el,
            "ActiveEndDeviceControlListLink",
            &self.active_end_device_control_list_link,
        );
        push_opt_list_link(el, "EndDeviceControlListLink", &self.end_device_control_list_link);
    }
}

impl XmlDecode for DemandResponseProgram {
    const TAG: &'static str = "DemandResponseProgram";

    fn from_element(el: &Element) -> XmlResult<Self> {
        Ok(DemandResponseProgram {
            href: parse_href(el),
            ident: parse_ident(el)?,
            availability_update_percent_change_threshold: opt_num::<u16>(
                el,
                "availabilityUpdatePercentChangeThreshold",
            )?
            .map(PerCent::new)
            .transpose()?,
            availability_update_power_change_threshold: opt_active_power(
                el,
                "availabilityUpdatePowerChangeThreshold",
            )?,
            primacy: PrimacyType::from_u8(req_num(el, "primacy")?)?,
            active_end_device_control_list_link: opt_list_link(el, "ActiveEndDeviceControlListLink")?,
            end_device_control_list_link: opt_list_link(el, "EndDeviceControlListLink")?,
        })
    }
}

impl ListItem for DemandResponseProgram {
    const LIST_TAG: &'static str = "DemandResponseProgramList";
}

impl XmlEncode for EndDeviceControl {
    const TAG: &'static str = "EndDeviceControl";

    fn build(&self, el: &mut Element) {
        push_href(el, &self.href);
        build_respondable(&self.respondable, el);
        build_ident(&self.ident, el);
        build_event(&self.event, el);
        el.add_child(text_el("deviceCategory", format!("{:x}", self.device_category.bits())));
        el.add_child(text_el("drProgramMandatory", self.dr_program_mandatory));
        el.add_child(text_el("loadShiftForward", self.load_shift_forward));
        push_opt(el, "overrideDuration", self.override_duration);
    }
}

impl XmlDecode for EndDeviceControl {
    const TAG: &'static str = "EndDeviceControl";

    fn from_element(el: &Element) -> XmlResult<Self> {
        let bits = parse_hex_bits("deviceCategory", req_child(el, "deviceCategory")?.text.as_str())?;
        Ok(EndDeviceControl {
            href: parse_href(el),
            respondable: parse_respondable(el)?,
            ident: parse_ident(el)?,
            event: parse_event(el)?,
            device_category: DeviceCategoryType::from_bits(bits)?,
            dr_program_mandatory: req_bool(el, "drProgramMandatory")?,
            load_shift_forward: req_bool(el, "loadShiftForward")?,
            override_duration: opt_num(el, "overrideDuration")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{XmlDecode, XmlEncode};
    use sep2_core::{CurrentStatusType, DateTimeInterval, HexBinary128};
    use sep2_model::der::DerControlList;
    use sep2_model::der_control_types::ActivePower;
    use sep2_model::event::{EventInfo, EventStatus};
    use sep2_model::identification::{IdentifiedObject, List, Respondable};

    fn sample_event(start: i64) -> EventInfo {
        EventInfo {
            creation_time: start - 3600,
            event_status: EventStatus {
                current_status: CurrentStatusType::Scheduled,
                date_time: start - 3600,
                potentially_superseded: false,
            },
            interval: DateTimeInterval::new(start, 1800),
            randomize_duration: Some(60),
            randomize_start: None,
        }
    }

    fn sample_control(mrid: &str, start: i64) -> DerControl {
        DerControl {
            href: Some(format!("/derp/1/derc/{mrid}")),
            respondable: Respondable {
                reply_to: Some("/rsps/1".to_string()),
                response_required: Some(sep2_core::HexBinary8::new("03").unwrap()),
            },
            ident: IdentifiedObject::new(HexBinary128::new(mrid).unwrap()),
            event: sample_event(start),
            device_category: None,
            base: DerControlBase {
                op_mod_energize: Some(true),
                op_mod_exp_lim_w: Some(ActivePower::new(3, 5)),
                op_mod_imp_lim_w: Some(ActivePower::new(3, 5)),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_der_control_round_trip() {
        let control = sample_control("abc123", 1_700_000_000);
        let xml = control.to_xml().unwrap();
        assert_eq!(DerControl::from_xml(&xml).unwrap(), control);
    }

    #[test]
    fn test_csip_fields_carry_extension_prefix() {
        let control = sample_control("abc123", 1_700_000_000);
        let xml = control.to_xml().unwrap();
        assert!(xml.contains("<csipaus:opModExpLimW>"));
        assert!(xml.contains("<csipaus:opModImpLimW>"));
        // Base-standard siblings stay unprefixed.
        assert!(xml.contains("<opModEnergize>true</opModEnergize>"));
    }

    #[test]
    fn test_der_control_list_round_trip() {
        let items = vec![
            sample_control("01", 1_700_000_000),
            sample_control("02", 1_700_003_600),
            sample_control("03", 1_700_007_200),
        ];
        let list = DerControlList::wrap(items, 5, Some(60));
        let xml = list.to_xml().unwrap();
        assert!(xml.contains(r#"all="5""#));
        assert!(xml.contains(r#"results="3""#));
        assert!(xml.contains(r#"pollRate="60""#));
        let back = DerControlList::from_xml(&xml).unwrap();
        assert_eq!(back, list);
        assert_eq!(back.items.len(), 3);
    }

    #[test]
    fn test_empty_list_decodes_to_empty_items() {
        let back =
            DerControlList::from_xml(r#"<DERControlList xmlns="urn:ieee:std:2030.5:ns" all="0" results="0"/>"#)
                .unwrap();
        assert_eq!(back.items, Vec::new());
        assert_eq!(back.all, 0);
    }

    #[test]
    fn test_der_capability_modes_hex_round_trip() {
        let cap = DerCapability {
            href: None,
            subscribable: Some(sep2_core::SubscribableType::NonConditional),
            modes_supported: DerControlType::CHARGE_MODE | DerControlType::OP_MOD_MAX_LIM_W,
            rtg_max_va: None,
            rtg_max_var: None,
            rtg_max_w: ActivePower::new(3, 10),
            der_type: DerType::PhotovoltaicSystem,
        };
        let xml = cap.to_xml().unwrap();
        assert!(xml.contains("<modesSupported>100001</modesSupported>"));
        assert_eq!(DerCapability::from_xml(&xml).unwrap(), cap);
    }

    #[test]
    fn test_der_capability_unknown_mode_bit_rejected() {
        let xml = format!(
            r#"<DERCapability xmlns="urn:ieee:std:2030.5:ns"><modesSupported>{:x}</modesSupported><rtgMaxW><multiplier>0</multiplier><value>1</value></rtgMaxW><type>4</type></DERCapability>"#,
            1u32 << 27
        );
        assert!(DerCapability::from_xml(&xml).is_err());
    }

    #[test]
    fn test_default_der_control_round_trip() {
        let dderc = DefaultDerControl {
            href: Some("/derp/1/dderc".to_string()),
            subscribable: None,
            ident: IdentifiedObject::new(HexBinary128::new("dd01").unwrap()),
            set_es_delay: Some(300),
            set_es_high_freq: None,
            set_es_high_volt: None,
            set_es_low_freq: None,
            set_es_low_volt: None,
            set_es_ramp_tms: None,
            set_es_random_delay: None,
            set_grad_w: Some(100),
            set_soft_grad_w: None,
            base: DerControlBase {
                op_mod_connect: Some(true),
                ..Default::default()
            },
        };
        let xml = dderc.to_xml().unwrap();
        assert_eq!(DefaultDerControl::from_xml(&xml).unwrap(), dderc);
    }

    #[test]
    fn test_der_status_round_trip() {
        let status = DerStatus {
            href: None,
            subscribable: None,
            alarm_status: Some(HexBinary32::new("11").unwrap()),
            gen_connect_status: Some(ConnectStatusValue {
                date_time: 1_700_000_000,
                value: HexBinary8::new("05").unwrap(),
            }),
            inverter_status: Some(InverterStatusValue {
                date_time: 1_700_000_000,
                value: InverterStatusType::TrackingMpptPowerPoint,
            }),
            local_control_mode_status: None,
            manufacturer_status: Some(ManufacturerStatusValue {
                date_time: 1_700_000_000,
                value: "ok".to_string(),
            }),
            operational_mode_status: None,
            reading_time: 1_700_000_060,
            state_of_charge_status: Some(StateOfChargeStatusValue {
                date_time: 1_700_000_000,
                value: PerCent::new(5500).unwrap(),
            }),
            storage_mode_status: Some(StorageModeStatusValue {
                date_time: 1_700_000_000,
                value: StorageModeStatusType::Charging,
            }),
            stor_connect_status: None,
        };
        let xml = status.to_xml().unwrap();
        assert_eq!(DerStatus::from_xml(&xml).unwrap(), status);
    }

    #[test]
    fn test_der_settings_round_trip() {
        let settings = DerSettings {
            href: None,
            subscribable: None,
            modes_enabled: Some(DerControlType::OP_MOD_ENERGIZE),
            set_grad_w: 55,
            set_max_va: None,
            set_max_var: None,
            set_max_w: ActivePower::new(0, 5000),
            updated_time: 1_700_000_000,
        };
        let xml = settings.to_xml().unwrap();
        assert_eq!(DerSettings::from_xml(&xml).unwrap(), settings);
    }

    #[test]
    fn test_der_availability_round_trip() {
        let avail = DerAvailability {
            href: None,
            subscribable: None,
            availability_duration: Some(7200),
            max_charge_duration: None,
            reading_time: 1_700_000_000,
            reserve_charge_percent: Some(PerCent::new(2000).unwrap()),
            reserve_percent: None,
            stat_var_avail: None,
            stat_w_avail: Some(ActivePower::new(0, 4000)),
        };
        let xml = avail.to_xml().unwrap();
        assert_eq!(DerAvailability::from_xml(&xml).unwrap(), avail);
    }

    #[test]
    fn test_der_program_list_round_trip() {
        let program = DerProgram {
            href: Some("/derp/1".to_string()),
            subscribable: Some(sep2_core::SubscribableType::Conditional),
            ident: IdentifiedObject::new(HexBinary128::new("p1").unwrap()),
            primacy: PrimacyType::ContractedPremises,
            default_der_control_link: Some(sep2_model::identification::Link::new("/derp/1/dderc")),
            active_der_control_list_link: None,
            der_control_list_link: Some(sep2_model::identification::ListLink::with_all(
                "/derp/1/derc",
                4,
            )),
            der_curve_list_link: None,
        };
        let list = List::wrap(vec![program], 1, None);
        let xml = list.to_xml().unwrap();
        let back: List<DerProgram> = List::from_xml(&xml).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_der_round_trip() {
        let der = Der {
            href: Some("/edev/5/der/1".to_string()),
            subscribable: Some(sep2_core::SubscribableType::NonConditional),
            associated_usage_point_link: None,
            associated_der_program_list_link: Some(sep2_model::identification::ListLink::with_all(
                "/edev/5/der/1/derp",
                2,
            )),
            current_der_program_link: Some(sep2_model::identification::Link::new("/derp/1")),
            der_status_link: Some(sep2_model::identification::Link::new("/edev/5/der/1/ders")),
            der_capability_link: Some(sep2_model::identification::Link::new("/edev/5/der/1/dercap")),
            der_settings_link: Some(sep2_model::identification::Link::new("/edev/5/der/1/derg")),
            der_availability_link: None,
        };
        let xml = der.to_xml().unwrap();
        assert_eq!(Der::from_xml(&xml).unwrap(), der);
    }

    #[test]
    fn test_der_list_round_trip() {
        let der = Der {
            href: Some("/edev/5/der/1".to_string()),
            subscribable: None,
            associated_usage_point_link: Some(sep2_model::identification::Link::new("/upt/3")),
            associated_der_program_list_link: None,
            current_der_program_link: None,
            der_status_link: None,
            der_capability_link: None,
            der_settings_link: None,
            der_availability_link: None,
        };
        let list = List::wrap(vec![der], 1, Some(900));
        let xml = list.to_xml().unwrap();
        let back: List<Der> = List::from_xml(&xml).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_demand_response_program_round_trip() {
        let drp = DemandResponseProgram {
            href: Some("/drp/1".to_string()),
            ident: IdentifiedObject::new(HexBinary128::new("d1").unwrap()),
            availability_update_percent_change_threshold: Some(PerCent::new(500).unwrap()),
            availability_update_power_change_threshold: Some(ActivePower::new(3, 2)),
            primacy: PrimacyType::InHome,
            active_end_device_control_list_link: Some(
                sep2_model::identification::ListLink::with_all("/drp/1/actedc", 1),
            ),
            end_device_control_list_link: Some(sep2_model::identification::ListLink::with_all(
                "/drp/1/edc",
                3,
            )),
        };
        let xml = drp.to_xml().unwrap();
        assert_eq!(DemandResponseProgram::from_xml(&xml).unwrap(), drp);

        let list = List::wrap(vec![drp], 1, None);
        let xml = list.to_xml().unwrap();
        let back: List<DemandResponseProgram> = List::from_xml(&xml).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_end_device_control_round_trip() {
        let edc = EndDeviceControl {
            href: None,
            respondable: Respondable::default(),
            ident: IdentifiedObject::new(HexBinary128::new("ec01").unwrap()),
            event: sample_event(1_700_000_000),
            device_category: DeviceCategoryType::SMART_APPLIANCE,
            dr_program_mandatory: false,
            load_shift_forward: true,
            override_duration: Some(600),
        };
        let xml = edc.to_xml().unwrap();
        assert_eq!(EndDeviceControl::from_xml(&xml).unwrap(), edc);
    }
}
