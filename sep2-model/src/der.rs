//! Distributed Energy Resource (DER) control and status resources
//!
//! Covers the time/event based `DERControl`, the fallback
//! `DefaultDERControl`, the `DERProgram` container, and the DER status /
//! availability / capability / settings records the CSIP-Aus extension
//! profile exchanges through notifications.

use crate::der_control_types::{ActivePower, FixedVar, PowerFactorWithExcitation, ReactivePower};
use crate::event::EventInfo;
use crate::identification::{IdentifiedObject, Link, List, ListLink, Respondable};
use sep2_core::{
    DerControlType, DerType, DeviceCategoryType, HexBinary32, HexBinary8, InverterStatusType,
    LocalControlModeStatusType, OperationalModeStatusType, PerCent, PrimacyType, SignedPerCent,
    StorageModeStatusType, SubscribableType, TimeType,
};
use serde::{Deserialize, Serialize};

/// DER control values: the setpoints and switches a control may carry.
///
/// All fields are optional; a control asserts only the modes it sets. The
/// `op_mod_imp_lim_w` / `op_mod_exp_lim_w` / `op_mod_gen_lim_w` /
/// `op_mod_load_lim_w` fields are CSIP-Aus extensions and travel under the
/// extension namespace on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerControlBase {
    /// Set DER as connected (true) or disconnected (false)
    pub op_mod_connect: Option<bool>,
    /// Set DER as energized (true) or de-energized (false)
    pub op_mod_energize: Option<bool>,
    /// Requested power factor when active power is being absorbed
    pub op_mod_fixed_pf_absorb_w: Option<PowerFactorWithExcitation>,
    /// Requested power factor when active power is being injected
    pub op_mod_fixed_pf_inject_w: Option<PowerFactorWithExcitation>,
    /// Delivered or received reactive power setpoint
    pub op_mod_fixed_var: Option<FixedVar>,
    /// Charge/discharge setpoint as a signed percentage of capability
    pub op_mod_fixed_w: Option<SignedPerCent>,
    /// Frequency-watt droop operation
    pub op_mod_freq_droop: Option<u32>,
    /// DERCurve reference for frequency-watt curve mode
    pub op_mod_freq_watt: Option<Link>,
    /// Maximum active power generation level at the coupling point
    pub op_mod_max_lim_w: Option<PerCent>,
    /// Target reactive power, in var
    pub op_mod_target_var: Option<ReactivePower>,
    /// Target active power, in watts
    pub op_mod_target_w: Option<ActivePower>,
    /// DERCurve reference for volt-var mode
    pub op_mod_volt_var: Option<Link>,
    /// Requested ramp time, hundredths of a second
    pub ramp_tms: Option<u16>,
    /// Constraint on imported active power at the connection point (CSIP-Aus)
    pub op_mod_imp_lim_w: Option<ActivePower>,
    /// Constraint on exported active power at the connection point (CSIP-Aus)
    pub op_mod_exp_lim_w: Option<ActivePower>,
    /// Maximum discharge watts for a single DER (CSIP-Aus)
    pub op_mod_gen_lim_w: Option<ActivePower>,
    /// Maximum charge watts for a single DER (CSIP-Aus)
    pub op_mod_load_lim_w: Option<ActivePower>,
}

/// Time/event based DER control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerControl {
    pub href: Option<String>,
    pub respondable: Respondable,
    pub ident: IdentifiedObject,
    pub event: EventInfo,
    /// Bitmap of device categories that should respond
    pub device_category: Option<HexBinary32>,
    pub base: DerControlBase,
}

/// Control mode information used when no DERControl is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultDerControl {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    pub ident: IdentifiedObject,
    /// Enter service delay, hundredths of a second
    pub set_es_delay: Option<u32>,
    /// Enter service frequency high, hundredths of Hz
    pub set_es_high_freq: Option<u16>,
    /// Enter service voltage high, effective percent voltage
    pub set_es_high_volt: Option<i16>,
    /// Enter service frequency low, hundredths of Hz
    pub set_es_low_freq: Option<u16>,
    /// Enter service voltage low, effective percent voltage
    pub set_es_low_volt: Option<i16>,
    /// Enter service ramp time, hundredths of a second
    pub set_es_ramp_tms: Option<u32>,
    /// Enter service randomized delay, hundredths of a second
    pub set_es_random_delay: Option<u32>,
    /// Default ramp rate of active power output
    pub set_grad_w: Option<u16>,
    /// Soft-start ramp rate of active power output
    pub set_soft_grad_w: Option<u16>,
    pub base: DerControlBase,
}

/// Container relating DER controls with their primacy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerProgram {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    pub ident: IdentifiedObject,
    pub primacy: PrimacyType,
    pub default_der_control_link: Option<Link>,
    pub active_der_control_list_link: Option<ListLink>,
    pub der_control_list_link: Option<ListLink>,
    pub der_curve_list_link: Option<ListLink>,
}

/// Link container tying one DER to its program, status, capability,
/// settings and availability resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Der {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    /// The submeter that monitors this DER's output, if any
    pub associated_usage_point_link: Option<Link>,
    /// DERPrograms holding the DERControls for this DER
    pub associated_der_program_list_link: Option<ListLink>,
    /// The DERProgram containing the currently active DERControl
    pub current_der_program_link: Option<Link>,
    pub der_status_link: Option<Link>,
    pub der_capability_link: Option<Link>,
    pub der_settings_link: Option<Link>,
    pub der_availability_link: Option<Link>,
}

/// A timestamped connect-status bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectStatusValue {
    /// When the state applied
    pub date_time: TimeType,
    /// Bits from `ConnectStatusType`, hex encoded
    pub value: HexBinary8,
}

/// A timestamped inverter status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InverterStatusValue {
    pub date_time: TimeType,
    pub value: InverterStatusType,
}

/// A timestamped local-control-mode status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalControlModeStatusValue {
    pub date_time: TimeType,
    pub value: LocalControlModeStatusType,
}

/// A timestamped manufacturer-defined status string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerStatusValue {
    pub date_time: TimeType,
    /// Manufacturer status, at most 6 characters
    pub value: String,
}

/// A timestamped operational-mode status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalModeStatusValue {
    pub date_time: TimeType,
    pub value: OperationalModeStatusType,
}

/// A timestamped state of charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOfChargeStatusValue {
    pub date_time: TimeType,
    pub value: PerCent,
}

/// A timestamped storage-mode status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageModeStatusValue {
    pub date_time: TimeType,
    pub value: StorageModeStatusType,
}

/// DER status information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerStatus {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    /// `AlarmStatusType` bits, hex encoded
    pub alarm_status: Option<HexBinary32>,
    /// Connection status of the generator
    pub gen_connect_status: Option<ConnectStatusValue>,
    pub inverter_status: Option<InverterStatusValue>,
    pub local_control_mode_status: Option<LocalControlModeStatusValue>,
    pub manufacturer_status: Option<ManufacturerStatusValue>,
    pub operational_mode_status: Option<OperationalModeStatusValue>,
    /// When this status snapshot was taken
    pub reading_time: TimeType,
    pub state_of_charge_status: Option<StateOfChargeStatusValue>,
    pub storage_mode_status: Option<StorageModeStatusValue>,
    /// Connection status of the storage
    pub stor_connect_status: Option<ConnectStatusValue>,
}

/// DER availability estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerAvailability {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    /// Seconds the DER expects to remain available
    pub availability_duration: Option<u32>,
    /// Seconds the DER can sustain maximum charge
    pub max_charge_duration: Option<u32>,
    pub reading_time: TimeType,
    /// Percent of charge capacity held in reserve
    pub reserve_charge_percent: Option<PerCent>,
    /// Percent of rated power held in reserve
    pub reserve_percent: Option<PerCent>,
    /// Estimated available reactive power
    pub stat_var_avail: Option<ReactivePower>,
    /// Estimated available active power
    pub stat_w_avail: Option<ActivePower>,
}

/// Nameplate ratings and supported modes of a DER.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerCapability {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    /// Control modes supported by the DER
    pub modes_supported: DerControlType,
    /// Maximum apparent power rating
    pub rtg_max_va: Option<ActivePower>,
    /// Maximum reactive power rating
    pub rtg_max_var: Option<ReactivePower>,
    /// Maximum active power rating
    pub rtg_max_w: ActivePower,
    /// Type of DER
    pub der_type: DerType,
}

/// Currently configured settings of a DER.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerSettings {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    /// Control modes currently enabled
    pub modes_enabled: Option<DerControlType>,
    /// Configured ramp rate of active power output
    pub set_grad_w: u16,
    /// Configured maximum apparent power
    pub set_max_va: Option<ActivePower>,
    /// Configured maximum reactive power
    pub set_max_var: Option<ReactivePower>,
    /// Configured maximum active power
    pub set_max_w: ActivePower,
    /// When these settings were last updated
    pub updated_time: TimeType,
}

/// Demand response program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandResponseProgram {
    pub href: Option<String>,
    pub ident: IdentifiedObject,
    pub availability_update_percent_change_threshold: Option<PerCent>,
    pub availability_update_power_change_threshold: Option<ActivePower>,
    pub primacy: PrimacyType,
    pub active_end_device_control_list_link: Option<ListLink>,
    pub end_device_control_list_link: Option<ListLink>,
}

/// Directive instructing an end device to perform an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndDeviceControl {
    pub href: Option<String>,
    pub respondable: Respondable,
    pub ident: IdentifiedObject,
    pub event: EventInfo,
    /// Device categories that must respond
    pub device_category: DeviceCategoryType,
    /// Whether participation is mandatory under the program
    pub dr_program_mandatory: bool,
    /// Shift direction of the load
    pub load_shift_forward: bool,
    /// Seconds a device may prolong the control, if allowed
    pub override_duration: Option<u16>,
}

pub type DerList = List<Der>;
pub type DerControlList = List<DerControl>;
pub type DerProgramList = List<DerProgram>;
pub type DemandResponseProgramList = List<DemandResponseProgram>;
pub type EndDeviceControlList = List<EndDeviceControl>;
