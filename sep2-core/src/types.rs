//! Closed integer-backed enumerations used across SEP2 resources
//!
//! Every enumeration here is strict in both directions: decoding an integer
//! outside the declared set fails with `Sep2Error::UnknownValue`, and an
//! illegal value is unrepresentable once constructed.

use crate::error::{Sep2Error, Sep2Result};
use serde::{Deserialize, Serialize};

/// Whether a resource supports subscriptions, carried as the `subscribable`
/// attribute on subscribable resources and lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SubscribableType {
    /// Resource does not support subscriptions
    None = 0,
    /// Resource supports non-conditional subscriptions
    NonConditional = 1,
    /// Resource supports conditional subscriptions
    Conditional = 2,
}

impl SubscribableType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::NonConditional),
            2 => Ok(Self::Conditional),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "SubscribableType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Status values for `Notification.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum NotificationStatus {
    /// Default delivery of a changed resource
    Default = 0,
    /// Subscription cancelled, no additional information
    SubscriptionCancelledNoInfo = 1,
    /// Subscription cancelled, resource moved
    SubscriptionCancelledResourceMoved = 2,
    /// Subscription cancelled, resource definition changed
    SubscriptionCancelledResourceDefinitionChanged = 3,
    /// Subscription cancelled, resource deleted
    SubscriptionCancelledResourceDeleted = 4,
}

impl NotificationStatus {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::Default),
            1 => Ok(Self::SubscriptionCancelledNoInfo),
            2 => Ok(Self::SubscriptionCancelledResourceMoved),
            3 => Ok(Self::SubscriptionCancelledResourceDefinitionChanged),
            4 => Ok(Self::SubscriptionCancelledResourceDeleted),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "NotificationStatus",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Delivery encoding requested by a `Subscription`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SubscriptionEncoding {
    /// application/sep+xml
    Xml = 0,
    /// application/sep-exi
    Exi = 1,
}

impl SubscriptionEncoding {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::Xml),
            1 => Ok(Self::Exi),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "SubscriptionEncoding",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Attribute a subscription `Condition` monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ConditionAttributeIdentifier {
    /// Reading value
    ReadingValue = 0,
}

impl ConditionAttributeIdentifier {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::ReadingValue),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "ConditionAttributeIdentifier",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// ISO 4217 currency codes used by tariff resources.
///
/// Only the codes the profile actually exchanges are declared; anything else
/// is rejected on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u16)]
pub enum CurrencyCode {
    /// Currency not applicable
    NotApplicable = 0,
    /// Australian dollar
    Aud = 36,
    /// Canadian dollar
    Cad = 124,
    /// US dollar
    Usd = 840,
    /// Euro
    Eur = 978,
}

impl CurrencyCode {
    pub fn from_u16(value: u16) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::NotApplicable),
            36 => Ok(Self::Aud),
            124 => Ok(Self::Cad),
            840 => Ok(Self::Usd),
            978 => Ok(Self::Eur),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "CurrencyCode",
                value: value as i64,
            }),
        }
    }

    pub fn to_u16(self) -> u16 {
        self as u16
    }
}

/// Kind of service a tariff applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ServiceKind {
    Electricity = 0,
    Gas = 1,
    Water = 2,
    Time = 3,
    Pressure = 4,
    Heat = 5,
    Cooling = 6,
}

impl ServiceKind {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::Electricity),
            1 => Ok(Self::Gas),
            2 => Ok(Self::Water),
            3 => Ok(Self::Time),
            4 => Ok(Self::Pressure),
            5 => Ok(Self::Heat),
            6 => Ok(Self::Cooling),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "ServiceKind",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Relative priority of a program provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum PrimacyType {
    /// In-home energy management system
    InHome = 0,
    /// Contracted premises service provider
    ContractedPremises = 1,
    /// Non-contractual service provider
    NonContractual = 2,
}

impl PrimacyType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::InHome),
            1 => Ok(Self::ContractedPremises),
            2 => Ok(Self::NonContractual),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "PrimacyType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Time-of-use tier, 0 (not applicable) through tier 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouType(u8);

impl TouType {
    pub const MAX: u8 = 15;

    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        if value > Self::MAX {
            return Err(Sep2Error::UnknownValue {
                type_name: "TOUType",
                value: value as i64,
            });
        }
        Ok(Self(value))
    }

    pub fn to_u8(self) -> u8 {
        self.0
    }
}

/// Consumption block, 0 (not applicable) through block 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumptionBlockType(u8);

impl ConsumptionBlockType {
    pub const MAX: u8 = 16;

    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        if value > Self::MAX {
            return Err(Sep2Error::UnknownValue {
                type_name: "ConsumptionBlockType",
                value: value as i64,
            });
        }
        Ok(Self(value))
    }

    pub fn to_u8(self) -> u8 {
        self.0
    }
}

/// Unit of measure for metering quantities (subset of the IEC codes the
/// profile exchanges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum UomType {
    Amperes = 5,
    Voltage = 29,
    Watts = 38,
    VoltAmperes = 61,
    Var = 63,
    VoltAmpereHours = 71,
    WattHours = 72,
    VarHours = 73,
}

impl UomType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            5 => Ok(Self::Amperes),
            29 => Ok(Self::Voltage),
            38 => Ok(Self::Watts),
            61 => Ok(Self::VoltAmperes),
            63 => Ok(Self::Var),
            71 => Ok(Self::VoltAmpereHours),
            72 => Ok(Self::WattHours),
            73 => Ok(Self::VarHours),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "UomType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Type of distributed energy resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum DerType {
    NotApplicable = 0,
    VirtualOrMixed = 1,
    ReciprocatingEngine = 2,
    FuelCell = 3,
    PhotovoltaicSystem = 4,
    CombinedHeatPower = 5,
    OtherGenerationSystem = 6,
    OtherStorageSystem = 80,
    ElectricVehicle = 81,
    Evse = 82,
    CombinedPvAndStorage = 83,
}

impl DerType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::NotApplicable),
            1 => Ok(Self::VirtualOrMixed),
            2 => Ok(Self::ReciprocatingEngine),
            3 => Ok(Self::FuelCell),
            4 => Ok(Self::PhotovoltaicSystem),
            5 => Ok(Self::CombinedHeatPower),
            6 => Ok(Self::OtherGenerationSystem),
            80 => Ok(Self::OtherStorageSystem),
            81 => Ok(Self::ElectricVehicle),
            82 => Ok(Self::Evse),
            83 => Ok(Self::CombinedPvAndStorage),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "DERType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// DER inverter status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum InverterStatusType {
    NotApplicable = 0,
    Off = 1,
    /// Sleeping (auto-shutdown) or DER is at low output power/voltage
    Sleeping = 2,
    /// Starting up or on but not producing power
    Starting = 3,
    TrackingMpptPowerPoint = 4,
    /// Forced power reduction/derating
    ForcedPowerReduction = 5,
    ShuttingDown = 6,
    OneOrMoreFaults = 7,
    /// Standby (service on unit) - DER may be at high output voltage/power
    Standby = 8,
    TestMode = 9,
    /// As defined in manufacturer status
    ManufacturerStatus = 10,
}

impl InverterStatusType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::NotApplicable),
            1 => Ok(Self::Off),
            2 => Ok(Self::Sleeping),
            3 => Ok(Self::Starting),
            4 => Ok(Self::TrackingMpptPowerPoint),
            5 => Ok(Self::ForcedPowerReduction),
            6 => Ok(Self::ShuttingDown),
            7 => Ok(Self::OneOrMoreFaults),
            8 => Ok(Self::Standby),
            9 => Ok(Self::TestMode),
            10 => Ok(Self::ManufacturerStatus),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "InverterStatusType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// DER operational mode status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum OperationalModeStatusType {
    NotApplicable = 0,
    Off = 1,
    OperationalMode = 2,
    TestMode = 3,
}

impl OperationalModeStatusType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::NotApplicable),
            1 => Ok(Self::Off),
            2 => Ok(Self::OperationalMode),
            3 => Ok(Self::TestMode),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "OperationalModeStatusType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// DER storage mode status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum StorageModeStatusType {
    Charging = 0,
    Discharging = 1,
    Holding = 2,
}

impl StorageModeStatusType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::Charging),
            1 => Ok(Self::Discharging),
            2 => Ok(Self::Holding),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "StorageModeStatusType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// DER local control mode status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum LocalControlModeStatusType {
    LocalControl = 0,
    RemoteControl = 1,
}

impl LocalControlModeStatusType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::LocalControl),
            1 => Ok(Self::RemoteControl),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "LocalControlModeStatusType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Reason code carried by an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ReasonCodeType {
    InvalidRequestFormat = 0,
    InvalidRequestValues = 1,
    ResourceLimitReached = 2,
    ConditionalSubscriptionNotSupported = 3,
    MaximumRequestFrequencyExceeded = 4,
}

impl ReasonCodeType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::InvalidRequestFormat),
            1 => Ok(Self::InvalidRequestValues),
            2 => Ok(Self::ResourceLimitReached),
            3 => Ok(Self::ConditionalSubscriptionNotSupported),
            4 => Ok(Self::MaximumRequestFrequencyExceeded),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "ReasonCodeType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Current status of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum CurrentStatusType {
    Scheduled = 0,
    Active = 1,
    Cancelled = 2,
    CancelledWithRandomization = 3,
    Superseded = 4,
}

impl CurrentStatusType {
    pub fn from_u8(value: u8) -> Sep2Result<Self> {
        match value {
            0 => Ok(Self::Scheduled),
            1 => Ok(Self::Active),
            2 => Ok(Self::Cancelled),
            3 => Ok(Self::CancelledWithRandomization),
            4 => Ok(Self::Superseded),
            _ => Err(Sep2Error::UnknownValue {
                type_name: "CurrentStatusType",
                value: value as i64,
            }),
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Power of ten multiplier applied to a metering or power value.
pub type PowerOfTenMultiplierType = i8;
