//! Core validated datatypes for the IEEE 2030.5 (SEP2) protocol
//!
//! This crate provides the scalar layer every SEP2 resource is built from:
//! error handling, fixed-width hex binary strings, fixed-point percentages,
//! epoch-second timestamps, strict integer-backed enumerations and bit-flag
//! sets.

pub mod error;
pub mod flags;
pub mod hex_binary;
pub mod percent;
pub mod time;
pub mod types;

pub use error::{Sep2Error, Sep2Result};
pub use flags::{
    AlarmStatusType, ConnectStatusType, DerControlType, DeviceCategoryType, RoleFlagsType,
};
pub use hex_binary::{
    HexBinary128, HexBinary16, HexBinary160, HexBinary32, HexBinary48, HexBinary64, HexBinary8,
    Mrid,
};
pub use percent::{PerCent, SignedPerCent};
pub use time::{DateTimeInterval, TimeType};
pub use types::{
    ConditionAttributeIdentifier, ConsumptionBlockType, CurrencyCode, CurrentStatusType, DerType,
    InverterStatusType, LocalControlModeStatusType, NotificationStatus,
    OperationalModeStatusType, PowerOfTenMultiplierType, PrimacyType, ReasonCodeType, ServiceKind,
    StorageModeStatusType, SubscribableType, SubscriptionEncoding, TouType, UomType,
};
