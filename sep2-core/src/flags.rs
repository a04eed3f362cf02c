//! Bit-flag sets used by SEP2 resources
//!
//! Flag fields combine via bitwise OR. Any subset of the declared bits is
//! legal; a value carrying an undeclared bit is rejected on construction
//! with `Sep2Error::UnknownBits`. On the wire these travel as hex strings
//! (the `HexBinaryN` encoding of the bit pattern).

use crate::error::{Sep2Error, Sep2Result};
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

macro_rules! flag_set {
    ($(#[$doc:meta])* $name:ident, $mask:expr, { $($(#[$fdoc:meta])* $flag:ident = $bit:expr;)+ }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            $($(#[$fdoc])* pub const $flag: Self = Self(1 << $bit);)+

            /// All declared bits
            pub const MASK: u32 = $mask;

            /// The empty set.
            pub fn empty() -> Self {
                Self(0)
            }

            /// Construct from a raw bit pattern.
            ///
            /// # Errors
            ///
            /// Returns `Sep2Error::UnknownBits` if any undeclared bit is set.
            pub fn from_bits(bits: u32) -> Sep2Result<Self> {
                if bits & !Self::MASK != 0 {
                    return Err(Sep2Error::UnknownBits {
                        type_name: stringify!($name),
                        bits: bits & !Self::MASK,
                    });
                }
                Ok(Self(bits))
            }

            /// The raw bit pattern.
            pub fn bits(self) -> u32 {
                self.0
            }

            /// Whether every bit of `other` is set in `self`.
            pub fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Whether no bit is set.
            pub fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }
    };
}

flag_set!(
    /// Control modes supported by a DER (`DERCapability.modesSupported`,
    /// `DERSettings.modesEnabled`).
    DerControlType,
    (1 << 27) - 1,
    {
        CHARGE_MODE = 0;
        DISCHARGE_MODE = 1;
        /// Connect/disconnect - implies galvanic isolation
        OP_MOD_CONNECT = 2;
        /// Energize/de-energize
        OP_MOD_ENERGIZE = 3;
        /// Fixed power factor setpoint when absorbing active power
        OP_MOD_FIXED_PF_ABSORB_W = 4;
        /// Fixed power factor setpoint when injecting active power
        OP_MOD_FIXED_PF_INJECT_W = 5;
        /// Reactive power setpoint
        OP_MOD_FIXED_VAR = 6;
        /// Charge/discharge setpoint
        OP_MOD_FIXED_W = 7;
        /// Frequency-watt parameterized mode
        OP_MOD_FREQ_DROOP = 8;
        /// Frequency-watt curve mode
        OP_MOD_FREQ_WATT = 9;
        OP_MOD_HFRT_MAY_TRIP = 10;
        OP_MOD_HFRT_MUST_TRIP = 11;
        OP_MOD_HVRT_MAY_TRIP = 12;
        OP_MOD_HVRT_MOMENTARY_CESSATION = 13;
        OP_MOD_HVRT_MUST_TRIP = 14;
        OP_MOD_LFRT_MAY_TRIP = 15;
        OP_MOD_LFRT_MUST_TRIP = 16;
        OP_MOD_LVRT_MAY_TRIP = 17;
        OP_MOD_LVRT_MOMENTARY_CESSATION = 18;
        OP_MOD_LVRT_MUST_TRIP = 19;
        /// Maximum active power
        OP_MOD_MAX_LIM_W = 20;
        /// Target reactive power
        OP_MOD_TARGET_VAR = 21;
        /// Target active power
        OP_MOD_TARGET_W = 22;
        OP_MOD_VOLT_VAR = 23;
        OP_MOD_VOLT_WATT = 24;
        OP_MOD_WATT_PF = 25;
        OP_MOD_WATT_VAR = 26;
    }
);

flag_set!(
    /// DER connection status bits.
    ConnectStatusType,
    (1 << 5) - 1,
    {
        CONNECTED = 0;
        AVAILABLE = 1;
        OPERATING = 2;
        TEST = 3;
        FAULT_ERROR = 4;
    }
);

flag_set!(
    /// DER alarm status bits (see DER LogEvents for details).
    AlarmStatusType,
    (1 << 11) - 1,
    {
        DER_FAULT_OVER_CURRENT = 0;
        DER_FAULT_OVER_VOLTAGE = 1;
        DER_FAULT_UNDER_VOLTAGE = 2;
        DER_FAULT_OVER_FREQUENCY = 3;
        DER_FAULT_UNDER_FREQUENCY = 4;
        DER_FAULT_VOLTAGE_IMBALANCE = 5;
        DER_FAULT_CURRENT_IMBALANCE = 6;
        DER_FAULT_EMERGENCY_LOCAL = 7;
        DER_FAULT_EMERGENCY_REMOTE = 8;
        DER_FAULT_LOW_POWER_INPUT = 9;
        DER_FAULT_PHASE_ROTATION = 10;
    }
);

flag_set!(
    /// Role a usage point or rate component plays.
    RoleFlagsType,
    (1 << 7) - 1,
    {
        IS_MIRROR = 0;
        IS_PREMISES_AGGREGATION_POINT = 1;
        IS_PEV = 2;
        IS_DER = 3;
        IS_REVENUE_QUALITY = 4;
        IS_DC = 5;
        IS_SUBMETER = 6;
    }
);

flag_set!(
    /// Device categories that should respond to a control.
    DeviceCategoryType,
    (1 << 20) - 1,
    {
        PROGRAMMABLE_COMMUNICATING_THERMOSTAT = 0;
        STRIP_HEATERS = 1;
        BASEBOARD_HEATERS = 2;
        WATER_HEATER = 3;
        POOL_PUMP = 4;
        SAUNA = 5;
        HOT_TUB = 6;
        SMART_APPLIANCE = 7;
        IRRIGATION_PUMP = 8;
        MANAGED_COMMERCIAL_AND_INDUSTRIAL_LOADS = 9;
        SIMPLE_MISC_LOADS = 10;
        EXTERIOR_LIGHTING = 11;
        INTERIOR_LIGHTING = 12;
        LOAD_CONTROL_SWITCH = 13;
        ENERGY_MANAGEMENT_SYSTEM = 14;
        SMART_ENERGY_MODULE = 15;
        ELECTRIC_VEHICLE = 16;
        EVSE = 17;
        VIRTUAL_OR_MIXED_DER = 18;
        RECIPROCATING_ENGINE = 19;
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_or_and_contains() {
        let modes = DerControlType::CHARGE_MODE | DerControlType::OP_MOD_MAX_LIM_W;
        assert!(modes.contains(DerControlType::CHARGE_MODE));
        assert!(modes.contains(DerControlType::OP_MOD_MAX_LIM_W));
        assert!(!modes.contains(DerControlType::DISCHARGE_MODE));
    }

    #[test]
    fn test_from_bits_accepts_any_declared_subset() {
        assert!(ConnectStatusType::from_bits(0b10101).is_ok());
        assert!(ConnectStatusType::from_bits(0).is_ok());
        assert!(ConnectStatusType::from_bits(ConnectStatusType::MASK).is_ok());
    }

    #[test]
    fn test_from_bits_rejects_unknown_bits() {
        assert!(matches!(
            ConnectStatusType::from_bits(1 << 5),
            Err(Sep2Error::UnknownBits {
                type_name: "ConnectStatusType",
                bits
            }) if bits == 1 << 5
        ));
        assert!(AlarmStatusType::from_bits(1 << 11).is_err());
        assert!(DerControlType::from_bits(1 << 27).is_err());
        assert!(RoleFlagsType::from_bits(1 << 7).is_err());
        assert!(DeviceCategoryType::from_bits(1 << 20).is_err());
    }

    #[test]
    fn test_bits_round_trip() {
        let flags = AlarmStatusType::DER_FAULT_OVER_CURRENT
            | AlarmStatusType::DER_FAULT_PHASE_ROTATION;
        assert_eq!(AlarmStatusType::from_bits(flags.bits()).unwrap(), flags);
    }

    #[test]
    fn test_empty() {
        assert!(RoleFlagsType::empty().is_empty());
        assert_eq!(RoleFlagsType::empty().bits(), 0);
    }
}
