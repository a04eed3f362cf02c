//! Power value types used by DER control setpoints

use sep2_core::{PowerOfTenMultiplierType, SignedPerCent};
use serde::{Deserialize, Serialize};

/// Active (real) power in watts: `value * 10^multiplier` W.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePower {
    /// Power of ten multiplier
    pub multiplier: PowerOfTenMultiplierType,
    /// Value in multiplied watts
    pub value: i16,
}

impl ActivePower {
    pub fn new(multiplier: PowerOfTenMultiplierType, value: i16) -> Self {
        Self { multiplier, value }
    }
}

/// Reactive power in var: `value * 10^multiplier` var.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactivePower {
    /// Power of ten multiplier
    pub multiplier: PowerOfTenMultiplierType,
    /// Value in multiplied var
    pub value: i16,
}

impl ReactivePower {
    pub fn new(multiplier: PowerOfTenMultiplierType, value: i16) -> Self {
        Self { multiplier, value }
    }
}

/// Reactive power setpoint as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedVar {
    /// Which rating the percentage refers to (setMaxW, setMaxVar, ...)
    pub ref_type: u8,
    /// Percentage of the referenced rating
    pub value: SignedPerCent,
}

/// Power factor setpoint with excitation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerFactorWithExcitation {
    /// Significand of the displacement power factor
    pub displacement: u16,
    /// True for over-excited, false for under-excited
    pub excitation: bool,
    /// Power of ten multiplier of the displacement
    pub multiplier: PowerOfTenMultiplierType,
}
