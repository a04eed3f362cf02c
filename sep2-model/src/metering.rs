//! Metering resources

use sep2_core::{ConsumptionBlockType, DateTimeInterval, HexBinary16, SubscribableType, TouType};
use serde::{Deserialize, Serialize};

/// A single measured value over an optional time period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    /// Identifier within the containing reading set
    pub local_id: Option<HexBinary16>,
    pub consumption_block: Option<ConsumptionBlockType>,
    /// Quality flag bitmap, hex encoded
    pub quality_flags: Option<HexBinary16>,
    /// When and for how long the value was measured
    pub time_period: Option<DateTimeInterval>,
    pub tou_tier: Option<TouType>,
    /// The measured value, scaled per the associated ReadingType
    pub value: i64,
}

impl Reading {
    /// A bare reading carrying only a value.
    pub fn new(value: i64) -> Self {
        Self {
            href: None,
            subscribable: None,
            local_id: None,
            consumption_block: None,
            quality_flags: None,
            time_period: None,
            tou_tier: None,
            value,
        }
    }
}
