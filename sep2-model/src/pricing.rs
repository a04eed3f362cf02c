//! Tariff and pricing resources
//!
//! A `TariffProfile` owns `RateComponent`s, whose time-differentiated parts
//! are `TimeTariffInterval`s referencing `ConsumptionTariffInterval` blocks.

use crate::event::EventInfo;
use crate::identification::{IdentifiedObject, Link, List, ListLink, Respondable};
use sep2_core::{
    ConsumptionBlockType, CurrencyCode, PowerOfTenMultiplierType, PrimacyType, RoleFlagsType,
    ServiceKind, TouType, UomType,
};
use serde::{Deserialize, Serialize};

/// A value with its unit of measure and power of ten multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitValueType {
    pub multiplier: PowerOfTenMultiplierType,
    pub unit: UomType,
    pub value: i32,
}

/// A schedule of charges: the root of a tariff structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffProfile {
    pub href: Option<String>,
    pub ident: IdentifiedObject,
    pub currency: Option<CurrencyCode>,
    /// Power of ten multiplier applied to all prices under this profile
    pub price_power_of_ten_multiplier: Option<PowerOfTenMultiplierType>,
    pub primacy_type: Option<PrimacyType>,
    /// Utility rate plan identifier
    pub rate_code: Option<String>,
    pub service_category_kind: ServiceKind,
    pub rate_component_list_link: Option<ListLink>,
}

/// Charges for a single component of the rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateComponent {
    pub href: Option<String>,
    pub ident: IdentifiedObject,
    pub flow_rate_end_limit: Option<UnitValueType>,
    pub flow_rate_start_limit: Option<UnitValueType>,
    pub role_flags: RoleFlagsType,
    pub reading_type_link: Link,
    pub active_time_tariff_interval_list_link: Option<ListLink>,
    pub time_tariff_interval_list_link: ListLink,
}

/// The time-differentiated portion of a rate component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTariffInterval {
    pub href: Option<String>,
    pub respondable: Respondable,
    pub ident: IdentifiedObject,
    pub event: EventInfo,
    pub tou_tier: TouType,
    pub consumption_tariff_interval_list_link: ListLink,
}

/// One step of a block tariff: consumption above `start_value` falls within
/// this block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionTariffInterval {
    pub href: Option<String>,
    pub consumption_block: ConsumptionBlockType,
    /// Charge per unit of measure, in the profile currency
    pub price: Option<i32>,
    /// Lowest consumption that falls within this block
    pub start_value: u64,
}

pub type TariffProfileList = List<TariffProfile>;
pub type RateComponentList = List<RateComponent>;
pub type TimeTariffIntervalList = List<TimeTariffInterval>;
pub type ConsumptionTariffIntervalList = List<ConsumptionTariffInterval>;
