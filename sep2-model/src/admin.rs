//! Administrative (operator-facing) JSON models
//!
//! These records are exchanged with an operator API as JSON rather than SEP2
//! XML; they summarize stored readings and billing data per site. Timestamps
//! are epoch seconds like everywhere else; magnitudes carry an explicit
//! power of ten multiplier instead of a decimal type.

use sep2_core::{PowerOfTenMultiplierType, TimeType};
use serde::{Deserialize, Serialize};

/// A scaled magnitude: `value * 10^multiplier` of the ambient unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledValue {
    pub multiplier: PowerOfTenMultiplierType,
    pub value: i64,
}

/// A site reading, kept simple as active power watts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteReading {
    pub reading_start_time: TimeType,
    pub duration_seconds: u32,
    pub active_watts_sum: ScaledValue,
}

/// Paginated response for site reading queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteReadingPage {
    /// Total number of readings matching the query
    pub total_count: u64,
    /// Maximum number of readings that could be returned
    pub limit: u32,
    /// Number of readings skipped for pagination
    pub start: u64,
    /// Site ID filter used in the query
    pub site_id: u64,
    /// Start time filter used in the query
    pub start_time: TimeType,
    /// End time filter used in the query
    pub end_time: TimeType,
    pub readings: Vec<SiteReading>,
}

/// A billed energy quantity over a period. Positive indicates import,
/// negative indicates export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingReading {
    pub site_id: u64,
    pub period_start: TimeType,
    pub duration_seconds: u32,
    pub value: ScaledValue,
}

/// Tariff prices in effect for a site over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingTariffRate {
    pub site_id: u64,
    pub period_start: TimeType,
    pub duration_seconds: u32,
    pub import_active_price: ScaledValue,
    pub export_active_price: ScaledValue,
    pub import_reactive_price: ScaledValue,
    pub export_reactive_price: ScaledValue,
}

/// Dynamic operating envelope in effect for a site over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingDoe {
    pub site_id: u64,
    pub period_start: TimeType,
    pub duration_seconds: u32,
    pub import_limit_active_watts: ScaledValue,
    pub export_limit_watts: ScaledValue,
}

/// Billing report scoped to a particular aggregator.
///
/// All reading/tariff/envelope vectors are ordered by site then period
/// start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatorBillingResponse {
    pub aggregator_id: u64,
    pub aggregator_name: String,
    pub period_start: TimeType,
    pub period_end: TimeType,
    pub tariff_id: u64,
    pub varh_readings: Vec<BillingReading>,
    pub wh_readings: Vec<BillingReading>,
    pub watt_readings: Vec<BillingReading>,
    pub active_tariffs: Vec<BillingTariffRate>,
    pub active_does: Vec<BillingDoe>,
}

/// Billing report scoped to a particular calculation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationLogBillingResponse {
    pub calculation_log_id: u64,
    pub tariff_id: u64,
    pub varh_readings: Vec<BillingReading>,
    pub wh_readings: Vec<BillingReading>,
    pub watt_readings: Vec<BillingReading>,
    pub active_tariffs: Vec<BillingTariffRate>,
    pub active_does: Vec<BillingDoe>,
}
