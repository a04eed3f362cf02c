//! Event shapes shared by time-scheduled controls
//!
//! Every time-scheduled control (DER control, time tariff interval, demand
//! response directive) carries the same event core: a creation time, a
//! status, a start/duration interval and optional randomization bounds.

use sep2_core::{CurrentStatusType, DateTimeInterval, TimeType};
use serde::{Deserialize, Serialize};

/// Execution status of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStatus {
    /// Current status of the event
    pub current_status: CurrentStatusType,
    /// Time the status was last set
    pub date_time: TimeType,
    /// Whether a later event may supersede this one
    pub potentially_superseded: bool,
}

/// The randomizable-event capability embedded by scheduled controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    /// Time this event was created or last modified
    pub creation_time: TimeType,
    /// Execution status
    pub event_status: EventStatus,
    /// The scheduled window
    pub interval: DateTimeInterval,
    /// Randomization bound for the effective duration, seconds
    pub randomize_duration: Option<i16>,
    /// Randomization bound for the effective start, seconds
    pub randomize_start: Option<i16>,
}

impl EventInfo {
    /// A non-randomized event over the given window.
    pub fn new(creation_time: TimeType, event_status: EventStatus, interval: DateTimeInterval) -> Self {
        Self {
            creation_time,
            event_status,
            interval,
            randomize_duration: None,
            randomize_start: None,
        }
    }
}
