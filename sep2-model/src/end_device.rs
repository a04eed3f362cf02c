//! End device resources

use crate::identification::{Link, List, ListLink};
use sep2_core::{HexBinary160, HexBinary32, SubscribableType, TimeType};
use serde::{Deserialize, Serialize};

/// A device participating in the protocol, typically an aggregator-managed
/// site gateway or a DER.
///
/// The `connection_point_link` field is a CSIP-Aus extension and travels
/// under the extension namespace on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndDevice {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    pub configuration_link: Option<Link>,
    pub der_list_link: Option<ListLink>,
    /// Bitmap of categories this device belongs to
    pub device_category: Option<HexBinary32>,
    pub device_information_link: Option<Link>,
    pub device_status_link: Option<Link>,
    /// Long form device identifier, 160 bit hash of the device certificate
    pub lfdi: Option<HexBinary160>,
    /// Short form device identifier
    pub sfdi: u64,
    /// Time this representation last changed
    pub changed_time: TimeType,
    /// Whether the device is enabled; treated as true when absent
    pub enabled: Option<bool>,
    pub function_set_assignments_list_link: Option<ListLink>,
    /// Rate at which the device should POST status, seconds
    pub post_rate: Option<u32>,
    pub registration_link: Option<Link>,
    pub subscription_list_link: Option<ListLink>,
    /// Link to the site connection point (CSIP-Aus)
    pub connection_point_link: Option<Link>,
}

impl EndDevice {
    /// Minimal end device with only the required fields set.
    pub fn new(sfdi: u64, changed_time: TimeType) -> Self {
        Self {
            href: None,
            subscribable: None,
            configuration_link: None,
            der_list_link: None,
            device_category: None,
            device_information_link: None,
            device_status_link: None,
            lfdi: None,
            sfdi,
            changed_time,
            enabled: None,
            function_set_assignments_list_link: None,
            post_rate: None,
            registration_link: None,
            subscription_list_link: None,
            connection_point_link: None,
        }
    }

    /// Whether the device is enabled (absence means enabled).
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

pub type EndDeviceList = List<EndDevice>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_defaults_true() {
        let mut edev = EndDevice::new(123_456_789, 1_700_000_000);
        assert!(edev.is_enabled());
        edev.enabled = Some(false);
        assert!(!edev.is_enabled());
    }
}
