//! Resource model for the IEEE 2030.5 (SEP2) protocol
//!
//! Plain data records for the protocol entities - devices, DER controls,
//! tariffs, readings, subscriptions, notifications - built from the
//! validated scalars of `sep2-core`. Every entity is a transient value,
//! immutable once constructed; the wire representation is the business of
//! the `sep2-xml` codec crate.

pub mod admin;
pub mod der;
pub mod der_control_types;
pub mod end_device;
pub mod event;
pub mod function_set_assignments;
pub mod identification;
pub mod metering;
pub mod pricing;
pub mod pub_sub;
pub mod response;

pub use der::{
    DefaultDerControl, DemandResponseProgram, DemandResponseProgramList, Der, DerAvailability,
    DerCapability, DerControl, DerControlBase, DerControlList, DerList, DerProgram, DerProgramList,
    DerSettings, DerStatus, EndDeviceControl, EndDeviceControlList,
};
pub use der_control_types::{ActivePower, FixedVar, PowerFactorWithExcitation, ReactivePower};
pub use end_device::{EndDevice, EndDeviceList};
pub use event::{EventInfo, EventStatus};
pub use function_set_assignments::{FunctionSetAssignments, FunctionSetAssignmentsList};
pub use identification::{IdentifiedObject, Link, List, ListLink, Resource, Respondable};
pub use metering::Reading;
pub use pricing::{
    ConsumptionTariffInterval, ConsumptionTariffIntervalList, RateComponent, RateComponentList,
    TariffProfile, TariffProfileList, TimeTariffInterval, TimeTariffIntervalList, UnitValueType,
};
pub use pub_sub::{
    Condition, Notification, NotificationList, NotificationResource, Subscription,
    SubscriptionList,
};
pub use response::ErrorResponse;
