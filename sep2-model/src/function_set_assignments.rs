//! Function set assignments: the per-device catalog of servable resources

use crate::identification::{IdentifiedObject, Link, List, ListLink};
use sep2_core::SubscribableType;
use serde::{Deserialize, Serialize};

/// Assigns a device the function sets (programs, tariffs, usage points) it
/// should consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSetAssignments {
    pub href: Option<String>,
    pub subscribable: Option<SubscribableType>,
    pub ident: IdentifiedObject,
    pub time_link: Option<Link>,
    pub demand_response_program_list_link: Option<ListLink>,
    pub der_program_list_link: Option<ListLink>,
    pub messaging_program_list_link: Option<ListLink>,
    pub tariff_profile_list_link: Option<ListLink>,
    pub usage_point_list_link: Option<ListLink>,
}

pub type FunctionSetAssignmentsList = List<FunctionSetAssignments>;
