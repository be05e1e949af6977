//! Employee type: a single commuter to be picked up and dropped at OFFICE.

use crate::geo::Location;

use super::vehicle::VehicleCategory;

/// How many other employees may share a trip with this one.
/// `Any` means no cap (subject to vehicle capacity alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingPreference {
    Single,
    Double,
    Triple,
    Any,
}

impl SharingPreference {
    /// Parses the input document's sharing-preference strings
    /// (`"single"`/`"double"`/`"triple"`/`"any"`).
    /// Anything unrecognized falls back to `Any`.
    pub fn parse(s: &str) -> Self {
        match s {
            "single" => SharingPreference::Single,
            "double" => SharingPreference::Double,
            "triple" => SharingPreference::Triple,
            _ => SharingPreference::Any,
        }
    }

    /// The maximum number of employees (including this one) that may ride
    /// together, or `None` for no cap.
    pub fn max_co_riders(&self) -> Option<i32> {
        match self {
            SharingPreference::Single => Some(1),
            SharingPreference::Double => Some(2),
            SharingPreference::Triple => Some(3),
            SharingPreference::Any => None,
        }
    }
}

/// A single employee awaiting pickup: identity, locations, time window,
/// vehicle/sharing preferences, and the routing outcome once solved.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: String,
    pub priority: i32,
    pub pickup: Location,
    pub drop: Location,
    pub ready_time: i64,
    pub due_time: i64,
    pub veh_pref: VehicleCategory,
    pub share_pref: SharingPreference,
    pub is_routed: bool,
    pub baseline_cost: f64,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        pickup: Location,
        drop: Location,
        ready_time: i64,
        due_time: i64,
    ) -> Self {
        Self {
            id: id.into(),
            priority: 0,
            pickup,
            drop,
            ready_time,
            due_time,
            veh_pref: VehicleCategory::Any,
            share_pref: SharingPreference::Any,
            is_routed: false,
            baseline_cost: 0.0,
        }
    }

    /// Whether `category` is acceptable given this employee's preference.
    pub fn accepts_category(&self, category: VehicleCategory) -> bool {
        matches!(self.veh_pref, VehicleCategory::Any) || self.veh_pref == category
    }
}
