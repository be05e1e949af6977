//! Stop type: a single point in a trip.

use crate::geo::Location;

/// Identifies what a stop represents: the trip's start, its end (always at
/// OFFICE), or a pickup of a named employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopId {
    Start,
    End,
    Pickup(String),
}

impl StopId {
    /// The output document's stop-id string (`"START"`, `"END"`, or the
    /// employee id).
    pub fn as_output_str(&self) -> &str {
        match self {
            StopId::Start => "START",
            StopId::End => "END",
            StopId::Pickup(id) => id,
        }
    }

    pub fn employee_id(&self) -> Option<&str> {
        match self {
            StopId::Pickup(id) => Some(id),
            _ => None,
        }
    }
}

/// A single stop within a trip: its identity, location, and the three
/// timestamps the simulator computes (arrival, begin-service, departure).
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub loc: Location,
    pub arrival_time: i64,
    pub begin_service: i64,
    pub departure_time: i64,
    pub is_pickup: bool,
}

impl Stop {
    pub fn start(loc: Location, at: i64) -> Self {
        Self {
            id: StopId::Start,
            loc,
            arrival_time: at,
            begin_service: at,
            departure_time: at,
            is_pickup: false,
        }
    }

    pub fn end(loc: Location) -> Self {
        Self {
            id: StopId::End,
            loc,
            arrival_time: 0,
            begin_service: 0,
            departure_time: 0,
            is_pickup: false,
        }
    }

    pub fn pickup(employee_id: impl Into<String>, loc: Location) -> Self {
        Self {
            id: StopId::Pickup(employee_id.into()),
            loc,
            arrival_time: 0,
            begin_service: 0,
            departure_time: 0,
            is_pickup: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_id_output_str() {
        assert_eq!(StopId::Start.as_output_str(), "START");
        assert_eq!(StopId::End.as_output_str(), "END");
        assert_eq!(StopId::Pickup("E1".into()).as_output_str(), "E1");
    }

    #[test]
    fn test_stop_id_employee_id() {
        assert_eq!(StopId::Start.employee_id(), None);
        assert_eq!(
            StopId::Pickup("E1".into()).employee_id(),
            Some("E1")
        );
    }

    #[test]
    fn test_start_stop_not_pickup() {
        let s = Stop::start(Location::new(0.0, 0.0), 480);
        assert!(!s.is_pickup);
        assert_eq!(s.arrival_time, 480);
    }

    #[test]
    fn test_pickup_stop_is_pickup() {
        let s = Stop::pickup("E1", Location::new(1.0, 1.0));
        assert!(s.is_pickup);
        assert_eq!(s.id.employee_id(), Some("E1"));
    }
}
