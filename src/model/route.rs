//! Trip type: one ordered sequence of stops a vehicle drives.

use crate::geo::Location;

use super::stop::Stop;

/// One trip of a vehicle: an ordered `[START, pickup..., END]` stop
/// sequence plus the running totals the simulator maintains over it.
///
/// A freshly-opened trip already carries its `START`/`END` bookends; pickups
/// are inserted between them as employees are routed onto it.
#[derive(Debug, Clone)]
pub struct Trip {
    pub stops: Vec<Stop>,
    pub current_capacity: i32,
    pub max_capacity: i32,
    pub total_distance: f64,
    pub total_cost: f64,
}

impl Trip {
    /// Opens a new, empty trip at `depot_loc` starting at `start_time`,
    /// bookended by `START` and `END` stops (the `END` location is filled
    /// in once the office location is known; it starts equal to `depot_loc`).
    pub fn new(depot_loc: Location, start_time: i64, max_capacity: i32) -> Self {
        Self {
            stops: vec![Stop::start(depot_loc, start_time), Stop::end(depot_loc)],
            current_capacity: 0,
            max_capacity,
            total_distance: 0.0,
            total_cost: 0.0,
        }
    }

    /// Number of pickup stops currently on this trip.
    pub fn pickup_count(&self) -> usize {
        self.stops.iter().filter(|s| s.is_pickup).count()
    }

    /// Whether this trip has no passengers — an idle trip contributes no
    /// cost and is dropped from the output (see DESIGN.md).
    pub fn is_idle(&self) -> bool {
        self.current_capacity == 0
    }

    pub fn remaining_capacity(&self) -> i32 {
        self.max_capacity - self.current_capacity
    }
}
