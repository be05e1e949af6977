//! Route feasibility simulator: recomputes times and totals for a stop
//! sequence and reports whether the result is feasible.

use std::collections::HashMap;

use crate::geo::{self, DistanceOverrides, Location};
use crate::model::{Employee, SharingPreference, Stop, StopId, Trip, Vehicle, VehicleCategory};

/// Fixed pickup service time, in minutes.
const SERVICE_PICKUP_MIN: i64 = 2;

/// The sharing-cap mapping {SINGLE→1, DOUBLE→2, TRIPLE→3, ANY→∞} (spec §4.2).
/// `None` means uncapped.
pub fn sharing_cap(pref: SharingPreference) -> Option<i32> {
    pref.max_co_riders()
}

/// Pre-simulation compatibility filter: category match and capacity
/// headroom, including the optional sharing-derived cap.
pub fn compatible(vehicle: &Vehicle, emp: &Employee, trip: &Trip, sharing_caps_enabled: bool) -> bool {
    if emp.veh_pref == VehicleCategory::Premium && vehicle.category != VehicleCategory::Premium {
        return false;
    }
    let share_cap = if sharing_caps_enabled {
        sharing_cap(emp.share_pref).unwrap_or(i32::MAX)
    } else {
        i32::MAX
    };
    let effective_capacity = trip.max_capacity.min(vehicle.capacity).min(share_cap);
    trip.current_capacity + 1 <= effective_capacity
}

/// Recomputes arrival/begin-service/departure times for every stop in
/// `trip`, then checks every invariant. Returns `false` (with `trip` left
/// however far resimulation got) on any violation — callers probing
/// feasibility must operate on a copy.
///
/// # Examples
///
/// ```
/// use commute_router::geo::Location;
/// use commute_router::model::{Employee, Trip, Vehicle};
/// use commute_router::simulate::simulate;
///
/// let office = Location::new(12.98, 77.60);
/// let mut emp = Employee::new("E1", Location::new(12.97, 77.59), office, 480, 600);
/// let veh = Vehicle::new("V1", 4, 10.0, 30.0);
/// let mut trip = Trip::new(veh.depot_loc, 480, veh.capacity);
/// trip.stops.insert(1, commute_router::model::Stop::pickup("E1", emp.pickup));
/// trip.stops.last_mut().unwrap().loc = office;
/// emp.is_routed = true;
/// assert!(simulate(&mut trip, &veh, std::slice::from_ref(&emp), office, None));
/// ```
pub fn simulate(
    trip: &mut Trip,
    vehicle: &Vehicle,
    employees: &[Employee],
    office: Location,
    overrides: Option<&DistanceOverrides>,
) -> bool {
    if trip.stops.len() < 2 {
        return false;
    }
    if !matches!(trip.stops.last().unwrap().id, StopId::End) {
        return false;
    }

    let emp_by_id: HashMap<&str, &Employee> =
        employees.iter().map(|e| (e.id.as_str(), e)).collect();

    {
        let first = trip.stops.first_mut().unwrap();
        first.id = StopId::Start;
        first.is_pickup = false;
    }
    trip.stops.last_mut().unwrap().loc = office;

    for stop in trip.stops.iter_mut().skip(1) {
        match &stop.id {
            StopId::End => stop.is_pickup = false,
            StopId::Start => return false,
            StopId::Pickup(id) => {
                let Some(emp) = emp_by_id.get(id.as_str()) else {
                    return false;
                };
                stop.loc = emp.pickup;
                stop.is_pickup = true;
            }
        }
    }

    for i in 1..trip.stops.len() {
        let (prev, cur) = split_at(&mut trip.stops, i);
        let dist_km = stop_dist(prev, cur, overrides);
        let tmin = geo::travel_minutes(dist_km, vehicle.speed_kmh);
        let arrival = prev.departure_time + tmin;
        cur.arrival_time = arrival;

        match &cur.id {
            StopId::End => {
                cur.begin_service = arrival;
                cur.departure_time = arrival;
            }
            StopId::Pickup(id) => {
                let emp = emp_by_id[id.as_str()];
                cur.begin_service = arrival.max(emp.ready_time);
                cur.departure_time = cur.begin_service + SERVICE_PICKUP_MIN;
            }
            StopId::Start => unreachable!("START only ever occupies index 0"),
        }
    }

    let office_arrival = trip.stops.last().unwrap().arrival_time;
    for stop in &trip.stops[1..trip.stops.len() - 1] {
        if let StopId::Pickup(id) = &stop.id {
            let emp = emp_by_id[id.as_str()];
            if office_arrival > emp.due_time {
                return false;
            }
        }
    }

    trip.current_capacity = (trip.stops.len() as i32 - 2).max(0);
    trip.total_distance = total_distance(&trip.stops, overrides);
    trip.total_cost = trip.total_distance * vehicle.cost_per_km;
    true
}

fn split_at(stops: &mut [Stop], i: usize) -> (&Stop, &mut Stop) {
    let (left, right) = stops.split_at_mut(i);
    (&left[i - 1], &mut right[0])
}

fn stop_dist(a: &Stop, b: &Stop, overrides: Option<&DistanceOverrides>) -> f64 {
    match overrides {
        Some(o) => o.dist_by_id(a.id.as_output_str(), b.id.as_output_str(), a.loc, b.loc),
        None => geo::dist(a.loc, b.loc),
    }
}

/// `Σ dist(stop[i-1], stop[i])`, honouring the override table when given.
pub fn total_distance(stops: &[Stop], overrides: Option<&DistanceOverrides>) -> f64 {
    stops
        .windows(2)
        .map(|w| stop_dist(&w[0], &w[1], overrides))
        .sum()
}
