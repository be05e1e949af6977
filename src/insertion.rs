//! Solomon c1/c2 insertion oracle: the best feasible position for one
//! employee on one trip, plus its regret-2 value.

use crate::config::InsertionParams;
use crate::geo::{self, DistanceOverrides, Location};
use crate::model::{Employee, Trip, Vehicle};
use crate::simulate::simulate;

/// One feasible insertion candidate: the position to insert before, the
/// Solomon c1 cost, and the trip state after insertion (pre-simulated).
#[derive(Debug, Clone)]
pub struct InsertionCandidate {
    pub position: usize,
    pub c1: f64,
    pub trip_after: Trip,
}

/// Tries every insertion position `p ∈ [1, n-1]` for `emp` on `trip`,
/// returning the feasible candidate with the lowest c1 (spec §4.3).
pub fn best_insertion(
    trip: &Trip,
    emp: &Employee,
    vehicle: &Vehicle,
    employees: &[Employee],
    office: Location,
    overrides: Option<&DistanceOverrides>,
    params: &InsertionParams,
) -> Option<InsertionCandidate> {
    let mut best: Option<InsertionCandidate> = None;
    for pos in 1..trip.stops.len() {
        let Some(mut candidate) = trial_insert(trip, emp, pos) else {
            continue;
        };
        if !simulate(&mut candidate, vehicle, employees, office, overrides) {
            continue;
        }
        let c1 = calc_c1(trip, emp, pos, vehicle.speed_kmh, overrides, params);
        let better = match &best {
            None => true,
            Some(b) => c1 < b.c1,
        };
        if better {
            best = Some(InsertionCandidate {
                position: pos,
                c1,
                trip_after: candidate,
            });
        }
    }
    best
}

/// Returns a copy of `trip` with a pickup stop for `emp` inserted before
/// index `pos`, or `None` if `pos` is out of the valid `[1, n-1]` range.
fn trial_insert(trip: &Trip, emp: &Employee, pos: usize) -> Option<Trip> {
    if pos < 1 || pos > trip.stops.len() - 1 {
        return None;
    }
    let mut candidate = trip.clone();
    candidate
        .stops
        .insert(pos, crate::model::Stop::pickup(emp.id.clone(), emp.pickup));
    Some(candidate)
}

/// Solomon position cost: `α1·(d(prev,u) + d(u,next) − μ·d(prev,next)) + α2·(b_u − prev.departure)`.
fn calc_c1(
    trip: &Trip,
    emp: &Employee,
    pos: usize,
    speed_kmh: f64,
    overrides: Option<&DistanceOverrides>,
    params: &InsertionParams,
) -> f64 {
    let prev = &trip.stops[pos - 1];
    let next = &trip.stops[pos.min(trip.stops.len() - 1)];

    let d_iu = dist_pair(prev.id.as_output_str(), &emp.id, prev.loc, emp.pickup, overrides);
    let d_uj = dist_pair(&emp.id, next.id.as_output_str(), emp.pickup, next.loc, overrides);
    let d_ij = dist_pair(prev.id.as_output_str(), next.id.as_output_str(), prev.loc, next.loc, overrides);

    let c11 = d_iu + d_uj - params.mu * d_ij;

    let t_iu = (d_iu / speed_kmh) * 60.0;
    let b_u = ((prev.departure_time as f64) + t_iu).max(emp.ready_time as f64);
    let c12 = b_u - prev.departure_time as f64;

    params.alpha1 * c11 + params.alpha2 * c12
}

fn dist_pair(
    from_id: &str,
    to_id: &str,
    a: Location,
    b: Location,
    overrides: Option<&DistanceOverrides>,
) -> f64 {
    match overrides {
        Some(o) => o.dist_by_id(from_id, to_id, a, b),
        None => geo::dist(a, b),
    }
}

/// Regret-2 value for `emp` on `trip`: `second_best_c1 − best_c1`, scanning
/// every feasible position the same way [`best_insertion`] does. `None`
/// when no position is feasible; treat as `+∞` when only one position is
/// feasible (spec §4.3) — callers should use [`f64::INFINITY`] in that case.
pub fn regret2(
    trip: &Trip,
    emp: &Employee,
    vehicle: &Vehicle,
    employees: &[Employee],
    office: Location,
    overrides: Option<&DistanceOverrides>,
    params: &InsertionParams,
) -> Option<f64> {
    let mut best_c1 = f64::INFINITY;
    let mut second_c1 = f64::INFINITY;

    for pos in 1..trip.stops.len() {
        let Some(mut candidate) = trial_insert(trip, emp, pos) else {
            continue;
        };
        if !simulate(&mut candidate, vehicle, employees, office, overrides) {
            continue;
        }
        let c1 = calc_c1(trip, emp, pos, vehicle.speed_kmh, overrides, params);
        if c1 < best_c1 {
            second_c1 = best_c1;
            best_c1 = c1;
        } else if c1 < second_c1 {
            second_c1 = c1;
        }
    }

    if best_c1.is_infinite() {
        return None;
    }
    if second_c1.is_infinite() {
        return Some(f64::INFINITY);
    }
    Some(second_c1 - best_c1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, Vehicle, VehicleCategory};

    fn office() -> Location {
        Location::new(12.98, 77.60)
    }

    fn vehicle() -> Vehicle {
        let mut v = Vehicle::new("V1", 4, 10.0, 30.0);
        v.category = VehicleCategory::Any;
        v.available_time = 480;
        v
    }

    fn employee(id: &str, lat: f64, lng: f64, ready: i64, due: i64) -> Employee {
        Employee::new(id, Location::new(lat, lng), office(), ready, due)
    }

    #[test]
    fn test_best_insertion_finds_only_position_on_fresh_trip() {
        let v = vehicle();
        let trip = Trip::new(v.depot_loc, v.available_time, v.capacity);
        let emp = employee("E1", 12.97, 77.59, 480, 600);
        let cand =
            best_insertion(&trip, &emp, &v, std::slice::from_ref(&emp), office(), None, &InsertionParams::default())
                .expect("should find a feasible position");
        assert_eq!(cand.position, 1);
        assert_eq!(cand.trip_after.current_capacity, 1);
    }

    #[test]
    fn test_best_insertion_infeasible_due_time() {
        let v = vehicle();
        let trip = Trip::new(v.depot_loc, v.available_time, v.capacity);
        let emp = employee("E1", 12.97, 77.59, 480, 481);
        let cand = best_insertion(
            &trip,
            &emp,
            &v,
            std::slice::from_ref(&emp),
            office(),
            None,
            &InsertionParams::default(),
        );
        assert!(cand.is_none());
    }

    #[test]
    fn test_regret2_none_when_infeasible_everywhere() {
        let v = vehicle();
        let trip = Trip::new(v.depot_loc, v.available_time, v.capacity);
        let emp = employee("E1", 12.97, 77.59, 480, 481);
        let r = regret2(
            &trip,
            &emp,
            &v,
            std::slice::from_ref(&emp),
            office(),
            None,
            &InsertionParams::default(),
        );
        assert!(r.is_none());
    }

    #[test]
    fn test_regret2_infinite_when_single_feasible_position() {
        let v = vehicle();
        let trip = Trip::new(v.depot_loc, v.available_time, v.capacity);
        let emp = employee("E1", 12.97, 77.59, 480, 600);
        let r = regret2(
            &trip,
            &emp,
            &v,
            std::slice::from_ref(&emp),
            office(),
            None,
            &InsertionParams::default(),
        )
        .unwrap();
        assert!(r.is_infinite());
    }
}
