//! Solomon's I1 sequential insertion constructor (spec §4.4).

use crate::config::InsertionParams;
use crate::geo::{self, DistanceOverrides, Location};
use crate::insertion::{best_insertion, regret2};
use crate::model::{Solution, Stop, Trip};
use crate::simulate::{compatible, simulate};

/// Builds an initial solution in place: opens one trip per vehicle, then
/// inserts every employee under the Solomon c1/c2 criteria, opening new
/// trips on demand. Employees that cannot be placed anywhere are recorded
/// in `solution.unrouted_reasons`.
pub fn solve(
    solution: &mut Solution,
    office: Location,
    overrides: Option<&DistanceOverrides>,
    params: &InsertionParams,
    sharing_caps_enabled: bool,
) {
    for vehicle in solution.vehicles.iter_mut() {
        vehicle.trips.push(Trip::new(vehicle.depot_loc, vehicle.available_time, vehicle.capacity));
    }

    let mut order: Vec<usize> = (0..solution.employees.len()).collect();
    order.sort_by_key(|&i| {
        (
            solution.employees[i].due_time,
            solution.employees[i].ready_time,
        )
    });

    for &emp_idx in &order {
        if solution.employees[emp_idx].is_routed {
            continue;
        }

        let employees_snapshot = solution.employees.clone();
        let emp = employees_snapshot[emp_idx].clone();

        let mut best: Option<(usize, usize, Trip, f64)> = None; // (vehicle_idx, trip_idx, new_trip, c2)

        for (v_idx, vehicle) in solution.vehicles.iter().enumerate() {
            let Some(trip_idx) = vehicle.trips.len().checked_sub(1) else {
                continue;
            };
            let trip = &vehicle.trips[trip_idx];

            if !compatible(vehicle, &emp, trip, sharing_caps_enabled) {
                continue;
            }

            let Some(candidate) =
                best_insertion(trip, &emp, vehicle, &employees_snapshot, office, overrides, params)
            else {
                continue;
            };

            let regret = regret2(trip, &emp, vehicle, &employees_snapshot, office, overrides, params)
                .unwrap_or(0.0);
            let d0u = dist_from(trip, &emp.id, emp.pickup, overrides);
            let c2 = params.lambda * d0u - candidate.c1 + 0.5 * regret;

            let better = match &best {
                None => true,
                Some((_, _, _, best_c2)) => c2 > *best_c2,
            };
            if better {
                best = Some((v_idx, trip_idx, candidate.trip_after, c2));
            }
        }

        if let Some((v_idx, trip_idx, mut new_trip, _)) = best {
            let vehicle = &mut solution.vehicles[v_idx];
            let share_cap = if sharing_caps_enabled {
                emp.share_pref.max_co_riders().unwrap_or(i32::MAX)
            } else {
                i32::MAX
            };
            // Tighten the trip's effective cap to the strictest sharing preference seen so far.
            new_trip.max_capacity = new_trip.max_capacity.min(vehicle.capacity).min(share_cap);
            vehicle.trips[trip_idx] = new_trip;
            let end = vehicle.trips[trip_idx].stops.last().unwrap();
            vehicle.available_time = end.departure_time;
            vehicle.current_loc = end.loc;

            solution.employees[emp_idx].is_routed = true;
            solution.unrouted_reasons.remove(&emp.id);
            continue;
        }

        try_open_new_trip(solution, emp_idx, office, overrides, sharing_caps_enabled);
    }

    for vehicle in solution.vehicles.iter_mut() {
        vehicle.recompute_total_cost();
    }
}

fn dist_from(trip: &Trip, emp_id: &str, pickup: Location, overrides: Option<&DistanceOverrides>) -> f64 {
    let start = &trip.stops[0];
    match overrides {
        Some(o) => o.dist_by_id(start.id.as_output_str(), emp_id, start.loc, pickup),
        None => geo::dist(start.loc, pickup),
    }
}

/// Attempts to open a brand-new trip (START at OFFICE) on the first
/// compatible vehicle in fleet order.
fn try_open_new_trip(
    solution: &mut Solution,
    emp_idx: usize,
    office: Location,
    overrides: Option<&DistanceOverrides>,
    sharing_caps_enabled: bool,
) {
    let employees_snapshot = solution.employees.clone();
    let emp = employees_snapshot[emp_idx].clone();

    let mut fail_reason =
        "No feasible insertion and could not start a new trip (category/capacity/time window)"
            .to_string();

    for vehicle in solution.vehicles.iter_mut() {
        let share_cap = if sharing_caps_enabled {
            emp.share_pref.max_co_riders().unwrap_or(i32::MAX)
        } else {
            i32::MAX
        };
        if share_cap == 0 {
            continue;
        }
        if emp.veh_pref == crate::model::VehicleCategory::Premium
            && vehicle.category != crate::model::VehicleCategory::Premium
        {
            continue;
        }

        let mut new_trip = Trip::new(office, vehicle.available_time, vehicle.capacity);
        new_trip.stops.insert(1, Stop::pickup(emp.id.clone(), emp.pickup));

        if !simulate(&mut new_trip, vehicle, &employees_snapshot, office, overrides) {
            fail_reason = format!("Could not start a new trip: infeasible for {}", vehicle.id);
            continue;
        }

        new_trip.max_capacity = vehicle.capacity.min(share_cap);
        new_trip.current_capacity = 1;

        let end = new_trip.stops.last().unwrap();
        vehicle.available_time = end.departure_time;
        vehicle.current_loc = end.loc;
        vehicle.trips.push(new_trip);

        solution.employees[emp_idx].is_routed = true;
        solution.unrouted_reasons.remove(&emp.id);
        return;
    }

    solution.mark_unrouted(&emp.id, fail_reason);
}
