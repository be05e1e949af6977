//! Output document construction (spec §6): the summary block, unrouted
//! employees, and per-vehicle trip/passenger detail, alongside the raw
//! input echoed back verbatim (spec B.1).

use serde::Serialize;
use serde_json::Value;

use crate::model::{Solution, Trip, Vehicle};
use crate::time::format_time;

#[derive(Debug, Clone, Serialize)]
pub struct OutputDocument {
    pub input: Value,
    pub summary: Summary,
    pub unrouted_employees: Vec<UnroutedEmployee>,
    pub vehicles: Vec<VehicleOutput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_employees: usize,
    pub employees_routed: usize,
    pub employees_unrouted: usize,
    pub total_baseline_cost: f64,
    pub total_optimized_cost: f64,
    pub net_savings: f64,
    pub savings_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnroutedEmployee {
    pub employee_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleOutput {
    pub vehicle_id: String,
    pub category: String,
    pub capacity: i32,
    pub speed_kmh: f64,
    pub cost_per_km: f64,
    pub total_cost: f64,
    pub trips: Vec<TripOutput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripOutput {
    pub trip_number: usize,
    pub load: i32,
    pub capacity_limit: i32,
    pub start_time: String,
    pub end_time: String,
    pub trip_distance_km: f64,
    pub trip_cost: f64,
    pub route: Vec<String>,
    pub passengers: Vec<PassengerOutput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PassengerOutput {
    pub employee_id: String,
    pub pickup_time: String,
    pub drop_time: String,
}

/// Builds the output document from a solved [`Solution`], echoing
/// `raw_input` byte-for-byte as parsed rather than re-serializing the typed
/// model (spec B.1).
pub fn build(solution: &Solution, raw_input: Value) -> OutputDocument {
    let total_employees = solution.employees.len();
    let employees_routed = solution.employees.iter().filter(|e| e.is_routed).count();
    let employees_unrouted = total_employees - employees_routed;

    let total_baseline_cost: f64 = solution.employees.iter().map(|e| e.baseline_cost).sum();
    let total_optimized_cost = solution.total_cost();
    let net_savings = total_baseline_cost - total_optimized_cost;
    let savings_percentage = if total_baseline_cost > 1e-9 {
        (net_savings / total_baseline_cost) * 100.0
    } else {
        0.0
    };

    let unrouted_employees = solution
        .unrouted()
        .map(|e| UnroutedEmployee {
            employee_id: e.id.clone(),
            reason: solution
                .unrouted_reasons
                .get(&e.id)
                .cloned()
                .unwrap_or_else(|| "unrouted".to_string()),
        })
        .collect();

    let vehicles = solution.vehicles.iter().map(vehicle_output).collect();

    OutputDocument {
        input: raw_input,
        summary: Summary {
            total_employees,
            employees_routed,
            employees_unrouted,
            total_baseline_cost,
            total_optimized_cost,
            net_savings,
            savings_percentage,
        },
        unrouted_employees,
        vehicles,
    }
}

/// A trip with no pickups is omitted entirely (Open Question 1): it
/// contributes no distance or cost and should not phantom-bill a
/// depot-to-office leg.
fn vehicle_output(vehicle: &Vehicle) -> VehicleOutput {
    let trips = vehicle
        .trips
        .iter()
        .filter(|t| !t.is_idle())
        .enumerate()
        .map(|(i, trip)| trip_output(i + 1, trip))
        .collect();

    VehicleOutput {
        vehicle_id: vehicle.id.clone(),
        category: vehicle.category.as_str().to_string(),
        capacity: vehicle.capacity,
        speed_kmh: vehicle.speed_kmh,
        cost_per_km: vehicle.cost_per_km,
        total_cost: vehicle.total_cost,
        trips,
    }
}

fn trip_output(trip_number: usize, trip: &Trip) -> TripOutput {
    let start_time = trip.stops.first().map(|s| s.departure_time).unwrap_or(0);
    let end_time = trip.stops.last().map(|s| s.arrival_time).unwrap_or(0);

    let route = trip
        .stops
        .iter()
        .map(|s| s.id.as_output_str().to_string())
        .collect();

    let passengers = trip
        .stops
        .iter()
        .filter(|s| s.is_pickup)
        .map(|s| PassengerOutput {
            employee_id: s.id.as_output_str().to_string(),
            pickup_time: format_time(s.departure_time),
            drop_time: format_time(end_time),
        })
        .collect();

    TripOutput {
        trip_number,
        load: trip.current_capacity,
        capacity_limit: trip.max_capacity,
        start_time: format_time(start_time),
        end_time: format_time(end_time),
        trip_distance_km: trip.total_distance,
        trip_cost: trip.total_cost,
        route,
        passengers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InsertionParams;
    use crate::constructive;
    use crate::geo::Location;
    use crate::model::Employee;

    fn office() -> Location {
        Location::new(12.98, 77.60)
    }

    fn solved_solution() -> Solution {
        let e1 = Employee::new("E1", Location::new(12.97, 77.59), office(), 480, 900);
        let mut v1 = Vehicle::new("V1", 4, 10.0, 30.0);
        v1.available_time = 480;
        let mut solution = Solution::new(vec![e1], vec![v1]);
        constructive::solve(&mut solution, office(), None, &InsertionParams::default(), false);
        solution
    }

    #[test]
    fn test_summary_counts_routed_and_unrouted() {
        let solution = solved_solution();
        let doc = build(&solution, serde_json::json!({"employees": {}}));
        assert_eq!(doc.summary.total_employees, 1);
        assert_eq!(doc.summary.employees_routed, 1);
        assert_eq!(doc.summary.employees_unrouted, 0);
    }

    #[test]
    fn test_savings_percentage_zero_without_baseline() {
        let solution = solved_solution();
        let doc = build(&solution, Value::Null);
        assert_eq!(doc.summary.total_baseline_cost, 0.0);
        assert_eq!(doc.summary.savings_percentage, 0.0);
    }

    #[test]
    fn test_idle_trips_are_omitted() {
        let mut v = Vehicle::new("V1", 4, 10.0, 30.0);
        v.trips.push(Trip::new(v.depot_loc, 480, 4));
        let solution = Solution::new(vec![], vec![v]);
        let doc = build(&solution, Value::Null);
        assert!(doc.vehicles[0].trips.is_empty());
    }

    #[test]
    fn test_route_includes_start_and_end_sentinels() {
        let solution = solved_solution();
        let doc = build(&solution, Value::Null);
        let trip = &doc.vehicles[0].trips[0];
        assert_eq!(trip.route.first().map(String::as_str), Some("START"));
        assert_eq!(trip.route.last().map(String::as_str), Some("END"));
        assert!(trip.route.contains(&"E1".to_string()));
    }

    #[test]
    fn test_unrouted_employee_reason_defaults_when_absent() {
        let e = Employee::new("E9", Location::new(0.0, 0.0), office(), 0, 1);
        let solution = Solution::new(vec![e], vec![]);
        let doc = build(&solution, Value::Null);
        assert_eq!(doc.unrouted_employees.len(), 1);
        assert_eq!(doc.unrouted_employees[0].reason, "unrouted");
    }

    #[test]
    fn test_input_is_echoed_verbatim() {
        let solution = solved_solution();
        let raw = serde_json::json!({"marker": "abc123"});
        let doc = build(&solution, raw.clone());
        assert_eq!(doc.input, raw);
    }
}
