//! Input document parsing (spec §6): a lenient loader that mirrors the
//! original source's defaults-on-missing-field behavior — an absent or
//! malformed sub-field falls back to a sane default rather than aborting
//! the run. Only malformed JSON itself (caught upstream by
//! `serde_json::from_str`) is a boundary failure.

use std::collections::HashMap;

use serde_json::Value;

use crate::geo::Location;
use crate::model::{Employee, SharingPreference, Solution, Vehicle, VehicleCategory};
use crate::time::parse_time_value;

/// Parses `doc` into a [`Solution`] plus the OFFICE location implied by the
/// first-loaded employee's `drop` (spec §3, §6). Falls back to
/// `Location::new(0.0, 0.0)` for OFFICE when the document has no employees.
pub fn parse(doc: &Value) -> (Solution, Location) {
    let baseline_costs = parse_baseline(doc);
    let mut office = None;

    let mut employees = Vec::new();
    if let Some(emps) = doc.get("employees").and_then(Value::as_object) {
        for (id, data) in emps {
            let pickup = parse_location(data.get("pickup"));
            let drop = parse_location(data.get("drop"));
            if office.is_none() {
                office = Some(drop);
            }

            let mut e = Employee::new(
                id.clone(),
                pickup,
                drop,
                time_field(data, "earliest_pickup", "08:00"),
                time_field(data, "latest_drop", "23:59"),
            );
            e.priority = data
                .get("priority")
                .and_then(Value::as_i64)
                .unwrap_or(999) as i32;
            e.veh_pref = VehicleCategory::parse(
                data.get("vehicle_preference")
                    .and_then(Value::as_str)
                    .unwrap_or("any"),
            );
            e.share_pref = SharingPreference::parse(
                data.get("sharing_preference")
                    .and_then(Value::as_str)
                    .unwrap_or("any"),
            );
            e.baseline_cost = baseline_costs.get(id).copied().unwrap_or(0.0);
            employees.push(e);
        }
    }

    let mut vehicles = Vec::new();
    if let Some(vehs) = doc.get("vehicles").and_then(Value::as_array) {
        for data in vehs {
            let id = data
                .get("vehicle_id")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let capacity = data.get("capacity").and_then(Value::as_i64).unwrap_or(0) as i32;
            let cost_per_km = data.get("cost_per_km").and_then(Value::as_f64).unwrap_or(0.0);
            let speed_kmh = data
                .get("avg_speed_kmph")
                .and_then(Value::as_f64)
                .unwrap_or(30.0);

            let mut v = Vehicle::new(id, capacity, cost_per_km, speed_kmh);
            v.depot_loc = Location::new(
                data.get("current_lat").and_then(Value::as_f64).unwrap_or(0.0),
                data.get("current_lng").and_then(Value::as_f64).unwrap_or(0.0),
            );
            v.current_loc = v.depot_loc;
            v.available_time = time_field(data, "available_from", "08:00");
            v.category = VehicleCategory::parse(
                data.get("category").and_then(Value::as_str).unwrap_or("any"),
            );
            vehicles.push(v);
        }
    }

    let office = office.unwrap_or(Location::new(0.0, 0.0));
    (Solution::new(employees, vehicles), office)
}

fn time_field(data: &Value, field: &str, default: &str) -> i64 {
    parse_time_value(data.get(field).unwrap_or(&Value::Null), default)
}

fn parse_location(v: Option<&Value>) -> Location {
    Location::new(
        v.and_then(|v| v.get("lat")).and_then(Value::as_f64).unwrap_or(0.0),
        v.and_then(|v| v.get("lng")).and_then(Value::as_f64).unwrap_or(0.0),
    )
}

fn parse_baseline(doc: &Value) -> HashMap<String, f64> {
    let mut map = HashMap::new();
    if let Some(arr) = doc.get("baseline").and_then(Value::as_array) {
        for b in arr {
            if let Some(id) = b.get("employee_id").and_then(Value::as_str) {
                let cost = b.get("baseline_cost").and_then(Value::as_f64).unwrap_or(0.0);
                map.insert(id.to_string(), cost);
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VehicleCategory;

    fn sample_doc() -> Value {
        serde_json::json!({
            "employees": {
                "E1": {
                    "priority": 1,
                    "pickup": {"lat": 12.91, "lng": 77.50},
                    "drop": {"lat": 12.98, "lng": 77.60},
                    "earliest_pickup": "08:00",
                    "latest_drop": "09:30",
                    "vehicle_preference": "premium",
                    "sharing_preference": "double"
                },
                "E2": {
                    "pickup": {"lat": 12.92, "lng": 77.51},
                    "drop": {"lat": 0.0, "lng": 0.0}
                }
            },
            "vehicles": [
                {
                    "vehicle_id": "V1",
                    "capacity": 4,
                    "cost_per_km": 12.0,
                    "avg_speed_kmph": 35.0,
                    "current_lat": 12.9,
                    "current_lng": 77.5,
                    "available_from": "07:45",
                    "category": "premium"
                }
            ],
            "baseline": [
                {"employee_id": "E1", "baseline_cost": 150.0}
            ]
        })
    }

    #[test]
    fn test_office_is_first_employees_drop() {
        let (_, office) = parse(&sample_doc());
        assert_eq!(office, Location::new(12.98, 77.60));
    }

    #[test]
    fn test_employee_fields_parsed() {
        let (solution, _) = parse(&sample_doc());
        let e1 = solution.employees.iter().find(|e| e.id == "E1").unwrap();
        assert_eq!(e1.priority, 1);
        assert_eq!(e1.ready_time, 480);
        assert_eq!(e1.due_time, 570);
        assert_eq!(e1.veh_pref, VehicleCategory::Premium);
        assert_eq!(e1.baseline_cost, 150.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let (solution, _) = parse(&sample_doc());
        let e2 = solution.employees.iter().find(|e| e.id == "E2").unwrap();
        assert_eq!(e2.priority, 999);
        assert_eq!(e2.due_time, 1439);
        assert_eq!(e2.veh_pref, VehicleCategory::Any);
        assert_eq!(e2.baseline_cost, 0.0);
    }

    #[test]
    fn test_vehicle_fields_parsed() {
        let (solution, _) = parse(&sample_doc());
        let v1 = &solution.vehicles[0];
        assert_eq!(v1.id, "V1");
        assert_eq!(v1.capacity, 4);
        assert_eq!(v1.speed_kmh, 35.0);
        assert_eq!(v1.available_time, 465);
        assert_eq!(v1.category, VehicleCategory::Premium);
    }

    #[test]
    fn test_vehicle_default_speed_when_missing() {
        let doc = serde_json::json!({
            "employees": {},
            "vehicles": [{"vehicle_id": "V1", "capacity": 4, "cost_per_km": 1.0}]
        });
        let (solution, _) = parse(&doc);
        assert_eq!(solution.vehicles[0].speed_kmh, 30.0);
    }

    #[test]
    fn test_empty_document_yields_zero_office() {
        let (solution, office) = parse(&serde_json::json!({}));
        assert!(solution.employees.is_empty());
        assert!(solution.vehicles.is_empty());
        assert_eq!(office, Location::new(0.0, 0.0));
    }
}
