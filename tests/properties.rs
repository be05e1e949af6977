//! Property-based tests for the round-trip laws and invariants of spec §8,
//! driven with `proptest` over randomized small problem instances.

use proptest::prelude::*;

use commute_router::geo::Location;
use commute_router::model::{Employee, Stop, Trip, Vehicle, VehicleCategory};
use commute_router::simulate::simulate;

fn office() -> Location {
    Location::new(12.98, 77.60)
}

fn arb_employee(id: &'static str) -> impl Strategy<Value = Employee> {
    (12.80f64..13.10, 77.40f64..77.70, 400i64..700, 700i64..1200).prop_map(
        move |(lat, lng, ready, due)| {
            Employee::new(id, Location::new(lat, lng), office(), ready, due)
        },
    )
}

fn arb_vehicle() -> impl Strategy<Value = Vehicle> {
    (2i32..8, 1.0f64..50.0, 15.0f64..60.0, 400i64..600).prop_map(|(cap, cost, speed, avail)| {
        let mut v = Vehicle::new("V1", cap, cost, speed);
        v.category = VehicleCategory::Any;
        v.available_time = avail;
        v
    })
}

proptest! {
    /// Simulating a feasible route twice without modification is idempotent:
    /// every numeric field is unchanged (spec §8 round-trip laws).
    #[test]
    fn simulate_is_idempotent(emp in arb_employee("E1"), veh in arb_vehicle()) {
        let mut trip = Trip::new(veh.depot_loc, veh.available_time, veh.capacity);
        trip.stops.insert(1, Stop::pickup("E1", emp.pickup));
        trip.stops.last_mut().unwrap().loc = office();

        if simulate(&mut trip, &veh, std::slice::from_ref(&emp), office(), None) {
            let (dist1, cost1, cap1) = (trip.total_distance, trip.total_cost, trip.current_capacity);
            let stops1 = trip.stops.clone();
            prop_assert!(simulate(&mut trip, &veh, std::slice::from_ref(&emp), office(), None));
            prop_assert!((trip.total_distance - dist1).abs() < 1e-9);
            prop_assert!((trip.total_cost - cost1).abs() < 1e-9);
            prop_assert_eq!(trip.current_capacity, cap1);
            prop_assert_eq!(trip.stops.len(), stops1.len());
        }
    }

    /// Inserting an employee then removing it and re-simulating restores the
    /// prior total distance within tolerance (spec §8 round-trip laws).
    #[test]
    fn insert_then_remove_restores_distance(emp in arb_employee("E1"), veh in arb_vehicle()) {
        let mut base = Trip::new(veh.depot_loc, veh.available_time, veh.capacity);
        prop_assert!(simulate(&mut base, &veh, &[], office(), None));
        let before = base.total_distance;

        let mut with_pickup = base.clone();
        with_pickup.stops.insert(1, Stop::pickup("E1", emp.pickup));
        if simulate(&mut with_pickup, &veh, std::slice::from_ref(&emp), office(), None) {
            with_pickup.stops.retain(|s| s.id.employee_id() != Some("E1"));
            prop_assert!(simulate(&mut with_pickup, &veh, &[], office(), None));
            prop_assert!((with_pickup.total_distance - before).abs() < 1e-9);
        }
    }

    /// For every feasible simulation, every pickup on the trip satisfies the
    /// ready/due window invariants (spec §8 invariants).
    #[test]
    fn feasible_simulation_respects_time_windows(
        e1 in arb_employee("E1"),
        e2 in arb_employee("E2"),
        veh in arb_vehicle(),
    ) {
        let mut trip = Trip::new(veh.depot_loc, veh.available_time, veh.capacity);
        trip.stops.insert(1, Stop::pickup("E1", e1.pickup));
        trip.stops.insert(2, Stop::pickup("E2", e2.pickup));
        trip.stops.last_mut().unwrap().loc = office();

        let employees = vec![e1.clone(), e2.clone()];
        if simulate(&mut trip, &veh, &employees, office(), None) {
            let office_arrival = trip.stops.last().unwrap().arrival_time;
            for stop in &trip.stops[1..trip.stops.len() - 1] {
                let emp_id = stop.id.employee_id().unwrap();
                let emp = employees.iter().find(|e| e.id == emp_id).unwrap();
                prop_assert!(stop.begin_service >= emp.ready_time);
                prop_assert!(office_arrival <= emp.due_time);
            }
            prop_assert_eq!(trip.current_capacity, 2);
            prop_assert!(trip.current_capacity <= trip.max_capacity);
        }
    }

    /// A trip with zero speed is never feasible once it has a pickup to reach.
    #[test]
    fn zero_speed_vehicle_is_never_feasible(emp in arb_employee("E1"), mut veh in arb_vehicle()) {
        veh.speed_kmh = 0.0;
        let mut trip = Trip::new(veh.depot_loc, veh.available_time, veh.capacity);
        trip.stops.insert(1, Stop::pickup("E1", emp.pickup));
        trip.stops.last_mut().unwrap().loc = office();
        prop_assert!(!simulate(&mut trip, &veh, std::slice::from_ref(&emp), office(), None));
    }
}
