//! Destroy operators: random, Shaw (relatedness), and worst removal (spec
//! §4.5 step 4).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::geo::{DistanceOverrides, Location};
use crate::model::Solution;
use crate::simulate::simulate;

/// One of the three destroy operators selectable by roulette-wheel
/// (spec §4.5 step 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestroyOperator {
    Random,
    Shaw,
    Worst,
}

impl DestroyOperator {
    pub const ALL: [DestroyOperator; 3] = [
        DestroyOperator::Random,
        DestroyOperator::Shaw,
        DestroyOperator::Worst,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DestroyOperator::Random => "random",
            DestroyOperator::Shaw => "shaw",
            DestroyOperator::Worst => "worst",
        }
    }
}

/// Removes up to `q` currently-routed employees from `solution` using `op`,
/// returning their ids. Each removal erases the employee's pickup stop and
/// re-simulates the trip that held it (spec §4.5 step 5).
pub fn destroy<R: Rng>(
    op: DestroyOperator,
    solution: &mut Solution,
    q: usize,
    office: Location,
    overrides: Option<&DistanceOverrides>,
    rng: &mut R,
) -> Vec<String> {
    let routed: Vec<String> = solution
        .employees
        .iter()
        .filter(|e| e.is_routed)
        .map(|e| e.id.clone())
        .collect();
    if routed.is_empty() {
        return Vec::new();
    }
    let q = q.clamp(1, routed.len());

    let chosen = match op {
        DestroyOperator::Random => random_selection(routed, q, rng),
        DestroyOperator::Shaw => shaw_selection(solution, routed, q, rng),
        DestroyOperator::Worst => worst_selection(solution, routed, q, office, overrides),
    };

    for id in &chosen {
        remove_employee(solution, id, office, overrides);
    }
    chosen
}

fn random_selection<R: Rng>(mut routed: Vec<String>, q: usize, rng: &mut R) -> Vec<String> {
    routed.shuffle(rng);
    routed.truncate(q);
    routed
}

/// Picks a random seed employee, then the `q - 1` routed employees most
/// similar to it by `|Δready| + |Δdue|` (spec §4.5 step 4, Shaw).
fn shaw_selection<R: Rng>(
    solution: &Solution,
    mut routed: Vec<String>,
    q: usize,
    rng: &mut R,
) -> Vec<String> {
    let seed_idx = rng.random_range(0..routed.len());
    let seed_id = routed.swap_remove(seed_idx);
    let seed = solution
        .employees
        .iter()
        .find(|e| e.id == seed_id)
        .expect("seed employee must exist in solution");
    let (seed_ready, seed_due) = (seed.ready_time, seed.due_time);

    routed.sort_by_key(|id| {
        let emp = solution
            .employees
            .iter()
            .find(|e| &e.id == id)
            .expect("routed employee must exist in solution");
        (emp.ready_time - seed_ready).abs() + (emp.due_time - seed_due).abs()
    });
    routed.truncate(q - 1);
    routed.push(seed_id);
    routed
}

/// Picks the `q` routed employees whose removal yields the largest cost
/// reduction (spec §4.5 step 4, Worst; §9 notes this is O(n²) per call).
fn worst_selection(
    solution: &Solution,
    routed: Vec<String>,
    q: usize,
    office: Location,
    overrides: Option<&DistanceOverrides>,
) -> Vec<String> {
    let mut gains: Vec<(String, f64)> = routed
        .into_iter()
        .map(|id| {
            let gain = removal_gain(solution, &id, office, overrides);
            (id, gain)
        })
        .collect();
    gains.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("removal gain should not be NaN"));
    gains.into_iter().take(q).map(|(id, _)| id).collect()
}

/// Cost reduction from removing `id`'s pickup stop from its trip, measured
/// by a full re-simulation on a scratch copy of that trip.
fn removal_gain(
    solution: &Solution,
    id: &str,
    office: Location,
    overrides: Option<&DistanceOverrides>,
) -> f64 {
    let Some((v_idx, t_idx)) = locate_pickup(solution, id) else {
        return 0.0;
    };
    let vehicle = &solution.vehicles[v_idx];
    let trip = &vehicle.trips[t_idx];
    let before = trip.total_cost;

    let mut trial = trip.clone();
    trial.stops.retain(|s| s.id.employee_id() != Some(id));
    if !simulate(&mut trial, vehicle, &solution.employees, office, overrides) {
        return 0.0;
    }
    before - trial.total_cost
}

fn locate_pickup(solution: &Solution, id: &str) -> Option<(usize, usize)> {
    for (v_idx, vehicle) in solution.vehicles.iter().enumerate() {
        for (t_idx, trip) in vehicle.trips.iter().enumerate() {
            if trip.stops.iter().any(|s| s.id.employee_id() == Some(id)) {
                return Some((v_idx, t_idx));
            }
        }
    }
    None
}

fn remove_employee(
    solution: &mut Solution,
    id: &str,
    office: Location,
    overrides: Option<&DistanceOverrides>,
) {
    if let Some(emp) = solution.employees.iter_mut().find(|e| e.id == id) {
        emp.is_routed = false;
    }
    let Some((v_idx, t_idx)) = locate_pickup(solution, id) else {
        return;
    };

    let mut trip = solution.vehicles[v_idx].trips[t_idx].clone();
    trip.stops.retain(|s| s.id.employee_id() != Some(id));
    simulate(&mut trip, &solution.vehicles[v_idx], &solution.employees, office, overrides);

    solution.vehicles[v_idx].trips[t_idx] = trip;
    solution.vehicles[v_idx].recompute_total_cost();
}
