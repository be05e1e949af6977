//! Repair operators: reinsert ALNS-removed employees across every trip of
//! every vehicle, not just the last one (spec §4.5 step 6).

use crate::config::InsertionParams;
use crate::geo::{DistanceOverrides, Location};
use crate::insertion::{best_insertion, InsertionCandidate};
use crate::model::{Employee, Solution};
use crate::simulate::compatible;

/// Reinserts every id in `removed` into `solution`, via either greedy
/// (insertion order) or regret-2 repair, per `use_regret2`.
pub fn repair(
    solution: &mut Solution,
    removed: &[String],
    office: Location,
    overrides: Option<&DistanceOverrides>,
    params: &InsertionParams,
    sharing_caps_enabled: bool,
    use_regret2: bool,
) {
    if use_regret2 {
        regret2_repair(solution, removed, office, overrides, params, sharing_caps_enabled);
    } else {
        greedy_repair(solution, removed, office, overrides, params, sharing_caps_enabled);
    }
    for vehicle in solution.vehicles.iter_mut() {
        vehicle.recompute_total_cost();
    }
}

/// Inserts each removed employee at its overall best feasible position, in
/// the order they were removed.
fn greedy_repair(
    solution: &mut Solution,
    removed: &[String],
    office: Location,
    overrides: Option<&DistanceOverrides>,
    params: &InsertionParams,
    sharing_caps_enabled: bool,
) {
    for id in removed {
        let Some(emp) = find_employee(solution, id) else {
            continue;
        };
        let mut options = insertion_options(solution, &emp, office, overrides, params, sharing_caps_enabled);
        if options.is_empty() {
            solution.mark_unrouted(id, format!("ALNS could not reinsert {id}: no feasible trip"));
            continue;
        }
        let (v_idx, t_idx, cand) = options.remove(0);
        apply_insertion(solution, id, v_idx, t_idx, cand);
    }
}

/// Repeatedly reinserts the pending employee with the largest regret-2
/// value (second-best minus best global insertion cost), treating a unique
/// feasible option as infinite regret so it is placed first (spec §4.3,
/// §4.5 step 6).
fn regret2_repair(
    solution: &mut Solution,
    removed: &[String],
    office: Location,
    overrides: Option<&DistanceOverrides>,
    params: &InsertionParams,
    sharing_caps_enabled: bool,
) {
    let mut pending: Vec<String> = removed.to_vec();

    while !pending.is_empty() {
        let mut evaluated: Vec<(String, f64, usize, usize, InsertionCandidate)> = Vec::new();
        let mut infeasible: Vec<String> = Vec::new();

        for id in &pending {
            let Some(emp) = find_employee(solution, id) else {
                continue;
            };
            let mut options = insertion_options(solution, &emp, office, overrides, params, sharing_caps_enabled);
            if options.is_empty() {
                infeasible.push(id.clone());
                continue;
            }
            let regret = if options.len() >= 2 {
                options[1].2.c1 - options[0].2.c1
            } else {
                f64::INFINITY
            };
            let (v_idx, t_idx, cand) = options.remove(0);
            evaluated.push((id.clone(), regret, v_idx, t_idx, cand));
        }

        for id in &infeasible {
            solution.mark_unrouted(id, format!("ALNS could not reinsert {id}: no feasible trip"));
        }
        pending.retain(|id| !infeasible.contains(id));

        if evaluated.is_empty() {
            break;
        }
        evaluated.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .expect("regret should not be NaN")
                .then_with(|| a.4.c1.partial_cmp(&b.4.c1).expect("c1 should not be NaN"))
        });
        let (id, _, v_idx, t_idx, cand) = evaluated.remove(0);
        pending.retain(|x| x != &id);
        apply_insertion(solution, &id, v_idx, t_idx, cand);
    }
}

fn find_employee(solution: &Solution, id: &str) -> Option<Employee> {
    solution.employees.iter().find(|e| e.id == id).cloned()
}

/// The best feasible insertion for `emp` on every (vehicle, trip), sorted
/// by c1 ascending — mirrors one candidate per route, the standard
/// granularity for regret-k repair.
fn insertion_options(
    solution: &Solution,
    emp: &Employee,
    office: Location,
    overrides: Option<&DistanceOverrides>,
    params: &InsertionParams,
    sharing_caps_enabled: bool,
) -> Vec<(usize, usize, InsertionCandidate)> {
    let mut options = Vec::new();
    for (v_idx, vehicle) in solution.vehicles.iter().enumerate() {
        for (t_idx, trip) in vehicle.trips.iter().enumerate() {
            if !compatible(vehicle, emp, trip, sharing_caps_enabled) {
                continue;
            }
            if let Some(cand) =
                best_insertion(trip, emp, vehicle, &solution.employees, office, overrides, params)
            {
                options.push((v_idx, t_idx, cand));
            }
        }
    }
    options.sort_by(|a, b| a.2.c1.partial_cmp(&b.2.c1).expect("c1 should not be NaN"));
    options
}

fn apply_insertion(solution: &mut Solution, id: &str, v_idx: usize, t_idx: usize, cand: InsertionCandidate) {
    solution.vehicles[v_idx].trips[t_idx] = cand.trip_after;
    if let Some(emp) = solution.employees.iter_mut().find(|e| e.id == id) {
        emp.is_routed = true;
    }
    solution.unrouted_reasons.remove(id);
}
