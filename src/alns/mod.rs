//! Adaptive Large Neighborhood Search improver (spec §4.5): iterated
//! ruin-and-recreate with adaptive destroy-operator weights and simulated
//! annealing acceptance, tracking the best solution found.
//!
//! - [`destroy`] — Random, Shaw, and worst removal operators
//! - [`repair`] — Greedy and regret-2 reinsertion across every trip
//! - [`weights`] — Roulette-wheel operator weights
//! - [`improve`] — The iteration loop tying the above together

pub mod destroy;
pub mod repair;
mod weights;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{AlnsConfig, InsertionParams};
use crate::geo::{DistanceOverrides, Location};
use crate::model::Solution;

pub use weights::OperatorWeights;

/// Reaction factor `ρ` for the weight update (spec §4.5 step 9).
const REACTION_FACTOR: f64 = 0.15;
const REWARD_REJECTED: f64 = 0.0;
const REWARD_ACCEPTED_NO_IMPROVEMENT: f64 = 0.2;
const REWARD_NEW_BEST: f64 = 2.0;

/// Per-run termination state (spec §4.5 "States").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    ConvergedByBudget,
    ConvergedByStagnation,
}

/// Summary of one ALNS run: how far it got and why it stopped.
#[derive(Debug, Clone, Copy)]
pub struct ImproveOutcome {
    pub iterations_run: usize,
    pub state: RunState,
    pub best_score: f64,
}

/// `unrouted_count · 1e9 + total_cost` (spec §4.5 step 7): unrouted
/// employees dominate cost lexicographically.
pub fn score(solution: &Solution) -> f64 {
    solution.unrouted_count() as f64 * 1e9 + solution.total_cost()
}

/// Runs the ALNS loop in place over `solution`, replacing it with the best
/// solution observed once the iteration budget is exhausted or no
/// improvement has occurred for `config.no_improve_stop` consecutive
/// iterations (spec §4.5 step 11).
pub fn improve(
    solution: &mut Solution,
    office: Location,
    overrides: Option<&DistanceOverrides>,
    insertion_params: &InsertionParams,
    config: &AlnsConfig,
    sharing_caps_enabled: bool,
) -> ImproveOutcome {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut weights = OperatorWeights::new();

    let mut current = solution.clone();
    let mut current_score = score(&current);
    let mut best = current.clone();
    let mut best_score = current_score;

    let mut temperature = config.t0;
    let mut no_improve = 0usize;
    let mut state = RunState::ConvergedByBudget;
    let mut iterations_run = 0usize;

    for iter in 0..config.iterations {
        iterations_run = iter + 1;

        let q = if config.max_remove > config.min_remove {
            rng.random_range(config.min_remove..=config.max_remove)
        } else {
            config.min_remove
        }
        .max(1);

        let op = weights.select(&mut rng);

        let mut trial = current.clone();
        let removed = destroy::destroy(op, &mut trial, q, office, overrides, &mut rng);
        repair::repair(
            &mut trial,
            &removed,
            office,
            overrides,
            insertion_params,
            sharing_caps_enabled,
            config.use_regret2,
        );

        let trial_score = score(&trial);
        let delta = trial_score - current_score;
        let accept = delta <= 0.0 || rng.random::<f64>() < (-delta / temperature).exp();

        let reward = if !accept {
            no_improve += 1;
            REWARD_REJECTED
        } else {
            current = trial;
            current_score = trial_score;
            if current_score < best_score {
                best = current.clone();
                best_score = current_score;
                no_improve = 0;
                REWARD_NEW_BEST
            } else {
                no_improve += 1;
                REWARD_ACCEPTED_NO_IMPROVEMENT
            }
        };

        weights.update(op, reward, REACTION_FACTOR);
        temperature *= config.cooling;

        if no_improve >= config.no_improve_stop {
            state = RunState::ConvergedByStagnation;
            break;
        }
    }

    *solution = best;
    ImproveOutcome {
        iterations_run,
        state,
        best_score,
    }
}
