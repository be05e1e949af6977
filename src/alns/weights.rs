//! Adaptive roulette-wheel weights over the destroy operators (spec §4.5
//! steps 2 and 9).

use rand::seq::IndexedRandom;
use rand::Rng;

use super::destroy::DestroyOperator;

/// One smoothed weight per destroy operator, selected by roulette wheel and
/// updated after every ALNS iteration.
#[derive(Debug, Clone)]
pub struct OperatorWeights {
    entries: Vec<(DestroyOperator, f64)>,
}

impl OperatorWeights {
    /// Every operator starts at weight `1.0`.
    pub fn new() -> Self {
        Self {
            entries: DestroyOperator::ALL.iter().map(|&op| (op, 1.0)).collect(),
        }
    }

    /// Roulette-wheel selection proportional to current weight.
    pub fn select<R: Rng>(&self, rng: &mut R) -> DestroyOperator {
        self.entries
            .choose_weighted(rng, |(_, weight)| *weight)
            .map(|(op, _)| *op)
            .expect("at least one destroy operator is configured")
    }

    /// `w ← (1−ρ)·w + ρ·(1 + reward)` for the chosen operator (spec §4.5
    /// step 9); `ρ` is the reaction factor.
    pub fn update(&mut self, op: DestroyOperator, reward: f64, reaction_factor: f64) {
        for (candidate, weight) in self.entries.iter_mut() {
            if *candidate == op {
                *weight = (1.0 - reaction_factor) * *weight + reaction_factor * (1.0 + reward);
            }
        }
    }

    pub fn weight_of(&self, op: DestroyOperator) -> f64 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == op)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }
}

impl Default for OperatorWeights {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_weights_all_equal() {
        let weights = OperatorWeights::new();
        for op in DestroyOperator::ALL {
            assert_eq!(weights.weight_of(op), 1.0);
        }
    }

    #[test]
    fn test_update_raises_weight_on_new_best_reward() {
        let mut weights = OperatorWeights::new();
        weights.update(DestroyOperator::Shaw, 2.0, 0.15);
        // (1 - 0.15) * 1.0 + 0.15 * (1 + 2.0) = 0.85 + 0.45 = 1.3
        assert!((weights.weight_of(DestroyOperator::Shaw) - 1.3).abs() < 1e-9);
        assert_eq!(weights.weight_of(DestroyOperator::Random), 1.0);
    }

    #[test]
    fn test_update_lowers_weight_on_rejection() {
        let mut weights = OperatorWeights::new();
        weights.update(DestroyOperator::Worst, 0.0, 0.15);
        // (1 - 0.15) * 1.0 + 0.15 * 1.0 = 1.0 (reward 0 keeps the (1+reward) term at 1)
        assert!((weights.weight_of(DestroyOperator::Worst) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_select_returns_a_valid_operator() {
        let weights = OperatorWeights::new();
        let mut rng = SmallRng::seed_from_u64(42);
        let picked = weights.select(&mut rng);
        assert!(DestroyOperator::ALL.contains(&picked));
    }
}
