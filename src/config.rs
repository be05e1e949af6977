//! Tunable parameters for the insertion oracle and the ALNS improver.

/// Solomon c1/c2 insertion parameters (spec §4.3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionParams {
    pub alpha1: f64,
    pub alpha2: f64,
    pub mu: f64,
    pub lambda: f64,
}

impl Default for InsertionParams {
    fn default() -> Self {
        Self {
            alpha1: 0.5,
            alpha2: 0.5,
            mu: 1.0,
            lambda: 2.0,
        }
    }
}

/// ALNS run configuration (spec §4.5).
#[derive(Debug, Clone, PartialEq)]
pub struct AlnsConfig {
    pub iterations: usize,
    pub min_remove: usize,
    pub max_remove: usize,
    pub no_improve_stop: usize,
    pub t0: f64,
    pub cooling: f64,
    pub use_regret2: bool,
    pub apply_two_opt_after_repair: bool,
    pub seed: u64,
}

impl Default for AlnsConfig {
    fn default() -> Self {
        Self {
            iterations: 2000,
            min_remove: 4,
            max_remove: 12,
            no_improve_stop: 400,
            t0: 500.0,
            cooling: 0.999,
            use_regret2: true,
            apply_two_opt_after_repair: false,
            seed: 0,
        }
    }
}

/// Aggregates every tunable for one optimizer run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    pub insertion: InsertionParams,
    pub alns: AlnsConfig,
    /// Whether the per-employee sharing-preference cap (SINGLE/DOUBLE/TRIPLE
    /// → 1/2/3 passengers) is enforced. Disabled by default, matching the
    /// commented-out cap in the source this spec was distilled from (spec §9).
    pub sharing_caps_enabled: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            insertion: InsertionParams::default(),
            alns: AlnsConfig::default(),
            sharing_caps_enabled: false,
        }
    }
}
