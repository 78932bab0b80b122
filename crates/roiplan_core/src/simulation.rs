//! Monte Carlo orchestrator
//!
//! Every iteration gets its own seed, drawn up front from a master RNG, so the
//! aggregated result depends only on the master seed and not on how the
//! iterations are scheduled across threads.

use rand::{RngCore, SeedableRng, rngs::SmallRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::config::{EngineConfig, ScenarioSpec};
use crate::model::{
    DistributionStats, HORIZON_MONTHS, InputSet, MonteCarloConfig, MonteCarloResult, TailRisk,
};
use crate::sampling::sample_inputs;
use crate::scenario::score_scenario;
use crate::stats::{percentile, sorted};

/// Metrics recorded for one sampled input set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOutcome {
    pub npv: f64,
    /// `None` when the solver found no credible root
    pub irr: Option<f64>,
    pub payback_months: u32,
    /// Uncapped
    pub roic: f64,
    pub upfront_investment: f64,
}

/// The base scenario entry with caps switched off
fn uncapped_base(config: &EngineConfig) -> ScenarioSpec {
    ScenarioSpec {
        apply_caps: false,
        ..config.scenarios.base()
    }
}

/// Sample inputs and evaluate the base scenario without caps
#[must_use]
pub fn simulate_iteration(inputs: &InputSet, config: &EngineConfig, seed: u64) -> IterationOutcome {
    let mut rng = SmallRng::seed_from_u64(seed);
    let sampled = sample_inputs(&mut rng, inputs);
    let result = score_scenario(&sampled, &uncapped_base(config), config);

    IterationOutcome {
        npv: result.npv,
        irr: result.irr.value(),
        payback_months: result.payback_months,
        roic: result.roic.raw,
        upfront_investment: result.upfront_investment,
    }
}

/// Derive one seed per iteration from the master seed
fn iteration_seeds(master: u64, iterations: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(master);
    (0..iterations).map(|_| rng.next_u64()).collect()
}

#[cfg(feature = "parallel")]
fn run_iterations(inputs: &InputSet, config: &EngineConfig, seeds: &[u64]) -> Vec<IterationOutcome> {
    const MAX_BATCH_SIZE: usize = 100;

    seeds
        .par_chunks(MAX_BATCH_SIZE)
        .flat_map_iter(|batch| {
            batch
                .iter()
                .map(|&seed| simulate_iteration(inputs, config, seed))
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_iterations(inputs: &InputSet, config: &EngineConfig, seeds: &[u64]) -> Vec<IterationOutcome> {
    seeds
        .iter()
        .map(|&seed| simulate_iteration(inputs, config, seed))
        .collect()
}

/// Aggregate iteration outcomes into distributions and tail risk
#[must_use]
pub fn aggregate(iterations: &[IterationOutcome], seed: u64) -> MonteCarloResult {
    let count = iterations.len();

    let npv_samples = sorted(&iterations.iter().map(|o| o.npv).collect::<Vec<_>>());
    let irr_samples = sorted(&iterations.iter().filter_map(|o| o.irr).collect::<Vec<_>>());
    let payback_samples = sorted(
        &iterations
            .iter()
            .map(|o| f64::from(o.payback_months))
            .collect::<Vec<_>>(),
    );
    let roic_samples = sorted(&iterations.iter().map(|o| o.roic).collect::<Vec<_>>());
    let upfront_samples = sorted(
        &iterations
            .iter()
            .map(|o| o.upfront_investment)
            .collect::<Vec<_>>(),
    );

    let fraction = |n: usize| if count == 0 { 0.0 } else { n as f64 / count as f64 };

    let median_upfront = percentile(&upfront_samples, 50.0);
    let loss_threshold = -0.5 * median_upfront;

    MonteCarloResult {
        iterations: count,
        seed,
        npv: DistributionStats::from_sorted(&npv_samples),
        irr: DistributionStats::from_sorted(&irr_samples),
        payback_months: DistributionStats::from_sorted(&payback_samples),
        roic: DistributionStats::from_sorted(&roic_samples),
        probability_positive_npv: fraction(npv_samples.iter().filter(|&&v| v > 0.0).count()),
        tail_risk: TailRisk {
            prob_capital_loss_50: fraction(
                npv_samples.iter().filter(|&&v| v < loss_threshold).count(),
            ),
            prob_payback_beyond_horizon: fraction(
                iterations
                    .iter()
                    .filter(|o| o.payback_months > HORIZON_MONTHS)
                    .count(),
            ),
        },
        median_upfront_investment: median_upfront,
        npv_samples,
    }
}

/// Run a seeded Monte Carlo simulation around `inputs`
///
/// Without a configured seed, one is drawn from the thread RNG and recorded
/// in the result so the run can be reproduced.
#[must_use]
pub fn monte_carlo_simulate(
    inputs: &InputSet,
    config: &EngineConfig,
    mc: &MonteCarloConfig,
) -> MonteCarloResult {
    let seed = mc.seed.unwrap_or_else(|| rand::rng().next_u64());
    let seeds = iteration_seeds(seed, mc.iterations);
    let iterations = run_iterations(inputs, config, &seeds);
    let result = aggregate(&iterations, seed);

    debug!(
        iterations = result.iterations,
        seed,
        npv_p50 = result.npv.p50,
        probability_positive_npv = result.probability_positive_npv,
        "Monte Carlo run complete"
    );

    result
}
