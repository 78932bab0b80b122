//! Top-level entry points producing a complete `RoiReport`

use crate::analysis::run_sensitivity;
use crate::config::EngineConfig;
use crate::model::{InputSet, MonteCarloConfig, RoiReport};
use crate::scenario::run_scenarios;
use crate::simulation::monte_carlo_simulate;

/// Scenarios and sensitivity for one input set, without Monte Carlo
#[must_use]
pub fn evaluate(inputs: &InputSet, config: &EngineConfig) -> RoiReport {
    let scenarios = run_scenarios(inputs, config);
    let sensitivity = run_sensitivity(inputs, config);

    let base = crate::scenario::base_scenario(&scenarios.results).or(scenarios.results.first());
    let (upfront_investment, total_investment) = base
        .map(|s| (s.upfront_investment, s.total_capital_deployed))
        .unwrap_or_default();

    RoiReport {
        inputs: inputs.clone(),
        scenarios: scenarios.results,
        expected_npv: scenarios.expected_npv,
        expected_roic: scenarios.expected_roic,
        sensitivity,
        upfront_investment,
        total_investment,
        monte_carlo: None,
    }
}

/// Full report including a Monte Carlo distribution
#[must_use]
pub fn evaluate_with_monte_carlo(
    inputs: &InputSet,
    config: &EngineConfig,
    mc: &MonteCarloConfig,
) -> RoiReport {
    RoiReport {
        monte_carlo: Some(monte_carlo_simulate(inputs, config, mc)),
        ..evaluate(inputs, config)
    }
}
