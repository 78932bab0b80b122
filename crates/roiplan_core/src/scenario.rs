//! Scenario engine
//!
//! Runs the cash-flow builder once per scenario table entry and derives NPV,
//! IRR, ROIC and payback for each. Empirical caps apply only to entries that
//! request them (the base scenario by default).

use tracing::{debug, warn};

use crate::cash_flows::build_cash_flows;
use crate::config::{EngineConfig, ScenarioSpec};
use crate::metrics::{irr, npv, payback_months, roic};
use crate::model::{CappedValue, InputSet, IrrOutcome, ScenarioKind, ScenarioResult};

/// Scenario results plus probability-weighted aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSet {
    /// In scenario-table order
    pub results: Vec<ScenarioResult>,
    pub expected_npv: f64,
    pub expected_roic: f64,
}

/// Build and score one scenario without logging
///
/// Monte Carlo iterations and sensitivity rows call this directly;
/// `run_scenario` adds logging on top.
#[must_use]
pub fn score_scenario(inputs: &InputSet, spec: &ScenarioSpec, config: &EngineConfig) -> ScenarioResult {
    let projection = build_cash_flows(inputs, spec.multiplier, &config.assumptions);
    let flows = projection.net_flows();
    let upfront = projection.upfront_investment;
    let total_capital = projection.total_capital_deployed();

    let npv = npv(&flows, upfront, inputs.discount_rate);
    let irr = irr(&flows, upfront, &config.irr);
    let roic_raw = roic(&flows, upfront, total_capital);

    let (irr_reported, roic) = if spec.apply_caps {
        (
            irr.value().map(|r| CappedValue::apply(r, config.caps.irr)),
            CappedValue::apply(roic_raw, config.caps.roic),
        )
    } else {
        (
            irr.value().map(CappedValue::uncapped),
            CappedValue::uncapped(roic_raw),
        )
    };

    ScenarioResult {
        kind: spec.kind,
        multiplier: spec.multiplier,
        weight: spec.weight,
        years: projection.years,
        upfront_investment: upfront,
        total_capital_deployed: total_capital,
        npv,
        irr,
        irr_reported,
        roic,
        payback_months: payback_months(&flows, upfront),
    }
}

/// Evaluate one scenario table entry
#[must_use]
pub fn run_scenario(inputs: &InputSet, spec: &ScenarioSpec, config: &EngineConfig) -> ScenarioResult {
    let result = score_scenario(inputs, spec, config);

    if let (ScenarioKind::Base, IrrOutcome::NotConverged { last_rate }) = (spec.kind, result.irr) {
        warn!(last_rate, "IRR did not converge for base scenario");
    }

    debug!(
        scenario = spec.kind.label(),
        npv = result.npv,
        roic = result.roic.value,
        payback_months = result.payback_months,
        "Scenario evaluated"
    );

    result
}

/// Evaluate every scenario in the table
///
/// Expected values are weight-normalized; both are 0 when the weights sum
/// to 0.
#[must_use]
pub fn run_scenarios(inputs: &InputSet, config: &EngineConfig) -> ScenarioSet {
    let results: Vec<ScenarioResult> = config
        .scenarios
        .iter()
        .map(|spec| run_scenario(inputs, spec, config))
        .collect();

    let total_weight: f64 = results.iter().map(|r| r.weight).sum();
    let (expected_npv, expected_roic) = if total_weight > 0.0 {
        (
            results.iter().map(|r| r.weight * r.npv).sum::<f64>() / total_weight,
            results.iter().map(|r| r.weight * r.roic.value).sum::<f64>() / total_weight,
        )
    } else {
        (0.0, 0.0)
    };

    ScenarioSet {
        results,
        expected_npv,
        expected_roic,
    }
}

/// The base entry of a result list, if present
#[must_use]
pub fn base_scenario(results: &[ScenarioResult]) -> Option<&ScenarioResult> {
    results.iter().find(|r| r.kind == ScenarioKind::Base)
}
