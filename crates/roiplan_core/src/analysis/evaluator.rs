//! Sensitivity evaluator - rebuilds the base projection once per bound.

use crate::config::EngineConfig;
use crate::model::{InputSet, SensitivityRow};
use crate::scenario::score_scenario;

use super::SensitivitySpec;

/// NPV of the base scenario for one input set
fn base_npv(inputs: &InputSet, config: &EngineConfig) -> f64 {
    score_scenario(inputs, &config.scenarios.base(), config).npv
}

/// Evaluate a single sensitivity row against a precomputed base NPV
#[must_use]
pub fn evaluate_spec(
    inputs: &InputSet,
    spec: &SensitivitySpec,
    config: &EngineConfig,
    base: f64,
) -> SensitivityRow {
    let (low_value, high_value) = spec.bounds(inputs);
    let (low_label, high_label) = spec.perturbation.labels();

    let npv_low = base_npv(&spec.variable.with_value(inputs, low_value), config);
    let npv_high = base_npv(&spec.variable.with_value(inputs, high_value), config);

    SensitivityRow {
        variable: spec.variable,
        label: spec.variable.label().to_string(),
        base_value: spec.variable.read(inputs),
        low_value,
        high_value,
        low_label,
        high_label,
        npv_low,
        npv_high,
        base_npv: base,
    }
}

/// Run every configured sensitivity row, in configuration order
#[must_use]
pub fn run_sensitivity(inputs: &InputSet, config: &EngineConfig) -> Vec<SensitivityRow> {
    let base = base_npv(inputs, config);

    config
        .sensitivity
        .iter()
        .map(|spec| evaluate_spec(inputs, spec, config, base))
        .collect()
}

/// Rows sorted by NPV spread, widest first. Ties keep their original order.
#[must_use]
pub fn tornado_order(rows: &[SensitivityRow]) -> Vec<&SensitivityRow> {
    let mut view: Vec<&SensitivityRow> = rows.iter().collect();
    view.sort_by(|a, b| b.spread().total_cmp(&a.spread()));
    view
}
