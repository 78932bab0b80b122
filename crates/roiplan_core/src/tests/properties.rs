//! Property tests over randomly generated input sets

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::reference_inputs;
use crate::cash_flows::build_cash_flows;
use crate::config::{EngineConfig, IrrSolverConfig, ModelAssumptions};
use crate::metrics::irr;
use crate::model::{InputSet, IrrOutcome, MonteCarloConfig};
use crate::sampling::sample_inputs;
use crate::simulation::monte_carlo_simulate;

prop_compose! {
    fn valid_inputs()(
        team_size in 1.0f64..200.0,
        cost_per_person in 20_000.0f64..200_000.0,
        hours_per_week in 5.0f64..40.0,
        error_rate in 0.01f64..0.5,
        automation_potential in 0.10f64..0.95,
        change_readiness in 1u8..=5,
        data_readiness in 1u8..=5,
        implementation_budget in 10_000.0f64..2_000_000.0,
        timeline_months in 1u32..=24,
        ongoing_annual_cost in 0.0f64..500_000.0,
        discount_rate in 0.0f64..0.3,
        cash_realization in 0.0f64..1.0,
    ) -> InputSet {
        InputSet {
            team_size,
            cost_per_person,
            hours_per_week,
            error_rate,
            automation_potential,
            change_readiness,
            data_readiness,
            implementation_budget,
            timeline_months,
            ongoing_annual_cost,
            discount_rate,
            cash_realization,
            ..reference_inputs()
        }
    }
}

#[test]
fn test_sampled_domains_over_many_draws() {
    let base = reference_inputs();
    let mut rng = SmallRng::seed_from_u64(1_000);
    for _ in 0..1_000 {
        let s = sample_inputs(&mut rng, &base);
        assert!((0.10..=0.95).contains(&s.automation_potential));
        assert!((0.01..=0.50).contains(&s.error_rate));
    }
}

#[test]
fn test_irr_undefined_for_same_sign_flows() {
    let config = IrrSolverConfig::default();
    assert_eq!(irr(&[100.0; 5], 0.0, &config), IrrOutcome::NoSignChange);
    assert!(irr(&[-5.0; 5], 10.0, &config).value().is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_cash_flows_are_deterministic(inputs in valid_inputs(), multiplier in 0.5f64..1.5) {
        let a = ModelAssumptions::default();
        let first = build_cash_flows(&inputs, multiplier, &a);
        let second = build_cash_flows(&inputs, multiplier, &a);
        for (x, y) in first.years.iter().zip(&second.years) {
            prop_assert_eq!(x.net_cash_flow.to_bits(), y.net_cash_flow.to_bits());
            prop_assert_eq!(x.gross_savings.to_bits(), y.gross_savings.to_bits());
        }
    }

    #[test]
    fn prop_monte_carlo_percentiles_ordered(inputs in valid_inputs(), seed in any::<u64>()) {
        let result = monte_carlo_simulate(
            &inputs,
            &EngineConfig::default(),
            &MonteCarloConfig { iterations: 30, seed: Some(seed) },
        );
        prop_assert!(result.npv.p10 <= result.npv.p50);
        prop_assert!(result.npv.p50 <= result.npv.p90);
        prop_assert!((0.0..=1.0).contains(&result.probability_positive_npv));
        prop_assert!((0.0..=1.0).contains(&result.tail_risk.prob_capital_loss_50));
        prop_assert_eq!(result.npv_samples.len(), 30);
    }

    #[test]
    fn prop_scenario_metrics_never_nan(inputs in valid_inputs()) {
        let report = crate::evaluate::evaluate(&inputs, &EngineConfig::default());
        for s in &report.scenarios {
            prop_assert!(s.npv.is_finite());
            prop_assert!(!s.roic.value.is_nan());
            if let Some(rate) = s.irr.value() {
                prop_assert!(rate.is_finite());
            }
        }
    }
}
