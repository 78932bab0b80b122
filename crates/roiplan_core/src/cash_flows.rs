//! Cash-flow builder
//!
//! Builds the 5-year projection for one scenario multiplier. Savings come in
//! two parts: enhancement value (productivity, quality, tooling) that ramps up
//! with adoption, and headcount value that phases in as the team shrinks.
//! Separation costs follow the same phasing, so they are spread over the years
//! rather than paid upfront.
//!
//! The builder is pure: the same `InputSet`, multiplier and assumptions always
//! produce bit-identical output.

use crate::config::ModelAssumptions;
use crate::model::{CashFlowProjection, InputSet, PROJECTION_YEARS, YearCashFlow};
use crate::stats::clamp;

/// Intermediate annual quantities shared by every year of a projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsBasis {
    /// Annual labor cost spent on the process
    pub process_labor: f64,
    pub readiness_factor: f64,
    /// Capped share of the team removed once phasing completes
    pub max_reduction: f64,
    /// Full-year enhancement value before ramp, growth and multiplier
    pub enhancement_base: f64,
    /// Share of year 1 the solution is live
    pub first_year_live: f64,
}

impl SavingsBasis {
    #[must_use]
    pub fn new(inputs: &InputSet, assumptions: &ModelAssumptions) -> Self {
        let process_share = if assumptions.full_time_hours > 0.0 {
            clamp(inputs.hours_per_week / assumptions.full_time_hours, 0.0, 1.0)
        } else {
            0.0
        };
        let process_labor = inputs.team_labor_cost() * process_share;

        let readiness_points = f64::from(inputs.change_readiness.saturating_sub(1))
            + f64::from(inputs.data_readiness.saturating_sub(1));
        let sponsor = if inputs.executive_sponsor {
            assumptions.sponsor_bonus
        } else {
            0.0
        };
        let readiness_factor = clamp(
            assumptions.readiness_floor + assumptions.readiness_step * readiness_points + sponsor,
            assumptions.readiness_min,
            assumptions.readiness_max,
        );

        let automatable = process_labor * inputs.automation_potential * readiness_factor;
        let max_reduction = (inputs.automation_potential
            * readiness_factor
            * inputs.cash_realization)
            .min(assumptions.max_headcount_reduction)
            .max(0.0);
        let headcount_pool = max_reduction * inputs.team_labor_cost();

        let capture = if inputs.pathways.capacity_redeployment {
            assumptions.redeployment_capture
        } else {
            assumptions.productivity_capture
        };
        let mut enhancement_base = (automatable - headcount_pool).max(0.0) * capture;
        if inputs.pathways.error_reduction {
            enhancement_base += process_labor
                * inputs.error_rate
                * inputs.automation_potential
                * assumptions.error_reduction_effectiveness;
        }
        if inputs.pathways.tool_consolidation {
            enhancement_base += inputs.current_tool_spend * assumptions.tool_consolidation_share;
        }

        let first_year_live = if assumptions.go_live_horizon_months > 0.0 {
            clamp(
                1.0 - f64::from(inputs.timeline_months) / assumptions.go_live_horizon_months,
                assumptions.min_first_year_live,
                1.0,
            )
        } else {
            1.0
        };

        Self {
            process_labor,
            readiness_factor,
            max_reduction,
            enhancement_base,
            first_year_live,
        }
    }
}

/// Implementation, transition and one-time costs paid before year 1.
///
/// Separation costs are deliberately absent; they are phased into the years.
#[must_use]
pub fn upfront_investment(
    inputs: &InputSet,
    basis: &SavingsBasis,
    assumptions: &ModelAssumptions,
) -> f64 {
    let readiness_gap = f64::from(5u8.saturating_sub(inputs.data_readiness));
    let overrun = inputs.implementation_overrun + readiness_gap * assumptions.overrun_per_readiness_gap;
    let implementation = inputs.implementation_budget * overrun;

    let rollout_share = f64::from(inputs.timeline_months.min(12)) / 12.0;
    let transition = basis.process_labor * assumptions.transition_friction_rate * rollout_share;

    let one_time = inputs.team_size * assumptions.training_cost_per_person;

    implementation + transition + one_time
}

/// Build the 5-year projection for one scenario multiplier
#[must_use]
pub fn build_cash_flows(
    inputs: &InputSet,
    multiplier: f64,
    assumptions: &ModelAssumptions,
) -> CashFlowProjection {
    let basis = SavingsBasis::new(inputs, assumptions);
    let upfront = upfront_investment(inputs, &basis, assumptions);
    let labor = inputs.team_labor_cost();

    let mut years = [YearCashFlow::default(); PROJECTION_YEARS];
    let mut phased = 0.0;
    let mut ongoing = inputs.ongoing_annual_cost;
    let mut cumulative = -upfront;
    let mut total_separation = 0.0;

    for (t, year) in years.iter_mut().enumerate() {
        let growth = (1.0 + inputs.wage_inflation).powi(t as i32);

        let mut ramp = assumptions.adoption_ramp[t];
        if t == 0 {
            ramp *= basis.first_year_live;
        }
        let enhancement = basis.enhancement_base * ramp * growth * multiplier;

        let reduction_this_year = basis.max_reduction * assumptions.headcount_phasing[t];
        phased += reduction_this_year;
        let headcount = phased * labor * growth * multiplier;
        let separation = reduction_this_year * labor * assumptions.severance_fraction;
        total_separation += separation;

        ongoing *= 1.0 + assumptions.ongoing_escalation[t];

        let gross = enhancement + headcount;
        let net = gross - separation - ongoing;
        cumulative += net;

        *year = YearCashFlow {
            year: t as u32 + 1,
            enhancement_savings: enhancement,
            headcount_savings: headcount,
            gross_savings: gross,
            separation_cost: separation,
            ongoing_cost: ongoing,
            net_cash_flow: net,
            cumulative_net: cumulative,
        };
    }

    CashFlowProjection {
        years,
        upfront_investment: upfront,
        total_separation_cost: total_separation,
    }
}
