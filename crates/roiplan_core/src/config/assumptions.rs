//! Model assumptions for the cash-flow builder
//!
//! Every constant the projection uses lives here so that alternate
//! assumption sets can be loaded from configuration and compared.

use serde::{Deserialize, Serialize};

use crate::model::PROJECTION_YEARS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelAssumptions {
    /// Hours per week that count as a full-time process role
    pub full_time_hours: f64,

    /// Readiness factor when both readiness scores are 1 and there is no sponsor
    pub readiness_floor: f64,
    /// Readiness factor gained per readiness point above 1 (per score)
    pub readiness_step: f64,
    pub sponsor_bonus: f64,
    pub readiness_min: f64,
    pub readiness_max: f64,

    /// Upper bound on the share of the team that can be reduced
    pub max_headcount_reduction: f64,
    /// Separation cost as a share of one person's annual cost
    pub severance_fraction: f64,
    /// Share of each year's total reduction made in that year; sums to 1
    pub headcount_phasing: [f64; PROJECTION_YEARS],

    /// Value captured from freed capacity that is not removed
    pub productivity_capture: f64,
    /// Capture rate when capacity is redeployed to higher-value work
    pub redeployment_capture: f64,
    /// Share of rework cost eliminated per unit of automation
    pub error_reduction_effectiveness: f64,
    /// Share of current tool spend retired by consolidation
    pub tool_consolidation_share: f64,

    /// Utilization of enhancement value per year
    pub adoption_ramp: [f64; PROJECTION_YEARS],
    /// Implementation months after which year 1 is fully dark
    pub go_live_horizon_months: f64,
    /// Lower bound on the share of year 1 the solution is live
    pub min_first_year_live: f64,

    /// Year-over-year escalation of ongoing cost; entry 0 is year 1
    pub ongoing_escalation: [f64; PROJECTION_YEARS],

    /// Extra budget overrun per data-readiness point below 5
    pub overrun_per_readiness_gap: f64,
    /// Productivity dip during rollout as a share of annual process labor
    pub transition_friction_rate: f64,
    pub training_cost_per_person: f64,
}

impl Default for ModelAssumptions {
    fn default() -> Self {
        Self {
            full_time_hours: 40.0,
            readiness_floor: 0.60,
            readiness_step: 0.05,
            sponsor_bonus: 0.05,
            readiness_min: 0.40,
            readiness_max: 1.0,
            max_headcount_reduction: 0.30,
            severance_fraction: 0.25,
            headcount_phasing: [0.0, 0.50, 0.30, 0.20, 0.0],
            productivity_capture: 0.40,
            redeployment_capture: 0.65,
            error_reduction_effectiveness: 0.60,
            tool_consolidation_share: 0.30,
            adoption_ramp: [0.55, 0.85, 1.0, 1.0, 1.0],
            go_live_horizon_months: 24.0,
            min_first_year_live: 0.25,
            ongoing_escalation: [0.0, 0.08, 0.06, 0.04, 0.03],
            overrun_per_readiness_gap: 0.03,
            transition_friction_rate: 0.05,
            training_cost_per_person: 1_500.0,
        }
    }
}
