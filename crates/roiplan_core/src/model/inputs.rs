//! Raw and normalized calculation inputs
//!
//! `RoiInputs` mirrors what a wizard collects: most numeric fields are
//! optional. `InputSet` is the fully resolved form every calculation consumes;
//! it is produced once by `NormalizeConfig::normalize` and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

use super::profile::OrgProfile;

/// Optional value pathways beyond plain labor savings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuePathways {
    /// Count savings from fewer errors and less rework
    pub error_reduction: bool,
    /// Count retirement of overlapping tool licenses
    pub tool_consolidation: bool,
    /// Freed capacity is redeployed to higher-value work
    pub capacity_redeployment: bool,
}

impl Default for ValuePathways {
    fn default() -> Self {
        Self {
            error_reduction: true,
            tool_consolidation: false,
            capacity_redeployment: false,
        }
    }
}

/// Wizard-style inputs. `None` means "derive from benchmarks".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInputs {
    pub profile: OrgProfile,

    /// People working on the process (required)
    pub team_size: Option<f64>,
    /// Average fully-loaded annual cost per person
    pub cost_per_person: Option<f64>,
    /// Hours per person per week spent on the process
    pub hours_per_week: Option<f64>,
    /// Share of work items needing rework (0-1)
    pub error_rate: Option<f64>,
    /// Annual spend on tools the automation could replace
    pub current_tool_spend: Option<f64>,
    /// Share of the process that can be automated (0-1)
    pub automation_potential: Option<f64>,

    /// 1 (resistant) to 5 (eager)
    pub change_readiness: Option<u8>,
    /// 1 (scattered, manual) to 5 (clean, integrated)
    pub data_readiness: Option<u8>,
    pub executive_sponsor: bool,

    /// Planned implementation spend (required)
    pub implementation_budget: Option<f64>,
    pub timeline_months: Option<u32>,
    pub ongoing_annual_cost: Option<f64>,
    pub discount_rate: Option<f64>,
    /// Share of freed capacity that becomes real cash through attrition or
    /// redeployment (0-1)
    pub cash_realization: Option<f64>,

    pub pathways: ValuePathways,
}

/// Fully resolved inputs for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSet {
    pub profile: OrgProfile,

    pub team_size: f64,
    pub cost_per_person: f64,
    pub hours_per_week: f64,
    pub error_rate: f64,
    pub current_tool_spend: f64,
    pub automation_potential: f64,

    pub change_readiness: u8,
    pub data_readiness: u8,
    pub executive_sponsor: bool,

    pub implementation_budget: f64,
    /// Benchmark cost-overrun multiplier applied to the budget
    pub implementation_overrun: f64,
    pub timeline_months: u32,
    pub ongoing_annual_cost: f64,
    pub discount_rate: f64,
    pub cash_realization: f64,
    /// Annual growth applied to labor-based savings
    pub wage_inflation: f64,

    pub pathways: ValuePathways,
}

impl InputSet {
    /// Annual labor cost of the whole team, ignoring process share
    #[must_use]
    pub fn team_labor_cost(&self) -> f64 {
        self.team_size * self.cost_per_person
    }
}
