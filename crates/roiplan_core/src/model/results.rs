//! Calculation results
//!
//! Contains every record produced by the engine. Presentation code reads these
//! directly; nothing here needs to be re-derived downstream.

use serde::{Deserialize, Serialize};

use crate::config::CapRange;
use crate::stats::clamp;

/// Number of operating years in a projection
pub const PROJECTION_YEARS: usize = 5;

/// Modeled horizon in months
pub const HORIZON_MONTHS: u32 = PROJECTION_YEARS as u32 * 12;

/// Payback sentinel meaning "no break-even within the horizon"
pub const PAYBACK_NEVER: u32 = HORIZON_MONTHS + 1;

/// One fiscal year of the projection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YearCashFlow {
    /// 1-based fiscal year
    pub year: u32,
    /// Productivity, quality and tooling value that needs no headcount change
    pub enhancement_savings: f64,
    /// Labor cost removed through phased headcount reduction
    pub headcount_savings: f64,
    pub gross_savings: f64,
    /// Separation cost for reductions made this year
    pub separation_cost: f64,
    pub ongoing_cost: f64,
    pub net_cash_flow: f64,
    /// Running net position including the upfront investment
    pub cumulative_net: f64,
}

/// Output of the cash-flow builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    pub years: [YearCashFlow; PROJECTION_YEARS],
    /// Implementation, transition and one-time costs paid before year 1
    pub upfront_investment: f64,
    /// Sum of phased separation costs (already netted into the years)
    pub total_separation_cost: f64,
}

impl CashFlowProjection {
    /// Net cash flow per year, in order
    #[must_use]
    pub fn net_flows(&self) -> [f64; PROJECTION_YEARS] {
        self.years.map(|y| y.net_cash_flow)
    }

    /// Upfront investment plus all separation costs
    #[must_use]
    pub fn total_capital_deployed(&self) -> f64 {
        self.upfront_investment + self.total_separation_cost
    }
}

/// A metric with an optional empirical clamp applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CappedValue {
    /// Value as computed
    pub raw: f64,
    /// Value to report
    pub value: f64,
    /// True when `value` differs from `raw` because of the clamp
    pub capped: bool,
}

impl CappedValue {
    #[must_use]
    pub fn uncapped(raw: f64) -> Self {
        Self {
            raw,
            value: raw,
            capped: false,
        }
    }

    /// Clamp `raw` into `range`, remembering whether the clamp changed it
    #[must_use]
    pub fn apply(raw: f64, range: CapRange) -> Self {
        let value = clamp(raw, range.min, range.max);
        Self {
            raw,
            value,
            capped: value != raw,
        }
    }
}

/// Result of the IRR solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IrrOutcome {
    Converged { rate: f64 },
    /// Cash flows never change sign, so there is no real root
    NoSignChange,
    /// Iteration budget exhausted before the step fell below tolerance
    NotConverged { last_rate: f64 },
    /// Converged outside the credible range
    Implausible { rate: f64 },
}

impl IrrOutcome {
    /// The rate, only when the solver converged to a credible root
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            IrrOutcome::Converged { rate } => Some(*rate),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.value().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Conservative,
    Base,
    Optimistic,
}

impl ScenarioKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "Conservative",
            ScenarioKind::Base => "Base",
            ScenarioKind::Optimistic => "Optimistic",
        }
    }
}

/// One named scenario's projection and metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub kind: ScenarioKind,
    pub multiplier: f64,
    pub weight: f64,
    pub years: [YearCashFlow; PROJECTION_YEARS],
    pub upfront_investment: f64,
    pub total_capital_deployed: f64,
    pub npv: f64,
    /// Raw solver outcome
    pub irr: IrrOutcome,
    /// Reported IRR; `None` when the solver found no credible root
    pub irr_reported: Option<CappedValue>,
    pub roic: CappedValue,
    /// Months to break even, or `PAYBACK_NEVER`
    pub payback_months: u32,
}

impl ScenarioResult {
    #[must_use]
    pub fn irr_capped(&self) -> bool {
        self.irr_reported.is_some_and(|v| v.capped)
    }

    #[must_use]
    pub fn roic_capped(&self) -> bool {
        self.roic.capped
    }

    #[must_use]
    pub fn pays_back(&self) -> bool {
        self.payback_months <= HORIZON_MONTHS
    }
}

/// NPV impact of moving one input to a low and a high bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    pub variable: crate::analysis::SensitivityVariable,
    pub label: String,
    pub base_value: f64,
    pub low_value: f64,
    pub high_value: f64,
    pub low_label: String,
    pub high_label: String,
    pub npv_low: f64,
    pub npv_high: f64,
    pub base_npv: f64,
}

impl SensitivityRow {
    /// Absolute NPV swing between the two bounds
    #[must_use]
    pub fn spread(&self) -> f64 {
        (self.npv_high - self.npv_low).abs()
    }
}

/// Percentile summary of one Monte Carlo metric
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributionStats {
    pub count: usize,
    pub p5: f64,
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl DistributionStats {
    /// Summarize an ascending slice
    #[must_use]
    pub fn from_sorted(sorted: &[f64]) -> Self {
        use crate::stats::{mean, percentile, std_dev};

        Self {
            count: sorted.len(),
            p5: percentile(sorted, 5.0),
            p10: percentile(sorted, 10.0),
            p25: percentile(sorted, 25.0),
            p50: percentile(sorted, 50.0),
            p75: percentile(sorted, 75.0),
            p90: percentile(sorted, 90.0),
            mean: mean(sorted),
            std_dev: std_dev(sorted),
        }
    }
}

/// Probabilities of extreme adverse outcomes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TailRisk {
    /// P(NPV < -50% of the median upfront investment)
    pub prob_capital_loss_50: f64,
    /// P(payback later than the horizon)
    pub prob_payback_beyond_horizon: f64,
}

/// Configuration for a Monte Carlo run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    pub iterations: usize,
    /// Master seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            seed: None,
        }
    }
}

/// Aggregated Monte Carlo distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    pub iterations: usize,
    pub seed: u64,
    pub npv: DistributionStats,
    /// Only iterations where IRR converged contribute
    pub irr: DistributionStats,
    pub payback_months: DistributionStats,
    pub roic: DistributionStats,
    pub probability_positive_npv: f64,
    pub tail_risk: TailRisk,
    pub median_upfront_investment: f64,
    /// Ascending NPV samples for histogram rendering
    pub npv_samples: Vec<f64>,
}

/// Everything a report renderer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    pub inputs: super::InputSet,
    /// In scenario-table order
    pub scenarios: Vec<ScenarioResult>,
    pub expected_npv: f64,
    pub expected_roic: f64,
    pub sensitivity: Vec<SensitivityRow>,
    pub upfront_investment: f64,
    pub total_investment: f64,
    pub monte_carlo: Option<MonteCarloResult>,
}

impl RoiReport {
    /// The base scenario, or the first scenario if the table has no base entry
    ///
    /// # Panics
    /// Panics if the report holds no scenarios (an empty scenario table).
    #[must_use]
    pub fn base(&self) -> &ScenarioResult {
        self.scenario(ScenarioKind::Base)
            .unwrap_or_else(|| &self.scenarios[0])
    }

    #[must_use]
    pub fn scenario(&self, kind: ScenarioKind) -> Option<&ScenarioResult> {
        self.scenarios.iter().find(|s| s.kind == kind)
    }
}
