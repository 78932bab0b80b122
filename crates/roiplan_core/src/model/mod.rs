mod inputs;
mod profile;
mod results;

pub use inputs::{InputSet, RoiInputs, ValuePathways};
pub use profile::{CompanySize, Industry, OrgProfile, ProcessType, TeamLocation};
pub use results::{
    CappedValue, CashFlowProjection, DistributionStats, HORIZON_MONTHS, IrrOutcome,
    MonteCarloConfig, MonteCarloResult, PAYBACK_NEVER, PROJECTION_YEARS, RoiReport,
    ScenarioKind, ScenarioResult, SensitivityRow, TailRisk, YearCashFlow,
};
