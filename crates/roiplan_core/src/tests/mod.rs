//! Integration tests for the roiplan engine
//!
//! Tests are organized by topic:
//! - `end_to_end` - Raw inputs through normalization to a full report
//! - `properties` - Properties that hold for any valid input set
//!
//! `reference_inputs` is the shared fixture used by the per-module tests.

mod properties;

use crate::model::{
    CompanySize, Industry, InputSet, OrgProfile, ProcessType, TeamLocation, ValuePathways,
};

/// Mid-market financial-services team of 20 with a 200k budget
pub(crate) fn reference_inputs() -> InputSet {
    InputSet {
        profile: OrgProfile {
            industry: Industry::FinancialServices,
            process_type: ProcessType::Other,
            company_size: CompanySize::MidMarket,
            team_location: TeamLocation::Onshore,
        },
        team_size: 20.0,
        cost_per_person: 85_000.0,
        hours_per_week: 40.0,
        error_rate: 0.15,
        current_tool_spend: 0.0,
        automation_potential: 0.55,
        change_readiness: 3,
        data_readiness: 3,
        executive_sponsor: false,
        implementation_budget: 200_000.0,
        implementation_overrun: 1.15,
        timeline_months: 6,
        ongoing_annual_cost: 50_000.0,
        discount_rate: 0.10,
        cash_realization: 0.5,
        wage_inflation: 0.03,
        pathways: ValuePathways::default(),
    }
}
