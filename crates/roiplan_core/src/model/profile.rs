//! Organization profile categories
//!
//! These keys select rows from the benchmark tables. They carry no numbers of
//! their own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    FinancialServices,
    Healthcare,
    Manufacturing,
    Retail,
    Technology,
    ProfessionalServices,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessType {
    DataEntry,
    InvoiceProcessing,
    CustomerSupport,
    Reporting,
    Compliance,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    /// Fewer than 50 employees
    Small,
    /// 50 to 999 employees
    #[default]
    MidMarket,
    /// 1,000 to 9,999 employees
    Large,
    /// 10,000 employees or more
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamLocation {
    #[default]
    Onshore,
    Nearshore,
    Offshore,
}

/// The four benchmark lookup keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OrgProfile {
    #[serde(default)]
    pub industry: Industry,
    #[serde(default)]
    pub process_type: ProcessType,
    #[serde(default)]
    pub company_size: CompanySize,
    #[serde(default)]
    pub team_location: TeamLocation,
}
