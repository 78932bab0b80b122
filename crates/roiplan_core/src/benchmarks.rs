//! Industry benchmark lookup
//!
//! The engine reads benchmarks through `BenchmarkSource` so that larger,
//! externally maintained tables can be plugged in. `StaticBenchmarks` is a
//! compact built-in table covering every profile key.

use serde::{Deserialize, Serialize};

use crate::model::{CompanySize, Industry, OrgProfile, ProcessType, TeamLocation};

/// Benchmark values for one organization profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    /// Share of the process that can typically be automated (0-1)
    pub automation_potential: f64,
    /// Fully-loaded annual cost per person
    pub annual_cost_per_person: f64,
    /// Annual wage growth
    pub wage_inflation: f64,
    /// Typical rework rate (0-1)
    pub error_rate: f64,
    /// Typical budget overrun multiplier (1.0 = on budget)
    pub implementation_overrun: f64,
    /// Hurdle rate for discounting
    pub discount_rate: f64,
}

/// Read-only benchmark provider
pub trait BenchmarkSource {
    fn lookup(&self, profile: &OrgProfile) -> Benchmark;
}

/// Built-in benchmark table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBenchmarks;

impl StaticBenchmarks {
    fn process_automation(process: ProcessType) -> f64 {
        match process {
            ProcessType::DataEntry => 0.70,
            ProcessType::InvoiceProcessing => 0.65,
            ProcessType::Reporting => 0.60,
            ProcessType::CustomerSupport => 0.45,
            ProcessType::Compliance => 0.40,
            ProcessType::Other => 0.50,
        }
    }

    fn industry_automation_adjustment(industry: Industry) -> f64 {
        match industry {
            Industry::FinancialServices | Industry::Technology => 0.05,
            Industry::Healthcare => -0.05,
            Industry::Manufacturing
            | Industry::Retail
            | Industry::ProfessionalServices
            | Industry::Other => 0.0,
        }
    }

    fn industry_salary(industry: Industry) -> f64 {
        match industry {
            Industry::FinancialServices => 95_000.0,
            Industry::Healthcare => 75_000.0,
            Industry::Manufacturing => 65_000.0,
            Industry::Retail => 50_000.0,
            Industry::Technology => 110_000.0,
            Industry::ProfessionalServices => 90_000.0,
            Industry::Other => 70_000.0,
        }
    }

    fn location_cost_factor(location: TeamLocation) -> f64 {
        match location {
            TeamLocation::Onshore => 1.0,
            TeamLocation::Nearshore => 0.60,
            TeamLocation::Offshore => 0.35,
        }
    }

    fn location_wage_inflation(location: TeamLocation) -> f64 {
        match location {
            TeamLocation::Onshore => 0.03,
            TeamLocation::Nearshore => 0.05,
            TeamLocation::Offshore => 0.07,
        }
    }

    /// Benefits and overhead loading on top of base salary
    fn size_loading(size: CompanySize) -> f64 {
        match size {
            CompanySize::Small => 1.20,
            CompanySize::MidMarket => 1.25,
            CompanySize::Large => 1.30,
            CompanySize::Enterprise => 1.35,
        }
    }

    fn size_overrun(size: CompanySize) -> f64 {
        match size {
            CompanySize::Small => 1.10,
            CompanySize::MidMarket => 1.15,
            CompanySize::Large => 1.25,
            CompanySize::Enterprise => 1.35,
        }
    }

    fn size_discount_rate(size: CompanySize) -> f64 {
        match size {
            CompanySize::Small => 0.12,
            CompanySize::MidMarket => 0.10,
            CompanySize::Large => 0.09,
            CompanySize::Enterprise => 0.08,
        }
    }

    fn process_error_rate(process: ProcessType) -> f64 {
        match process {
            ProcessType::DataEntry => 0.08,
            ProcessType::InvoiceProcessing => 0.06,
            ProcessType::CustomerSupport | ProcessType::Other => 0.05,
            ProcessType::Reporting => 0.04,
            ProcessType::Compliance => 0.03,
        }
    }
}

impl BenchmarkSource for StaticBenchmarks {
    fn lookup(&self, profile: &OrgProfile) -> Benchmark {
        let automation = Self::process_automation(profile.process_type)
            + Self::industry_automation_adjustment(profile.industry);

        Benchmark {
            automation_potential: automation.clamp(0.10, 0.95),
            annual_cost_per_person: Self::industry_salary(profile.industry)
                * Self::location_cost_factor(profile.team_location)
                * Self::size_loading(profile.company_size),
            wage_inflation: Self::location_wage_inflation(profile.team_location),
            error_rate: Self::process_error_rate(profile.process_type),
            implementation_overrun: Self::size_overrun(profile.company_size),
            discount_rate: Self::size_discount_rate(profile.company_size),
        }
    }
}
