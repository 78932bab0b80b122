//! Input normalization
//!
//! Turns wizard-style `RoiInputs` into a fully resolved `InputSet` in one
//! step. Each optional field has an explicit `DefaultRule`; the table lives in
//! `NormalizeConfig` so alternate defaulting policies can be configured and
//! tested without touching the calculation code.

use serde::{Deserialize, Serialize};

use crate::benchmarks::{Benchmark, BenchmarkSource};
use crate::error::{InputError, Result};
use crate::model::{InputSet, RoiInputs};
use crate::stats::clamp;

/// A benchmark column a default can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkField {
    AutomationPotential,
    AnnualCostPerPerson,
    WageInflation,
    ErrorRate,
    ImplementationOverrun,
    DiscountRate,
}

impl BenchmarkField {
    #[must_use]
    pub fn read(&self, benchmark: &Benchmark) -> f64 {
        match self {
            BenchmarkField::AutomationPotential => benchmark.automation_potential,
            BenchmarkField::AnnualCostPerPerson => benchmark.annual_cost_per_person,
            BenchmarkField::WageInflation => benchmark.wage_inflation,
            BenchmarkField::ErrorRate => benchmark.error_rate,
            BenchmarkField::ImplementationOverrun => benchmark.implementation_overrun,
            BenchmarkField::DiscountRate => benchmark.discount_rate,
        }
    }
}

/// How to derive a value the caller did not supply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DefaultRule {
    /// No default: a missing value is an error
    Required,
    Fixed { value: f64 },
    Benchmark { field: BenchmarkField },
    ScaledBenchmark { field: BenchmarkField, factor: f64 },
    /// A share of the (resolved) implementation budget
    ShareOfBudget { share: f64 },
}

/// Field -> default-derivation rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub team_size: DefaultRule,
    pub cost_per_person: DefaultRule,
    pub hours_per_week: DefaultRule,
    pub error_rate: DefaultRule,
    pub current_tool_spend: DefaultRule,
    pub automation_potential: DefaultRule,
    pub change_readiness: DefaultRule,
    pub data_readiness: DefaultRule,
    pub implementation_budget: DefaultRule,
    pub implementation_overrun: DefaultRule,
    pub timeline_months: DefaultRule,
    pub ongoing_annual_cost: DefaultRule,
    pub discount_rate: DefaultRule,
    pub cash_realization: DefaultRule,
    pub wage_inflation: DefaultRule,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        use BenchmarkField as B;

        Self {
            team_size: DefaultRule::Required,
            cost_per_person: DefaultRule::Benchmark {
                field: B::AnnualCostPerPerson,
            },
            hours_per_week: DefaultRule::Fixed { value: 40.0 },
            error_rate: DefaultRule::Benchmark { field: B::ErrorRate },
            current_tool_spend: DefaultRule::Fixed { value: 0.0 },
            automation_potential: DefaultRule::Benchmark {
                field: B::AutomationPotential,
            },
            change_readiness: DefaultRule::Fixed { value: 3.0 },
            data_readiness: DefaultRule::Fixed { value: 3.0 },
            implementation_budget: DefaultRule::Required,
            implementation_overrun: DefaultRule::Benchmark {
                field: B::ImplementationOverrun,
            },
            timeline_months: DefaultRule::Fixed { value: 6.0 },
            ongoing_annual_cost: DefaultRule::ShareOfBudget { share: 0.20 },
            discount_rate: DefaultRule::Benchmark {
                field: B::DiscountRate,
            },
            cash_realization: DefaultRule::Fixed { value: 0.50 },
            wage_inflation: DefaultRule::Benchmark {
                field: B::WageInflation,
            },
        }
    }
}

/// Shared context while resolving one input
struct Resolver<'a> {
    benchmark: &'a Benchmark,
    budget: f64,
}

impl Resolver<'_> {
    fn resolve(&self, field: &'static str, rule: DefaultRule, provided: Option<f64>) -> Result<f64> {
        let value = match provided {
            Some(v) => v,
            None => match rule {
                DefaultRule::Required => return Err(InputError::MissingField(field)),
                DefaultRule::Fixed { value } => value,
                DefaultRule::Benchmark { field } => field.read(self.benchmark),
                DefaultRule::ScaledBenchmark { field, factor } => {
                    field.read(self.benchmark) * factor
                }
                DefaultRule::ShareOfBudget { share } => self.budget * share,
            },
        };

        if !value.is_finite() {
            return Err(InputError::NonFinite { field, value });
        }
        Ok(value)
    }

    fn resolve_amount(
        &self,
        field: &'static str,
        rule: DefaultRule,
        provided: Option<f64>,
    ) -> Result<f64> {
        let value = self.resolve(field, rule, provided)?;
        if value < 0.0 {
            return Err(InputError::Negative { field, value });
        }
        Ok(value)
    }
}

fn readiness_score(value: f64) -> u8 {
    clamp(value.round(), 1.0, 5.0) as u8
}

impl NormalizeConfig {
    /// Resolve every field of `raw`, clamping soft domain violations.
    ///
    /// Fails only for inputs the engine cannot run without: a missing field
    /// whose rule is `Required`, a non-finite number, or a negative amount.
    pub fn normalize<B: BenchmarkSource + ?Sized>(
        &self,
        raw: &RoiInputs,
        benchmarks: &B,
    ) -> Result<InputSet> {
        let benchmark = benchmarks.lookup(&raw.profile);
        let mut resolver = Resolver {
            benchmark: &benchmark,
            budget: 0.0,
        };

        // Budget first: other rules may be expressed as a share of it
        let implementation_budget = resolver.resolve_amount(
            "implementation_budget",
            self.implementation_budget,
            raw.implementation_budget,
        )?;
        resolver.budget = implementation_budget;

        let team_size = resolver.resolve_amount("team_size", self.team_size, raw.team_size)?;
        let cost_per_person =
            resolver.resolve_amount("cost_per_person", self.cost_per_person, raw.cost_per_person)?;
        let hours_per_week =
            resolver.resolve_amount("hours_per_week", self.hours_per_week, raw.hours_per_week)?;
        let current_tool_spend = resolver.resolve_amount(
            "current_tool_spend",
            self.current_tool_spend,
            raw.current_tool_spend,
        )?;
        let ongoing_annual_cost = resolver.resolve_amount(
            "ongoing_annual_cost",
            self.ongoing_annual_cost,
            raw.ongoing_annual_cost,
        )?;

        let error_rate = resolver.resolve("error_rate", self.error_rate, raw.error_rate)?;
        let automation_potential = resolver.resolve(
            "automation_potential",
            self.automation_potential,
            raw.automation_potential,
        )?;
        let discount_rate = resolver.resolve("discount_rate", self.discount_rate, raw.discount_rate)?;
        let cash_realization =
            resolver.resolve("cash_realization", self.cash_realization, raw.cash_realization)?;
        let change_readiness = resolver.resolve(
            "change_readiness",
            self.change_readiness,
            raw.change_readiness.map(f64::from),
        )?;
        let data_readiness = resolver.resolve(
            "data_readiness",
            self.data_readiness,
            raw.data_readiness.map(f64::from),
        )?;
        let timeline_months = resolver.resolve(
            "timeline_months",
            self.timeline_months,
            raw.timeline_months.map(f64::from),
        )?;
        let implementation_overrun =
            resolver.resolve("implementation_overrun", self.implementation_overrun, None)?;
        let wage_inflation = resolver.resolve("wage_inflation", self.wage_inflation, None)?;

        Ok(InputSet {
            profile: raw.profile,
            team_size,
            cost_per_person,
            hours_per_week: clamp(hours_per_week, 0.0, 168.0),
            error_rate: clamp(error_rate, 0.01, 0.50),
            current_tool_spend,
            automation_potential: clamp(automation_potential, 0.10, 0.95),
            change_readiness: readiness_score(change_readiness),
            data_readiness: readiness_score(data_readiness),
            executive_sponsor: raw.executive_sponsor,
            implementation_budget,
            implementation_overrun: implementation_overrun.max(1.0),
            timeline_months: clamp(timeline_months.round(), 0.0, 60.0) as u32,
            ongoing_annual_cost,
            discount_rate: clamp(discount_rate, 0.0, 1.0),
            cash_realization: clamp(cash_realization, 0.0, 1.0),
            wage_inflation: clamp(wage_inflation, -0.10, 0.25),
            pathways: raw.pathways,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::StaticBenchmarks;
    use crate::model::{OrgProfile, ProcessType};

    fn minimal() -> RoiInputs {
        RoiInputs {
            team_size: Some(10.0),
            implementation_budget: Some(100_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_come_from_benchmarks() {
        let raw = RoiInputs {
            profile: OrgProfile {
                process_type: ProcessType::DataEntry,
                ..Default::default()
            },
            ..minimal()
        };
        let inputs = NormalizeConfig::default()
            .normalize(&raw, &StaticBenchmarks)
            .unwrap();
        let benchmark = StaticBenchmarks.lookup(&raw.profile);

        assert_eq!(inputs.automation_potential, benchmark.automation_potential);
        assert_eq!(inputs.cost_per_person, benchmark.annual_cost_per_person);
        assert_eq!(inputs.error_rate, benchmark.error_rate);
        assert_eq!(inputs.discount_rate, benchmark.discount_rate);
        assert_eq!(inputs.wage_inflation, benchmark.wage_inflation);
        assert_eq!(inputs.ongoing_annual_cost, 20_000.0);
        assert_eq!(inputs.hours_per_week, 40.0);
        assert_eq!(inputs.change_readiness, 3);
        assert_eq!(inputs.timeline_months, 6);
    }

    #[test]
    fn test_supplied_values_win() {
        let raw = RoiInputs {
            cost_per_person: Some(85_000.0),
            automation_potential: Some(0.55),
            ongoing_annual_cost: Some(50_000.0),
            discount_rate: Some(0.10),
            ..minimal()
        };
        let inputs = NormalizeConfig::default()
            .normalize(&raw, &StaticBenchmarks)
            .unwrap();
        assert_eq!(inputs.cost_per_person, 85_000.0);
        assert_eq!(inputs.automation_potential, 0.55);
        assert_eq!(inputs.ongoing_annual_cost, 50_000.0);
        assert_eq!(inputs.discount_rate, 0.10);
    }

    #[test]
    fn test_missing_required_fields_fail_loudly() {
        let raw = RoiInputs {
            implementation_budget: Some(1.0),
            ..Default::default()
        };
        assert_eq!(
            NormalizeConfig::default().normalize(&raw, &StaticBenchmarks),
            Err(InputError::MissingField("team_size"))
        );

        let raw = RoiInputs {
            team_size: Some(5.0),
            ..Default::default()
        };
        assert_eq!(
            NormalizeConfig::default().normalize(&raw, &StaticBenchmarks),
            Err(InputError::MissingField("implementation_budget"))
        );
    }

    #[test]
    fn test_non_finite_and_negative_rejected() {
        let raw = RoiInputs {
            cost_per_person: Some(f64::NAN),
            ..minimal()
        };
        assert!(matches!(
            NormalizeConfig::default().normalize(&raw, &StaticBenchmarks),
            Err(InputError::NonFinite {
                field: "cost_per_person",
                ..
            })
        ));

        let raw = RoiInputs {
            team_size: Some(-3.0),
            ..minimal()
        };
        assert!(matches!(
            NormalizeConfig::default().normalize(&raw, &StaticBenchmarks),
            Err(InputError::Negative {
                field: "team_size",
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let raw = RoiInputs {
            change_readiness: Some(9),
            data_readiness: Some(0),
            automation_potential: Some(1.4),
            error_rate: Some(0.9),
            cash_realization: Some(-0.2),
            ..minimal()
        };
        let inputs = NormalizeConfig::default()
            .normalize(&raw, &StaticBenchmarks)
            .unwrap();
        assert_eq!(inputs.change_readiness, 5);
        assert_eq!(inputs.data_readiness, 1);
        assert_eq!(inputs.automation_potential, 0.95);
        assert_eq!(inputs.error_rate, 0.50);
        assert_eq!(inputs.cash_realization, 0.0);
    }

    #[test]
    fn test_error_rate_floor_matches_sampler_domain() {
        let raw = RoiInputs {
            error_rate: Some(0.0),
            ..minimal()
        };
        let inputs = NormalizeConfig::default()
            .normalize(&raw, &StaticBenchmarks)
            .unwrap();
        assert_eq!(inputs.error_rate, 0.01);
    }

    #[test]
    fn test_alternate_rule_table() {
        let config = NormalizeConfig {
            ongoing_annual_cost: DefaultRule::Fixed { value: 12_000.0 },
            team_size: DefaultRule::Fixed { value: 4.0 },
            cost_per_person: DefaultRule::ScaledBenchmark {
                field: BenchmarkField::AnnualCostPerPerson,
                factor: 2.0,
            },
            ..Default::default()
        };
        let raw = RoiInputs {
            implementation_budget: Some(50_000.0),
            ..Default::default()
        };
        let inputs = config.normalize(&raw, &StaticBenchmarks).unwrap();
        let benchmark = StaticBenchmarks.lookup(&raw.profile);
        assert_eq!(inputs.team_size, 4.0);
        assert_eq!(inputs.ongoing_annual_cost, 12_000.0);
        assert_eq!(inputs.cost_per_person, benchmark.annual_cost_per_person * 2.0);
    }
}
