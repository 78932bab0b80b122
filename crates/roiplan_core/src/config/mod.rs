//! Engine configuration
//!
//! The main configuration type is `EngineConfig`, which bundles every table
//! and constant the calculators read. All parts deserialize with defaults, so
//! a configuration file only needs to name what it overrides:
//!
//! ```yaml
//! scenarios:
//!   - { kind: conservative, multiplier: 0.6, weight: 0.3, apply_caps: false }
//!   - { kind: base, multiplier: 1.0, weight: 0.5, apply_caps: true }
//!   - { kind: optimistic, multiplier: 1.3, weight: 0.2, apply_caps: false }
//! caps:
//!   roic: { min: -1.0, max: 3.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::SensitivitySpec;

pub mod assumptions;
pub mod normalize;
pub mod scenarios;

pub use assumptions::ModelAssumptions;
pub use normalize::{BenchmarkField, DefaultRule, NormalizeConfig};
pub use scenarios::{CapRange, MetricCaps, ScenarioSpec, ScenarioTable};

/// Parameters for the damped Newton-Raphson IRR solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrSolverConfig {
    pub initial_guess: f64,
    pub max_iterations: usize,
    /// Converged once the rate moves less than this in one step
    pub tolerance: f64,
    /// Largest rate change allowed per iteration
    pub max_step: f64,
    /// Converged rates outside this open interval are rejected
    pub plausible_min: f64,
    pub plausible_max: f64,
}

impl Default for IrrSolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.10,
            max_iterations: 200,
            tolerance: 1e-4,
            max_step: 1.0,
            plausible_min: -1.0,
            plausible_max: 10.0,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub assumptions: ModelAssumptions,
    pub scenarios: ScenarioTable,
    pub caps: MetricCaps,
    pub irr: IrrSolverConfig,
    /// Variables perturbed by the sensitivity analyzer, in output order
    pub sensitivity: Vec<SensitivitySpec>,
    pub normalize: NormalizeConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            assumptions: ModelAssumptions::default(),
            scenarios: ScenarioTable::default(),
            caps: MetricCaps::default(),
            irr: IrrSolverConfig::default(),
            sensitivity: SensitivitySpec::defaults(),
            normalize: NormalizeConfig::default(),
        }
    }
}
