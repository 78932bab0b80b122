//! Automation ROI modeling and risk simulation library
//!
//! This crate estimates the financial return of an automation investment.
//! It supports:
//! - Normalizing wizard-style inputs against industry benchmark tables
//! - A 5-year discounted cash-flow projection with phased headcount changes
//! - NPV, IRR, payback and ROIC with empirical caps on the base case
//! - Conservative / base / optimistic scenarios with weighted aggregation
//! - One-at-a-time sensitivity analysis for tornado charts
//! - Correlated Monte Carlo simulation with percentile and tail-risk statistics
//!
//! # Example
//!
//! ```ignore
//! use roiplan_core::{EngineConfig, RoiInputs, StaticBenchmarks, evaluate_with_monte_carlo};
//! use roiplan_core::model::MonteCarloConfig;
//!
//! let config = EngineConfig::default();
//! let raw = RoiInputs {
//!     team_size: Some(20.0),
//!     implementation_budget: Some(200_000.0),
//!     ..Default::default()
//! };
//! let inputs = config.normalize.normalize(&raw, &StaticBenchmarks)?;
//! let report = evaluate_with_monte_carlo(&inputs, &config, &MonteCarloConfig::default());
//! println!("Base NPV: {:.0}", report.base().npv);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod benchmarks;
pub mod cash_flows;
pub mod error;
pub mod evaluate;
pub mod metrics;
pub mod sampling;
pub mod scenario;
pub mod simulation;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use benchmarks::{Benchmark, BenchmarkSource, StaticBenchmarks};
pub use config::{EngineConfig, ModelAssumptions, NormalizeConfig};
pub use error::InputError;
pub use evaluate::{evaluate, evaluate_with_monte_carlo};
pub use model::{InputSet, RoiInputs, RoiReport};
