//! Command-line front end for the roiplan engine
//!
//! Loads a YAML scenario file, runs the deterministic report and an optional
//! Monte Carlo simulation, prints a plain-text summary and optionally writes
//! the full report as JSON or YAML.

pub mod input;
pub mod logging;
pub mod report;
pub mod util;

pub use input::{OutputFormat, ScenarioFile};
pub use logging::init_logging;
pub use report::write_report;
