//! One-at-a-time sensitivity analysis.
//!
//! Each configured variable is moved to a low and a high bound while every
//! other input stays at its resolved value. The full projection is rebuilt at
//! the base scenario multiplier for both bounds, without metric caps, and the
//! resulting NPVs are reported against the same base NPV:
//!
//! ```ignore
//! use roiplan_core::analysis::{run_sensitivity, tornado_order};
//!
//! let rows = run_sensitivity(&inputs, &config);
//! for row in tornado_order(&rows) {
//!     println!("{}: {:.0} .. {:.0}", row.label, row.npv_low, row.npv_high);
//! }
//! ```
//!
//! Rows are stored in configuration order; `tornado_order` only sorts a view.

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
