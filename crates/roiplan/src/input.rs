//! Scenario files and report serialization
//!
//! A scenario file is YAML with the raw inputs and optional engine and Monte
//! Carlo overrides:
//!
//! ```yaml
//! inputs:
//!   profile: { industry: healthcare, process_type: invoice_processing }
//!   team_size: 12
//!   implementation_budget: 150000
//! monte_carlo:
//!   iterations: 1000
//!   seed: 7
//! ```

use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use roiplan_core::model::{MonteCarloConfig, RoiInputs, RoiReport};
use roiplan_core::EngineConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub inputs: RoiInputs,
    #[serde(default)]
    pub engine: Option<EngineConfig>,
    #[serde(default)]
    pub monte_carlo: Option<MonteCarloConfig>,
}

impl ScenarioFile {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading scenario file {}", path.display()))?;
        Self::from_yaml(&content)
            .wrap_err_with(|| format!("parsing scenario file {}", path.display()))
    }

    /// Monte Carlo settings with command-line overrides applied
    #[must_use]
    pub fn monte_carlo_settings(
        &self,
        iterations: Option<usize>,
        seed: Option<u64>,
    ) -> MonteCarloConfig {
        let mut mc = self.monte_carlo.unwrap_or_default();
        if let Some(n) = iterations {
            mc.iterations = n;
        }
        if seed.is_some() {
            mc.seed = seed;
        }
        mc
    }
}

/// Serialization format for `--output`, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> color_eyre::Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(OutputFormat::Json),
            Some("yaml" | "yml") => Ok(OutputFormat::Yaml),
            _ => Err(eyre!(
                "unsupported output extension for {} (expected .json or .yaml)",
                path.display()
            )),
        }
    }

    pub fn serialize(&self, report: &RoiReport) -> color_eyre::Result<String> {
        match self {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).wrap_err("serializing report as JSON")
            }
            OutputFormat::Yaml => {
                serde_saphyr::to_string(report).wrap_err("serializing report as YAML")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roiplan_core::model::{Industry, ProcessType};

    const MINIMAL: &str = "\
inputs:
  profile:
    industry: healthcare
    process_type: invoice_processing
  team_size: 12
  implementation_budget: 150000
";

    #[test]
    fn test_minimal_file() {
        let file = ScenarioFile::from_yaml(MINIMAL).unwrap();
        assert_eq!(file.inputs.team_size, Some(12.0));
        assert_eq!(file.inputs.implementation_budget, Some(150_000.0));
        assert_eq!(file.inputs.profile.industry, Industry::Healthcare);
        assert_eq!(
            file.inputs.profile.process_type,
            ProcessType::InvoiceProcessing
        );
        assert!(file.inputs.cost_per_person.is_none());
        assert!(file.engine.is_none());
        assert!(file.monte_carlo.is_none());
    }

    #[test]
    fn test_engine_overrides_merge_with_defaults() {
        let yaml = format!(
            "{MINIMAL}engine:\n  irr:\n    max_iterations: 50\n  caps:\n    roic: {{ min: -1.0, max: 3.0 }}\n"
        );
        let file = ScenarioFile::from_yaml(&yaml).unwrap();
        let engine = file.engine.unwrap();
        assert_eq!(engine.irr.max_iterations, 50);
        assert_eq!(engine.irr.tolerance, 1e-4);
        assert_eq!(engine.caps.roic.max, 3.0);
        assert_eq!(engine.caps.irr.max, 2.0);
        assert_eq!(engine.sensitivity.len(), 6);
    }

    #[test]
    fn test_cli_overrides_monte_carlo_settings() {
        let yaml = format!("{MINIMAL}monte_carlo:\n  iterations: 1000\n  seed: 7\n");
        let file = ScenarioFile::from_yaml(&yaml).unwrap();

        let untouched = file.monte_carlo_settings(None, None);
        assert_eq!(untouched.iterations, 1000);
        assert_eq!(untouched.seed, Some(7));

        let overridden = file.monte_carlo_settings(Some(50), Some(9));
        assert_eq!(overridden.iterations, 50);
        assert_eq!(overridden.seed, Some(9));
    }

    #[test]
    fn test_default_monte_carlo_settings() {
        let file = ScenarioFile::from_yaml(MINIMAL).unwrap();
        let mc = file.monte_carlo_settings(None, None);
        assert_eq!(mc.iterations, 500);
        assert_eq!(mc.seed, None);
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/report.json")).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("report.YML")).unwrap(),
            OutputFormat::Yaml
        );
        assert!(OutputFormat::from_path(Path::new("report.txt")).is_err());
        assert!(OutputFormat::from_path(Path::new("report")).is_err());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let file = ScenarioFile::from_yaml(MINIMAL).unwrap();
        let config = EngineConfig::default();
        let inputs = config
            .normalize
            .normalize(&file.inputs, &roiplan_core::StaticBenchmarks)
            .unwrap();
        let report = roiplan_core::evaluate(&inputs, &config);

        let json = OutputFormat::Json.serialize(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scenarios"].as_array().map(Vec::len), Some(3));
        assert!(value["scenarios"][1]["irr"]["status"].is_string());
        assert!(value["monte_carlo"].is_null());
    }

    #[test]
    fn test_demo_scenario_parses() {
        let file = ScenarioFile::from_yaml(include_str!("../../../demos/reference.yaml")).unwrap();
        assert_eq!(file.inputs.team_size, Some(20.0));
        assert!(file.inputs.executive_sponsor);
        assert!(file.inputs.pathways.capacity_redeployment);
        assert_eq!(file.monte_carlo_settings(None, None).seed, Some(42));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = ScenarioFile::load(Path::new("/nonexistent/scenario.yaml")).unwrap_err();
        assert!(format!("{err:?}").contains("scenario.yaml"));
    }
}
