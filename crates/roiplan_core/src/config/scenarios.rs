//! Scenario table and metric caps

use serde::{Deserialize, Serialize};

use crate::model::ScenarioKind;

/// One row of the scenario table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub kind: ScenarioKind,
    /// Applied to gross savings
    pub multiplier: f64,
    /// Probability weight for expected-value aggregation
    pub weight: f64,
    /// Whether reported IRR/ROIC are clamped to `MetricCaps`
    pub apply_caps: bool,
}

/// Ordered scenario definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioTable(pub Vec<ScenarioSpec>);

impl Default for ScenarioTable {
    fn default() -> Self {
        Self(vec![
            ScenarioSpec {
                kind: ScenarioKind::Conservative,
                multiplier: 0.70,
                weight: 0.25,
                apply_caps: false,
            },
            ScenarioSpec {
                kind: ScenarioKind::Base,
                multiplier: 1.0,
                weight: 0.50,
                apply_caps: true,
            },
            ScenarioSpec {
                kind: ScenarioKind::Optimistic,
                multiplier: 1.20,
                weight: 0.25,
                apply_caps: false,
            },
        ])
    }
}

impl ScenarioTable {
    pub fn iter(&self) -> impl Iterator<Item = &ScenarioSpec> {
        self.0.iter()
    }

    #[must_use]
    pub fn get(&self, kind: ScenarioKind) -> Option<&ScenarioSpec> {
        self.0.iter().find(|s| s.kind == kind)
    }

    /// The base entry. Falls back to a neutral uncapped multiplier when the
    /// table has none.
    #[must_use]
    pub fn base(&self) -> ScenarioSpec {
        self.get(ScenarioKind::Base).copied().unwrap_or(ScenarioSpec {
            kind: ScenarioKind::Base,
            multiplier: 1.0,
            weight: 1.0,
            apply_caps: false,
        })
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.0.iter().map(|s| s.weight).sum()
    }
}

/// Closed interval used for empirical clamps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapRange {
    pub min: f64,
    pub max: f64,
}

/// Empirical bounds on reported metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricCaps {
    pub irr: CapRange,
    pub roic: CapRange,
}

impl Default for MetricCaps {
    fn default() -> Self {
        Self {
            irr: CapRange { min: -1.0, max: 2.0 },
            roic: CapRange { min: -1.0, max: 1.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order_and_weights() {
        let table = ScenarioTable::default();
        let kinds: Vec<_> = table.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ScenarioKind::Conservative,
                ScenarioKind::Base,
                ScenarioKind::Optimistic
            ]
        );
        assert!((table.total_weight() - 1.0).abs() < 1e-12);
        assert!(table.base().apply_caps);
    }

    #[test]
    fn test_base_fallback_without_base_row() {
        let table = ScenarioTable(vec![ScenarioSpec {
            kind: ScenarioKind::Optimistic,
            multiplier: 1.5,
            weight: 1.0,
            apply_caps: true,
        }]);
        let base = table.base();
        assert_eq!(base.multiplier, 1.0);
        assert!(!base.apply_caps);
    }
}
