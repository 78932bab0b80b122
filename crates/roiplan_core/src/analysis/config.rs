//! Configuration types for sensitivity analysis.

use serde::{Deserialize, Serialize};

use crate::model::InputSet;

/// Inputs the analyzer can perturb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityVariable {
    TeamSize,
    CostPerPerson,
    ErrorRate,
    AutomationPotential,
    /// Planned implementation budget
    ImplementationCost,
    OngoingCost,
}

impl SensitivityVariable {
    /// Get a descriptive label for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SensitivityVariable::TeamSize => "Team size",
            SensitivityVariable::CostPerPerson => "Cost per person",
            SensitivityVariable::ErrorRate => "Error rate",
            SensitivityVariable::AutomationPotential => "Automation potential",
            SensitivityVariable::ImplementationCost => "Implementation cost",
            SensitivityVariable::OngoingCost => "Ongoing cost",
        }
    }

    /// Current value of this variable in `inputs`
    #[must_use]
    pub fn read(&self, inputs: &InputSet) -> f64 {
        match self {
            SensitivityVariable::TeamSize => inputs.team_size,
            SensitivityVariable::CostPerPerson => inputs.cost_per_person,
            SensitivityVariable::ErrorRate => inputs.error_rate,
            SensitivityVariable::AutomationPotential => inputs.automation_potential,
            SensitivityVariable::ImplementationCost => inputs.implementation_budget,
            SensitivityVariable::OngoingCost => inputs.ongoing_annual_cost,
        }
    }

    /// Valid range for a perturbed value
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        match self {
            SensitivityVariable::ErrorRate => (0.01, 0.50),
            SensitivityVariable::AutomationPotential => (0.10, 0.95),
            SensitivityVariable::TeamSize
            | SensitivityVariable::CostPerPerson
            | SensitivityVariable::ImplementationCost
            | SensitivityVariable::OngoingCost => (0.0, f64::INFINITY),
        }
    }

    /// Return a copy of `inputs` with this variable set to `value`
    #[must_use]
    pub fn with_value(&self, inputs: &InputSet, value: f64) -> InputSet {
        let mut modified = inputs.clone();
        match self {
            SensitivityVariable::TeamSize => modified.team_size = value,
            SensitivityVariable::CostPerPerson => modified.cost_per_person = value,
            SensitivityVariable::ErrorRate => modified.error_rate = value,
            SensitivityVariable::AutomationPotential => modified.automation_potential = value,
            SensitivityVariable::ImplementationCost => modified.implementation_budget = value,
            SensitivityVariable::OngoingCost => modified.ongoing_annual_cost = value,
        }
        modified
    }
}

/// How far a variable moves in each direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Perturbation {
    /// Fraction of the base value (0.20 = +/-20%)
    Relative(f64),
    /// Absolute change for rate variables (0.05 = +/-5 points)
    Points(f64),
}

impl Perturbation {
    /// Unclamped (low, high) bounds around `base`
    #[must_use]
    pub fn bounds(&self, base: f64) -> (f64, f64) {
        match *self {
            Perturbation::Relative(f) => (base * (1.0 - f), base * (1.0 + f)),
            Perturbation::Points(d) => (base - d, base + d),
        }
    }

    /// Short labels for the low and high bound, e.g. "-20%" / "+20%"
    #[must_use]
    pub fn labels(&self) -> (String, String) {
        match *self {
            Perturbation::Relative(f) => {
                let pct = f * 100.0;
                (format!("-{pct:.0}%"), format!("+{pct:.0}%"))
            }
            Perturbation::Points(d) => {
                let pts = d * 100.0;
                (format!("-{pts:.0} pts"), format!("+{pts:.0} pts"))
            }
        }
    }
}

/// One configured sensitivity row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySpec {
    pub variable: SensitivityVariable,
    pub perturbation: Perturbation,
}

impl SensitivitySpec {
    pub fn relative(variable: SensitivityVariable, fraction: f64) -> Self {
        Self {
            variable,
            perturbation: Perturbation::Relative(fraction),
        }
    }

    pub fn points(variable: SensitivityVariable, delta: f64) -> Self {
        Self {
            variable,
            perturbation: Perturbation::Points(delta),
        }
    }

    /// The six standard rows in report order
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::relative(SensitivityVariable::TeamSize, 0.20),
            Self::relative(SensitivityVariable::CostPerPerson, 0.20),
            Self::points(SensitivityVariable::ErrorRate, 0.05),
            Self::points(SensitivityVariable::AutomationPotential, 0.15),
            Self::relative(SensitivityVariable::ImplementationCost, 0.20),
            Self::relative(SensitivityVariable::OngoingCost, 0.20),
        ]
    }

    /// Domain-clamped (low, high) values around the current input
    #[must_use]
    pub fn bounds(&self, inputs: &InputSet) -> (f64, f64) {
        let (min, max) = self.variable.domain();
        let (low, high) = self.perturbation.bounds(self.variable.read(inputs));
        (low.clamp(min, max), high.clamp(min, max))
    }
}
