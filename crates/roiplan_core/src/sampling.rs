//! Monte Carlo input sampler
//!
//! One standard-normal environment shock is drawn per iteration and shared
//! by the correlated variables: a good environment (positive shock) makes
//! readiness improvements likelier and cost overruns smaller. Every variable
//! has its own sampling function so each distribution can be tested alone.

use rand::Rng;

use crate::model::InputSet;
use crate::stats::{clamp, gaussian_random, lognormal_random, triangular_random};

/// Common factor shared by the correlated variables of one iteration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnvironmentShock(pub f64);

impl EnvironmentShock {
    /// Draw a standard-normal shock
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(gaussian_random(rng, 0.0, 1.0))
    }
}

pub fn sample_automation_potential<R: Rng + ?Sized>(rng: &mut R, base: f64) -> f64 {
    clamp(gaussian_random(rng, base, 0.08), 0.10, 0.95)
}

/// Shift readiness by -1, 0 or +1
///
/// The base probabilities are 20% down and 30% up. The shock moves each by
/// `0.05 * shock`, never by more than 10 points.
pub fn sample_change_readiness<R: Rng + ?Sized>(
    rng: &mut R,
    base: u8,
    shock: EnvironmentShock,
) -> u8 {
    let p_down = clamp(0.20 - 0.05 * shock.0, 0.10, 0.30);
    let p_up = clamp(0.30 + 0.05 * shock.0, 0.20, 0.40);

    let u: f64 = rng.random();
    let shifted = if u < p_down {
        i16::from(base) - 1
    } else if u >= 1.0 - p_up {
        i16::from(base) + 1
    } else {
        i16::from(base)
    };
    shifted.clamp(1, 5) as u8
}

/// Budget overrun multiplier, lognormal and clamped to [0.70, 1.80]
pub fn sample_budget_multiplier<R: Rng + ?Sized>(rng: &mut R, shock: EnvironmentShock) -> f64 {
    clamp(lognormal_random(rng, -shock.0 * 0.08, 0.30), 0.70, 1.80)
}

/// Ongoing cost multiplier, lognormal and clamped to [0.50, 2.00]
pub fn sample_ongoing_multiplier<R: Rng + ?Sized>(rng: &mut R, shock: EnvironmentShock) -> f64 {
    clamp(lognormal_random(rng, -shock.0 * 0.06, 0.35), 0.50, 2.00)
}

pub fn sample_cash_realization<R: Rng + ?Sized>(rng: &mut R, base: f64) -> f64 {
    triangular_random(rng, 0.20, clamp(base, 0.20, 0.80), 0.80)
}

pub fn sample_error_rate<R: Rng + ?Sized>(rng: &mut R, base: f64) -> f64 {
    clamp(gaussian_random(rng, base, base * 0.25), 0.01, 0.50)
}

/// Sample a new input set around `base` with an explicit shock
#[must_use]
pub fn sample_with_shock<R: Rng + ?Sized>(
    rng: &mut R,
    base: &InputSet,
    shock: EnvironmentShock,
) -> InputSet {
    let automation_potential = sample_automation_potential(rng, base.automation_potential);
    let change_readiness = sample_change_readiness(rng, base.change_readiness, shock);
    let budget = base.implementation_budget * sample_budget_multiplier(rng, shock);
    let ongoing = base.ongoing_annual_cost * sample_ongoing_multiplier(rng, shock);
    let cash_realization = sample_cash_realization(rng, base.cash_realization);
    let error_rate = sample_error_rate(rng, base.error_rate);

    InputSet {
        automation_potential,
        change_readiness,
        implementation_budget: budget,
        ongoing_annual_cost: ongoing,
        cash_realization,
        error_rate,
        ..base.clone()
    }
}

/// Draw a shock, then sample a new input set around `base`
#[must_use]
pub fn sample_inputs<R: Rng + ?Sized>(rng: &mut R, base: &InputSet) -> InputSet {
    let shock = EnvironmentShock::draw(rng);
    sample_with_shock(rng, base, shock)
}
