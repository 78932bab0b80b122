//! Financial metrics over a projection
//!
//! All functions take the operating-year net flows (year 1 first) and the
//! upfront investment paid at t = 0 separately.

use crate::config::IrrSolverConfig;
use crate::model::{HORIZON_MONTHS, IrrOutcome, PAYBACK_NEVER};

/// Net present value with year-end discounting
#[must_use]
pub fn npv(flows: &[f64], upfront: f64, rate: f64) -> f64 {
    let mut discount = 1.0;
    let mut total = -upfront;
    for flow in flows {
        discount *= 1.0 + rate;
        total += flow / discount;
    }
    total
}

/// NPV and its derivative with respect to the rate
fn npv_and_derivative(flows: &[f64], upfront: f64, rate: f64) -> (f64, f64) {
    let base = 1.0 + rate;
    let mut value = -upfront;
    let mut derivative = 0.0;
    let mut factor = 1.0;
    for (t, flow) in flows.iter().enumerate() {
        factor /= base;
        value += flow * factor;
        derivative -= (t + 1) as f64 * flow * factor / base;
    }
    (value, derivative)
}

fn has_sign_change(flows: &[f64], upfront: f64) -> bool {
    let all = std::iter::once(-upfront).chain(flows.iter().copied());
    let (mut positive, mut negative) = (false, false);
    for flow in all {
        positive |= flow > 0.0;
        negative |= flow < 0.0;
    }
    positive && negative
}

/// Internal rate of return via damped Newton-Raphson
///
/// The step is clamped to `max_step` and the rate is kept above -100%. A
/// converged root outside the plausible range is reported as
/// [`IrrOutcome::Implausible`]. The outcome never carries NaN.
#[must_use]
pub fn irr(flows: &[f64], upfront: f64, config: &IrrSolverConfig) -> IrrOutcome {
    if !has_sign_change(flows, upfront) {
        return IrrOutcome::NoSignChange;
    }

    let mut rate = config.initial_guess;
    for _ in 0..config.max_iterations {
        let (value, derivative) = npv_and_derivative(flows, upfront, rate);
        if !value.is_finite() || !derivative.is_finite() || derivative == 0.0 {
            return IrrOutcome::NotConverged { last_rate: rate };
        }

        let step = (value / derivative).clamp(-config.max_step, config.max_step);
        let mut next = rate - step;
        if next <= -1.0 {
            next = (rate - 1.0) / 2.0;
        }

        if (next - rate).abs() < config.tolerance {
            return if next > config.plausible_min && next < config.plausible_max {
                IrrOutcome::Converged { rate: next }
            } else {
                IrrOutcome::Implausible { rate: next }
            };
        }
        rate = next;
    }

    IrrOutcome::NotConverged { last_rate: rate }
}

/// Months until the cumulative position reaches zero
///
/// Each year's flow is spread evenly over its 12 months. Returns 0 when
/// nothing is invested and [`PAYBACK_NEVER`] when break-even falls outside
/// the horizon.
#[must_use]
pub fn payback_months(flows: &[f64], upfront: f64) -> u32 {
    if upfront <= 0.0 {
        return 0;
    }

    let mut cumulative = -upfront;
    let mut month = 0;
    for flow in flows {
        let monthly = flow / 12.0;
        for _ in 0..12 {
            month += 1;
            cumulative += monthly;
            if cumulative >= 0.0 {
                return month.min(PAYBACK_NEVER);
            }
        }
        if month >= HORIZON_MONTHS {
            break;
        }
    }
    PAYBACK_NEVER
}

/// Return on invested capital over the horizon
///
/// Separation costs are already netted into `flows`, so only the upfront
/// investment is subtracted. Returns 0 when `total_capital` is not positive.
#[must_use]
pub fn roic(flows: &[f64], upfront: f64, total_capital: f64) -> f64 {
    if total_capital <= 0.0 {
        return 0.0;
    }
    (flows.iter().sum::<f64>() - upfront) / total_capital
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT: [f64; 5] = [300.0; 5];

    #[test]
    fn test_npv_zero_rate_is_plain_sum() {
        assert_eq!(npv(&FLAT, 1000.0, 0.0), 500.0);
    }

    #[test]
    fn test_npv_single_period() {
        let v = npv(&[110.0, 0.0, 0.0, 0.0, 0.0], 100.0, 0.10);
        assert!(v.abs() < 1e-9);
    }

    #[test]
    fn test_irr_single_period() {
        let outcome = irr(&[110.0, 0.0, 0.0, 0.0, 0.0], 100.0, &IrrSolverConfig::default());
        let rate = outcome.value().expect("converged");
        assert!((rate - 0.10).abs() < 1e-4);
    }

    #[test]
    fn test_irr_annuity_zeroes_npv() {
        let outcome = irr(&FLAT, 1000.0, &IrrSolverConfig::default());
        let rate = outcome.value().expect("converged");
        assert!((rate - 0.1524).abs() < 1e-3);
        assert!(npv(&FLAT, 1000.0, rate).abs() < 1.0);
    }

    #[test]
    fn test_irr_negative_root() {
        // Returns less than invested: root below zero
        let flows = [150.0; 5];
        let rate = irr(&flows, 1000.0, &IrrSolverConfig::default())
            .value()
            .expect("converged");
        assert!(rate < 0.0 && rate > -1.0);
        assert!(npv(&flows, 1000.0, rate).abs() < 1.0);
    }

    #[test]
    fn test_irr_same_sign_flows() {
        let config = IrrSolverConfig::default();
        assert_eq!(irr(&FLAT, 0.0, &config), IrrOutcome::NoSignChange);
        assert_eq!(irr(&[-10.0; 5], 100.0, &config), IrrOutcome::NoSignChange);
        assert_eq!(irr(&[0.0; 5], 0.0, &config), IrrOutcome::NoSignChange);
    }

    #[test]
    fn test_irr_iteration_budget() {
        let config = IrrSolverConfig {
            max_iterations: 1,
            ..IrrSolverConfig::default()
        };
        match irr(&FLAT, 1000.0, &config) {
            IrrOutcome::NotConverged { last_rate } => assert!(last_rate.is_finite()),
            other => panic!("expected NotConverged, got {other:?}"),
        }
    }

    #[test]
    fn test_irr_outside_plausible_range() {
        let config = IrrSolverConfig {
            plausible_max: 0.10,
            ..IrrSolverConfig::default()
        };
        assert!(matches!(
            irr(&FLAT, 1000.0, &config),
            IrrOutcome::Implausible { .. }
        ));
    }

    #[test]
    fn test_payback_month_by_month() {
        // 1,200 per year is 100 per month; 250 invested breaks even in month 3
        assert_eq!(payback_months(&[1200.0; 5], 250.0), 3);
        // Second year: 1,200 + 6 * 100
        assert_eq!(payback_months(&[1200.0; 5], 1800.0), 18);
    }

    #[test]
    fn test_payback_edges() {
        assert_eq!(payback_months(&FLAT, 0.0), 0);
        assert_eq!(payback_months(&FLAT, -5.0), 0);
        assert_eq!(payback_months(&FLAT, 10_000.0), PAYBACK_NEVER);
        assert_eq!(payback_months(&[-10.0; 5], 100.0), PAYBACK_NEVER);
        assert_eq!(payback_months(&FLAT, 1500.0), HORIZON_MONTHS);
    }

    #[test]
    fn test_roic() {
        assert!((roic(&FLAT, 1000.0, 1000.0) - 0.5).abs() < 1e-12);
        assert!((roic(&FLAT, 1000.0, 1250.0) - 0.4).abs() < 1e-12);
        assert_eq!(roic(&FLAT, 0.0, 0.0), 0.0);
        assert_eq!(roic(&FLAT, 1000.0, -1.0), 0.0);
    }
}
