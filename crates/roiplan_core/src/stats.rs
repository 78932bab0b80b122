//! Distribution sampling and descriptive statistics
//!
//! Samplers take the random source explicitly so that every caller controls
//! seeding. Descriptive statistics operate on plain slices; functions that
//! need ordered data say so and expect the caller to sort first.

use rand::{Rng, distr::Distribution};

/// Draw from a Gaussian using the Box-Muller transform.
///
/// A zero uniform draw would make `ln(u1)` infinite, so it is redrawn.
pub fn gaussian_random<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let mut u1: f64 = rng.random();
    while u1 <= 0.0 {
        u1 = rng.random();
    }
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// Draw `exp(X)` with `X ~ N(mean, std_dev)`. Always strictly positive.
pub fn lognormal_random<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    gaussian_random(rng, mean, std_dev).exp()
}

/// Draw from a triangular distribution by inverting its CDF.
///
/// The mode is pulled into `[low, high]` first. A degenerate range returns the
/// mode without consuming randomness.
pub fn triangular_random<R: Rng + ?Sized>(rng: &mut R, low: f64, mode: f64, high: f64) -> f64 {
    let mode = clamp(mode, low, high);
    if high <= low {
        return mode;
    }
    match rand_distr::Triangular::new(low, high, mode) {
        Ok(dist) => dist.sample(rng),
        Err(_) => mode,
    }
}

/// Linear-interpolated order statistic of an ascending slice.
///
/// `p` is a percentage in `[0, 100]`; values outside are clamped. An empty
/// slice yields 0.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let rank = clamp(p, 0.0, 100.0) / 100.0 * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            if lo == hi {
                sorted[lo]
            } else {
                sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
            }
        }
    }
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`); 0 for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Bound `value` to `[min, max]`. NaN maps to `min`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.max(min).min(max)
    }
}

/// Return an ascending copy of `values` using a total order on `f64`.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_percentile_empty_and_single() {
        assert_eq!(percentile(&[], 50.0), 0.0);
        assert_eq!(percentile(&[7.0], 0.0), 7.0);
        assert_eq!(percentile(&[7.0], 90.0), 7.0);
    }

    #[test]
    fn test_percentile_interpolates_between_order_statistics() {
        // Even length: median falls halfway between 2 and 3
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 50.0), 2.5);
        // Odd length: median is the middle element
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0, 5.0], 50.0), 3.0);
        // rank = 0.25 * 4 = 1.0 -> exactly element 1
        assert_eq!(percentile(&[10.0, 20.0, 30.0, 40.0, 50.0], 25.0), 20.0);
        // rank = 0.10 * 3 = 0.3
        let p10 = percentile(&[0.0, 10.0, 20.0, 30.0], 10.0);
        assert!((p10 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_and_population_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        // Population variance is 4.0, sample variance would be 32/7
        assert_eq!(std_dev(&values), 2.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
    }

    #[test]
    fn test_clamp_handles_nan() {
        assert_eq!(clamp(f64::NAN, 0.1, 0.9), 0.1);
        assert_eq!(clamp(2.0, 0.1, 0.9), 0.9);
        assert_eq!(clamp(-2.0, 0.1, 0.9), 0.1);
        assert_eq!(clamp(0.5, 0.1, 0.9), 0.5);
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = SmallRng::seed_from_u64(7);
        let draws: Vec<f64> = (0..20_000)
            .map(|_| gaussian_random(&mut rng, 3.0, 2.0))
            .collect();
        assert!((mean(&draws) - 3.0).abs() < 0.1);
        assert!((std_dev(&draws) - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_lognormal_strictly_positive() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..5_000 {
            assert!(lognormal_random(&mut rng, 0.0, 1.5) > 0.0);
        }
    }

    #[test]
    fn test_triangular_bounds_and_degenerate_range() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..5_000 {
            let x = triangular_random(&mut rng, 0.2, 0.5, 0.8);
            assert!((0.2..=0.8).contains(&x));
        }
        assert_eq!(triangular_random(&mut rng, 0.4, 0.9, 0.4), 0.4);
        // Mode outside the range is pulled to the nearest bound
        let x = triangular_random(&mut rng, 0.2, 5.0, 0.8);
        assert!((0.2..=0.8).contains(&x));
    }

    #[test]
    fn test_triangular_mean() {
        let mut rng = SmallRng::seed_from_u64(5);
        let draws: Vec<f64> = (0..20_000)
            .map(|_| triangular_random(&mut rng, 0.2, 0.5, 0.8))
            .collect();
        // Mean of a triangular distribution is (a + b + c) / 3
        assert!((mean(&draws) - 0.5).abs() < 0.01);
    }

    proptest! {
        #[test]
        fn prop_percentile_endpoints_are_min_and_max(
            values in prop::collection::vec(-1.0e9f64..1.0e9, 1..200)
        ) {
            let s = sorted(&values);
            prop_assert_eq!(percentile(&s, 0.0), s[0]);
            prop_assert_eq!(percentile(&s, 100.0), s[s.len() - 1]);
        }

        #[test]
        fn prop_percentiles_are_monotone(
            values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200),
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
        ) {
            let s = sorted(&values);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // Interpolation may round by an ulp at segment joints
            prop_assert!(percentile(&s, lo) <= percentile(&s, hi) + 1e-6);
        }
    }
}
