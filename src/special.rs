//! F-distribution tail probabilities.
//!
//! Thin wrappers over [`statrs::distribution::FisherSnedecor`] that keep the
//! `f64 -> f64` calling convention used by the ANOVA engine: invalid
//! arguments yield `NaN` instead of an error value.
//!
//! ```text
//! CDF_F(f; d1, d2) = I_{d1·f / (d1·f + d2)}(d1/2, d2/2)
//! SF_F(f; d1, d2)  = I_{d2 / (d2 + d1·f)}(d2/2, d1/2)
//! ```

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

fn distribution(f: f64, d1: f64, d2: f64) -> Option<FisherSnedecor> {
    if f.is_nan() {
        return None;
    }
    FisherSnedecor::new(d1, d2).ok()
}

/// CDF of the F distribution with `d1` and `d2` degrees of freedom.
///
/// # Returns
///
/// `0.0` for f ≤ 0, `1.0` for f = +∞, `NaN` for `NaN` input or
/// non-positive / non-finite degrees of freedom.
///
/// # Examples
///
/// ```
/// use u_anova::special::f_distribution_cdf;
///
/// // F(2, 2) has CDF f / (1 + f)
/// assert!((f_distribution_cdf(3.0, 2.0, 2.0) - 0.75).abs() < 1e-12);
/// ```
pub fn f_distribution_cdf(f: f64, d1: f64, d2: f64) -> f64 {
    match distribution(f, d1, d2) {
        Some(_) if f <= 0.0 => 0.0,
        Some(dist) => dist.cdf(f).clamp(0.0, 1.0),
        None => f64::NAN,
    }
}

/// Survival function (upper tail) of the F distribution: P(F > f).
///
/// # Returns
///
/// `1.0` for f ≤ 0, `0.0` for f = +∞, `NaN` for `NaN` input or
/// non-positive / non-finite degrees of freedom.
///
/// # Examples
///
/// ```
/// use u_anova::special::f_distribution_sf;
///
/// // F(2, 2) has survival 1 / (1 + f)
/// assert!((f_distribution_sf(3.0, 2.0, 2.0) - 0.25).abs() < 1e-12);
/// ```
pub fn f_distribution_sf(f: f64, d1: f64, d2: f64) -> f64 {
    match distribution(f, d1, d2) {
        Some(_) if f <= 0.0 => 1.0,
        Some(dist) => dist.sf(f).clamp(0.0, 1.0),
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, rel: f64) -> bool {
        (actual - expected).abs() <= rel * expected.abs()
    }

    #[test]
    fn f_reference_values() {
        // reference values from a 30-digit evaluation of I_x(a, b)
        assert!(close(f_distribution_cdf(2.0, 3.0, 5.0), 0.767_376_081_999_921_4, 1e-10));
        assert!(close(f_distribution_sf(4.0, 2.0, 10.0), 0.185_934_432_081_870_67, 1e-10));
        assert!(close(f_distribution_sf(1.0, 1.0, 5.0), 0.363_217_467_649_122_7, 1e-10));
    }

    #[test]
    fn f_sf_small_tail() {
        // P(F(3, 12) > 45.70588...) = 7.68497741509007e-7
        let f = 145.6875 / 3.0 / (12.75 / 12.0);
        let p = f_distribution_sf(f, 3.0, 12.0);
        assert!(close(p, 7.684_977_415_090_07e-7, 1e-8), "p = {p}");
    }

    #[test]
    fn f_cdf_plus_sf_is_one() {
        for &f in &[0.01, 0.5, 1.0, 2.5, 10.0, 100.0] {
            for &(d1, d2) in &[(1.0, 1.0), (2.0, 7.0), (5.0, 30.0), (40.0, 3.0)] {
                let total = f_distribution_cdf(f, d1, d2) + f_distribution_sf(f, d1, d2);
                assert!((total - 1.0).abs() < 1e-10, "f={f} d=({d1},{d2}): {total}");
            }
        }
    }

    #[test]
    fn f_edge_cases() {
        assert_eq!(f_distribution_cdf(0.0, 2.0, 3.0), 0.0);
        assert_eq!(f_distribution_cdf(-1.0, 2.0, 3.0), 0.0);
        assert_eq!(f_distribution_cdf(f64::INFINITY, 2.0, 3.0), 1.0);
        assert_eq!(f_distribution_sf(0.0, 2.0, 3.0), 1.0);
        assert_eq!(f_distribution_sf(f64::INFINITY, 2.0, 3.0), 0.0);
        assert!(f_distribution_cdf(1.0, 0.0, 3.0).is_nan());
        assert!(f_distribution_sf(1.0, 2.0, f64::INFINITY).is_nan());
        assert!(f_distribution_sf(f64::NAN, 2.0, 3.0).is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn f_sf_monotone_decreasing(
            f in 0.0_f64..50.0,
            step in 0.01_f64..10.0,
            d1 in 1_u32..30,
            d2 in 1_u32..100,
        ) {
            let (d1, d2) = (d1 as f64, d2 as f64);
            let p_lo = f_distribution_sf(f, d1, d2);
            let p_hi = f_distribution_sf(f + step, d1, d2);
            prop_assert!((0.0..=1.0).contains(&p_hi), "sf = {p_hi}");
            prop_assert!(p_hi <= p_lo + 1e-10, "sf({}) = {p_hi} > sf({f}) = {p_lo}", f + step);
        }
    }
}
