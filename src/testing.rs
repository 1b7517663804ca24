//! Hypothesis testing.
//!
//! One-way fixed-effects analysis of variance: tests H₀ that every group
//! shares the same population mean.
//!
//! # Examples
//!
//! ```
//! use u_anova::testing::one_way_anova;
//!
//! let low = [1.0, 2.0, 1.0, 0.0];
//! let high = [10.0, 7.0, 10.0, 8.0];
//! let r = one_way_anova(&[&low, &high]).unwrap();
//! assert!(r.is_significant(0.05)); // means clearly differ
//! ```

use std::fmt;

use crate::error::{self, AnovaError};
use crate::special;
use crate::stats;

// ---------------------------------------------------------------------------
// ANOVA
// ---------------------------------------------------------------------------

/// Result of one-way ANOVA.
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaResult {
    /// F-statistic. `+∞` when all within-group variation is zero.
    pub f_statistic: f64,
    /// Upper-tail p-value P(F(df_between, df_within) ≥ F).
    pub p_value: f64,
    /// Degrees of freedom between groups (k - 1).
    pub df_between: usize,
    /// Degrees of freedom within groups (N - k).
    pub df_within: usize,
    /// Sum of squares between groups.
    pub ss_between: f64,
    /// Sum of squares within groups.
    pub ss_within: f64,
    /// Mean square between.
    pub ms_between: f64,
    /// Mean square within.
    pub ms_within: f64,
    /// Group means, in input order.
    pub group_means: Vec<f64>,
    /// Group sizes, in input order.
    pub group_sizes: Vec<usize>,
    /// Grand mean over all observations.
    pub grand_mean: f64,
}

impl AnovaResult {
    /// Total sum of squares, SS_between + SS_within.
    pub fn ss_total(&self) -> f64 {
        self.ss_between + self.ss_within
    }

    /// Effect size η² = SS_between / SS_total, the share of total variation
    /// explained by group membership.
    pub fn eta_squared(&self) -> f64 {
        self.ss_between / self.ss_total()
    }

    /// `true` if H₀ is rejected at significance level `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

impl fmt::Display for AnovaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F({}, {}) = {:.4}, p = {:.4e}",
            self.df_between, self.df_within, self.f_statistic, self.p_value
        )
    }
}

/// One-way ANOVA: H₀: all group means are equal.
///
/// # Algorithm
///
/// F = MS_between / MS_within where
/// MS_between = SS_between / (k-1),
/// MS_within = SS_within / (N-k),
/// and p = 1 - CDF_F(F; k-1, N-k), evaluated as the upper tail directly.
///
/// Groups may differ in size; a group with a single observation contributes
/// no within-group variation.
///
/// # Errors
///
/// - [`AnovaError::InsufficientData`] if fewer than 2 groups or N - k ≤ 0.
/// - [`AnovaError::EmptyGroup`] if a group has no observations.
/// - [`AnovaError::NonFiniteValue`] if a value is NaN or infinite.
/// - [`AnovaError::DegenerateInput`] if every observation is identical
///   (checked before N - k), so both mean squares are zero and F = 0/0.
///
/// If only the within-group variation is zero, F is `+∞` and p is `0.0`.
///
/// # References
///
/// Fisher (1925). "Statistical Methods for Research Workers".
///
/// # Examples
///
/// ```
/// use u_anova::testing::one_way_anova;
///
/// let group1 = [1.0, 2.0, 3.0];
/// let group2 = [4.0, 5.0, 6.0];
/// let group3 = [7.0, 8.0, 9.0];
/// let r = one_way_anova(&[&group1, &group2, &group3]).unwrap();
/// assert!((r.f_statistic - 27.0).abs() < 1e-10);
/// assert!((r.p_value - 0.001).abs() < 1e-10);
/// ```
pub fn one_way_anova(groups: &[&[f64]]) -> error::Result<AnovaResult> {
    let k = groups.len();
    let total_n: usize = groups.iter().map(|g| g.len()).sum();
    if k < 2 {
        return Err(AnovaError::InsufficientData {
            groups: k,
            observations: total_n,
        });
    }

    for (group, g) in groups.iter().enumerate() {
        if g.is_empty() {
            return Err(AnovaError::EmptyGroup { group });
        }
        if let Some(index) = g.iter().position(|v| !v.is_finite()) {
            return Err(AnovaError::NonFiniteValue { group, index });
        }
    }

    // Exact check: rounding in the means must not turn 0/0 into a finite F.
    // Runs before the residual df check so [[c], [c]] reports 0/0.
    let first = groups[0][0];
    let all_identical = groups.iter().all(|g| g.iter().all(|&x| x == first));
    if all_identical {
        return Err(AnovaError::DegenerateInput);
    }

    if total_n <= k {
        return Err(AnovaError::InsufficientData {
            groups: k,
            observations: total_n,
        });
    }

    // Sums of squares are accumulated on data divided by a power of two near
    // max |x|, so squares neither overflow nor underflow. Binary scaling is
    // exact, and F is invariant under it.
    let max_abs = groups
        .iter()
        .flat_map(|g| g.iter())
        .fold(0.0_f64, |m, &x| m.max(x.abs()));
    let scale = power_of_two_scale(max_abs);
    let scaled: Vec<Vec<f64>> = groups
        .iter()
        .map(|g| g.iter().map(|&x| x / scale).collect())
        .collect();

    let group_sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    let scaled_means = scaled
        .iter()
        .enumerate()
        .map(|(group, g)| stats::mean(g).ok_or(AnovaError::EmptyGroup { group }))
        .collect::<error::Result<Vec<f64>>>()?;

    let grand_sum = stats::sum_iter(scaled.iter().flat_map(|g| g.iter().copied()));
    let scaled_grand_mean = grand_sum / total_n as f64;

    let ss_between = stats::sum_iter(
        group_sizes
            .iter()
            .zip(scaled_means.iter())
            .map(|(&n, &m)| n as f64 * (m - scaled_grand_mean).powi(2)),
    );

    let ss_within = stats::sum_iter(
        scaled
            .iter()
            .zip(scaled_means.iter())
            .map(|(g, &m)| stats::sum_squared_deviations(g, m)),
    );

    if ss_between == 0.0 && ss_within == 0.0 {
        return Err(AnovaError::DegenerateInput);
    }

    let df_between = k - 1;
    let df_within = total_n - k;

    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;

    // ss_within is exactly zero only when every group is constant
    let f_statistic = if ss_within == 0.0 {
        f64::INFINITY
    } else {
        ms_between / ms_within
    };

    let p_value = special::f_distribution_sf(f_statistic, df_between as f64, df_within as f64);

    log::debug!(
        "one-way ANOVA: k={k}, N={total_n}, df=({df_between}, {df_within}), F={f_statistic}, p={p_value}"
    );

    // Table entries go back to input units; they saturate to 0 or +inf when
    // the true value is outside the f64 range, F and p do not.
    let unscale_sq = |v: f64| v * scale * scale;

    Ok(AnovaResult {
        f_statistic,
        p_value,
        df_between,
        df_within,
        ss_between: unscale_sq(ss_between),
        ss_within: unscale_sq(ss_within),
        ms_between: unscale_sq(ms_between),
        ms_within: unscale_sq(ms_within),
        group_means: scaled_means.iter().map(|&m| m * scale).collect(),
        group_sizes,
        grand_mean: scaled_grand_mean * scale,
    })
}

/// Power of two closest above `max_abs`, clamped to the normal f64 range.
fn power_of_two_scale(max_abs: f64) -> f64 {
    if max_abs == 0.0 {
        return 1.0;
    }
    let exponent = (max_abs.log2().ceil() as i32).clamp(-1000, 1023);
    2.0_f64.powi(exponent)
}
