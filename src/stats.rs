//! Descriptive statistics used by the ANOVA engine.
//!
//! Sums are compensated (Neumaier) so that group means and sums of squares
//! stay accurate for large groups or values with a large common offset.
//!
//! # Examples
//!
//! ```
//! use u_anova::stats;
//!
//! let data = [2.0, 4.0, 6.0];
//! assert_eq!(stats::mean(&data), Some(4.0));
//! assert_eq!(stats::sum_squared_deviations(&data, 4.0), 8.0);
//! ```

/// Neumaier-compensated sum.
///
/// # References
///
/// Neumaier (1974). "Rundungsfehleranalyse einiger Verfahren zur Summation
/// endlicher Summen". ZAMM, 54(1), 39–51.
pub fn sum(data: &[f64]) -> f64 {
    sum_iter(data.iter().copied())
}

/// Compensated sum over any iterator of values.
pub(crate) fn sum_iter<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut total = 0.0_f64;
    let mut compensation = 0.0_f64;
    for x in values {
        let t = total + x;
        if total.abs() >= x.abs() {
            compensation += (total - t) + x;
        } else {
            compensation += (x - t) + total;
        }
        total = t;
    }
    total + compensation
}

/// Arithmetic mean.
///
/// # Returns
///
/// `None` if `data` is empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(sum(data) / data.len() as f64)
}

/// Σ (x - center)².
///
/// Returns exactly `0.0` when every value in `data` is equal, regardless of
/// how `center` was rounded.
pub fn sum_squared_deviations(data: &[f64], center: f64) -> f64 {
    if is_constant(data) {
        return 0.0;
    }
    sum_iter(data.iter().map(|&x| (x - center) * (x - center)))
}

/// `true` if all values are equal (vacuously true for empty input).
pub(crate) fn is_constant(data: &[f64]) -> bool {
    match data.split_first() {
        Some((&first, rest)) => rest.iter().all(|&x| x == first),
        None => true,
    }
}
