//! # u-anova
//!
//! One-way analysis of variance (ANOVA).
//!
//! Computes the F-statistic and its upper-tail p-value from grouped `f64`
//! samples, reproducing the output of reference `f_oneway` implementations.
//! The sums of squares are computed here; the F-distribution tail comes from
//! `statrs`.
//!
//! ## Modules
//!
//! - [`testing`] — One-way ANOVA F-test and the ANOVA table
//! - [`special`] — F-distribution CDF/SF
//! - [`stats`] — Compensated sums, means, sums of squared deviations
//! - [`error`] — [`AnovaError`]
//!
//! ## Example
//!
//! ```
//! use u_anova::one_way_anova;
//!
//! let groups: [&[f64]; 4] = [
//!     &[1.0, 2.0, 1.0, 0.0],
//!     &[2.0, 3.0, 2.0, 1.0],
//!     &[10.0, 7.0, 10.0, 8.0],
//!     &[5.0, 4.0, 5.0, 6.0],
//! ];
//! let r = one_way_anova(&groups).unwrap();
//! assert!((r.f_statistic - 45.70588).abs() < 1e-4);
//! assert!(r.p_value < 1e-6);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Domain-agnostic**: operates on raw `f64` slices
//! - **Numerical stability**: compensated summation, exact zero-variance
//!   detection, and power-of-two rescaling before squaring
//! - **Research-backed**: all algorithms reference academic literature

pub mod error;
pub mod special;
pub mod stats;
pub mod testing;

pub use error::AnovaError;
pub use testing::{one_way_anova, AnovaResult};
