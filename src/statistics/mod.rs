//! Statistical primitives for sample-size estimation.
//!
//! This module provides the quantile infrastructure the estimator is built
//! on:
//! - Exact-key lookups into the constant normal and reference-t tables
//! - A closed-form approximation of the two-tailed Student-t quantile

mod quantile;
mod t_approx;

pub use quantile::{t_reference, z_score};
pub use t_approx::t_value;
