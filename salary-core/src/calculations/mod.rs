//! Savings calculations for offshore hiring comparisons.
//!
//! Every function here is pure: results are recomputed from the input on
//! each call and nothing is cached or rounded until display time.

pub mod common;
pub mod savings;

pub use savings::{compute_comparison, compute_region_result};
