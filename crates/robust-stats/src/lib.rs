//! Robust Statistics
//!
//! Median-based summaries that tolerate outliers in per-frame measurements.

mod median;

pub use median::{elementwise_median, median, median_of_history};
