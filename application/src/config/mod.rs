//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`PredictionParams`] - prediction run control (anchor timeout, selection cap)

pub mod prediction_params;

pub use prediction_params::PredictionParams;
