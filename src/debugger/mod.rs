//! Heuristics that watch the loss curve and flag unhealthy training.

mod analyzer;
mod warning;

pub use analyzer::{analyze, Analysis, AnalyzerConfig, TrendAnalyzer};
pub use warning::Warning;
