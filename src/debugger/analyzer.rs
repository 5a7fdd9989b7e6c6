use serde::{Deserialize, Serialize};

use super::Warning;

const DEFAULT_DIVERGENCE_PATIENCE: usize = 3;
const DEFAULT_STAGNATION_TOLERANCE: f64 = 1e-4;

/// Thresholds used by the `TrendAnalyzer`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Consecutive loss increases needed before warning about divergence.
    pub divergence_patience: usize,
    /// Absolute loss change under which an epoch counts as stagnant.
    ///
    /// Kept in `f64` so `1e-4` is not rounded below itself before the comparison.
    pub stagnation_tolerance: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            divergence_patience: DEFAULT_DIVERGENCE_PATIENCE,
            stagnation_tolerance: DEFAULT_STAGNATION_TOLERANCE,
        }
    }
}

/// The outcome of comparing two consecutive losses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analysis {
    pub warnings: Vec<Warning>,
    /// The increase counter to feed into the next call.
    pub increase_count: usize,
}

/// Flags divergence and stagnation from the loss trend.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAnalyzer {
    cfg: AnalyzerConfig,
}

impl TrendAnalyzer {
    pub fn new(cfg: AnalyzerConfig) -> Self {
        Self { cfg }
    }

    /// Compares `curr_loss` against `prev_loss`.
    ///
    /// The counter grows on every strict increase and drops to zero otherwise. Once it reaches
    /// `divergence_patience` a divergence warning is raised on every further increase. The
    /// stagnation check is independent of the counter, so both warnings can show up together.
    ///
    /// # Arguments
    /// * `prev_loss` - The loss of the previous epoch.
    /// * `curr_loss` - The loss of the current epoch.
    /// * `increase_count` - The counter returned by the previous call.
    pub fn analyze(&self, prev_loss: f32, curr_loss: f32, increase_count: usize) -> Analysis {
        let mut warnings = Vec::new();

        let increase_count = if curr_loss > prev_loss {
            let count = increase_count + 1;
            if count >= self.cfg.divergence_patience {
                warnings.push(Warning::Divergence);
            }
            count
        } else {
            0
        };

        if f64::from((curr_loss - prev_loss).abs()) < self.cfg.stagnation_tolerance {
            warnings.push(Warning::Stagnation);
        }

        Analysis {
            warnings,
            increase_count,
        }
    }
}

/// Runs a `TrendAnalyzer` with the default thresholds.
pub fn analyze(prev_loss: f32, curr_loss: f32, increase_count: usize) -> Analysis {
    TrendAnalyzer::default().analyze(prev_loss, curr_loss, increase_count)
}
