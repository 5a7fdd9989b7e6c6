//! Startup configuration.
//!
//! Every field is optional in the JSON file; whatever is left out keeps the value the program
//! was originally hard coded with.

use std::{fs, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    dataset::{self, Dataset},
    debugger::AnalyzerConfig,
    RegressionErr, Result,
};

const DEFAULT_EPOCHS: usize = 30;
const DEFAULT_LEARNING_RATE: f32 = 0.1;
const DEFAULT_SAMPLES: usize = 10;
const DEFAULT_SLOPE: f32 = 2.0;

/// The environment variable holding the path of the configuration file.
pub const CONFIG_ENV: &str = "REGRESSION_CONFIG";

/// The inputs and targets to fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        let (x, y) = dataset::linear_samples(DEFAULT_SAMPLES, DEFAULT_SLOPE);
        Self { x, y }
    }
}

impl DatasetConfig {
    /// Validates the sequences and turns them into a `Dataset`.
    pub fn build(&self) -> Result<Dataset> {
        Dataset::new(self.x.clone(), self.y.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub epochs: NonZeroUsize,
    pub learning_rate: f32,
    pub initial_weight: f32,
    pub dataset: DatasetConfig,
    pub analyzer: AnalyzerConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: NonZeroUsize::new(DEFAULT_EPOCHS).unwrap_or(NonZeroUsize::MIN),
            learning_rate: DEFAULT_LEARNING_RATE,
            initial_weight: 0.0,
            dataset: DatasetConfig::default(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl TrainingConfig {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    /// Returns `RegressionErr::Parse` on malformed JSON, `RegressionErr::InvalidConfig` on out of
    /// range values and the `Dataset::new` errors for an unusable dataset.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads the configuration file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Checks every value is usable before any training happens.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(RegressionErr::InvalidConfig(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }

        if !self.initial_weight.is_finite() {
            return Err(RegressionErr::InvalidConfig(format!(
                "initial_weight must be finite, got {}",
                self.initial_weight
            )));
        }

        let AnalyzerConfig {
            divergence_patience,
            stagnation_tolerance,
        } = self.analyzer;

        if divergence_patience == 0 {
            return Err(RegressionErr::InvalidConfig(
                "analyzer.divergence_patience must be at least 1".into(),
            ));
        }

        if !stagnation_tolerance.is_finite() || stagnation_tolerance < 0.0 {
            return Err(RegressionErr::InvalidConfig(format!(
                "analyzer.stagnation_tolerance must be a non negative finite number, got {stagnation_tolerance}"
            )));
        }

        self.dataset.build()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_the_defaults() {
        let cfg = TrainingConfig::from_json("{}").unwrap();

        assert_eq!(cfg, TrainingConfig::default());
        assert_eq!(cfg.epochs.get(), 30);
        assert_eq!(cfg.learning_rate, 0.1);
        assert_eq!(cfg.initial_weight, 0.0);
        assert_eq!(cfg.dataset.x, (1..=10).map(|i| i as f32).collect::<Vec<_>>());
        assert_eq!(cfg.dataset.y[9], 20.0);
        assert_eq!(cfg.analyzer.divergence_patience, 3);
        assert_eq!(cfg.analyzer.stagnation_tolerance, 1e-4);
    }

    #[test]
    fn partial_files_override_only_what_they_name() {
        let cfg = TrainingConfig::from_json(
            r#"{ "learning_rate": 0.01, "analyzer": { "divergence_patience": 5 } }"#,
        )
        .unwrap();

        assert_eq!(cfg.learning_rate, 0.01);
        assert_eq!(cfg.epochs.get(), 30);
        assert_eq!(cfg.analyzer.divergence_patience, 5);
        assert_eq!(cfg.analyzer.stagnation_tolerance, 1e-4);
    }

    #[test]
    fn zero_epochs_is_rejected() {
        let err = TrainingConfig::from_json(r#"{ "epochs": 0 }"#).unwrap_err();
        assert!(matches!(err, RegressionErr::Parse(_)));
    }

    #[test]
    fn non_positive_learning_rate_is_rejected() {
        for lr in ["0.0", "-0.5"] {
            let json = format!(r#"{{ "learning_rate": {lr} }}"#);
            let err = TrainingConfig::from_json(&json).unwrap_err();
            assert!(matches!(err, RegressionErr::InvalidConfig(_)));
        }
    }

    #[test]
    fn mismatched_dataset_is_rejected() {
        let err = TrainingConfig::from_json(r#"{ "dataset": { "x": [1, 2, 3], "y": [2, 4] } }"#)
            .unwrap_err();

        assert!(matches!(
            err,
            RegressionErr::InvalidDataset { x_len: 3, y_len: 2 }
        ));
    }

    #[test]
    fn non_finite_dataset_values_are_rejected() {
        let cfg = TrainingConfig {
            dataset: DatasetConfig {
                x: vec![1.0, f32::NAN],
                y: vec![2.0, 4.0],
            },
            ..TrainingConfig::default()
        };

        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, RegressionErr::NonFiniteSample { index: 1 }));
    }

    #[test]
    fn zero_patience_is_rejected() {
        let err = TrainingConfig::from_json(r#"{ "analyzer": { "divergence_patience": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidConfig(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TrainingConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, RegressionErr::Io(_)));
    }
}
