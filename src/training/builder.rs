use super::{Trainer, TrainingState};
use crate::{
    config::TrainingConfig,
    debugger::TrendAnalyzer,
    loss::Mse,
    optimization::GradientDescent,
    Result,
};

/// Builds `Trainer`s given a configuration.
#[derive(Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Trainer` and its starting state following a configuration.
    ///
    /// # Arguments
    /// * `cfg` - The configuration for the training run.
    ///
    /// # Errors
    /// Returns the validation error if `cfg` is not usable.
    pub fn build(
        &self,
        cfg: &TrainingConfig,
    ) -> Result<(Trainer<GradientDescent, Mse>, TrainingState)> {
        cfg.validate()?;

        let dataset = cfg.dataset.build()?;
        let optimizer = GradientDescent::new(cfg.learning_rate);
        let analyzer = TrendAnalyzer::new(cfg.analyzer);
        let trainer = Trainer::new(dataset, optimizer, Mse::new(), analyzer);

        Ok((trainer, TrainingState::new(cfg.initial_weight)))
    }
}
