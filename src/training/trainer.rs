use std::num::NonZeroUsize;

use log::{debug, warn};

use super::{EpochReport, TrainingReport, TrainingState};
use crate::{
    dataset::Dataset,
    debugger::TrendAnalyzer,
    loss::LossFn,
    optimization::Optimizer,
    RegressionErr, Result,
};

/// Runs batch gradient descent over a `y = w * x` model.
pub struct Trainer<O: Optimizer, L: LossFn> {
    dataset: Dataset,
    optimizer: O,
    loss: L,
    analyzer: TrendAnalyzer,
}

impl<O: Optimizer, L: LossFn> Trainer<O, L> {
    pub fn new(dataset: Dataset, optimizer: O, loss: L, analyzer: TrendAnalyzer) -> Self {
        Self {
            dataset,
            optimizer,
            loss,
            analyzer,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Runs a single epoch over the whole dataset.
    ///
    /// # Arguments
    /// * `state` - The state left behind by the previous epoch.
    ///
    /// # Returns
    /// The state for the next epoch together with this epoch's report.
    ///
    /// # Errors
    /// Returns `RegressionErr::NonFinite` if the updated weight or its loss is NaN or infinite.
    pub fn step(&mut self, state: TrainingState) -> Result<(TrainingState, EpochReport)> {
        let epoch = state.epoch + 1;
        let (x, y) = self.dataset.views();

        let gradient = self.loss.loss_prime(state.weight, x, y);
        let weight = self.optimizer.step(state.weight, gradient);

        let loss = self.loss.loss(weight, x, y);
        debug!("epoch {epoch} finished: gradient={gradient} weight={weight} loss={loss}");

        if !weight.is_finite() || !loss.is_finite() {
            return Err(RegressionErr::NonFinite {
                epoch,
                weight,
                loss,
            });
        }

        let analysis = self
            .analyzer
            .analyze(state.prev_loss, loss, state.increase_count);

        for warning in &analysis.warnings {
            warn!(epoch = epoch, increase_count = analysis.increase_count; "{warning}");
        }

        let next = TrainingState {
            epoch,
            weight,
            prev_loss: loss,
            increase_count: analysis.increase_count,
        };

        let report = EpochReport {
            epoch,
            weight,
            loss,
            gradient,
            warnings: analysis.warnings,
        };

        Ok((next, report))
    }

    /// Trains for a fixed number of epochs, there's no early stopping.
    pub fn train(&mut self, state: TrainingState, epochs: NonZeroUsize) -> Result<TrainingReport> {
        self.train_with(state, epochs, |_| Ok(()))
    }

    /// Same as `train`, calling `on_epoch` right after each epoch so progress can be streamed.
    ///
    /// # Errors
    /// Stops at the first error, either from the epoch itself or from `on_epoch`.
    pub fn train_with<F>(
        &mut self,
        mut state: TrainingState,
        epochs: NonZeroUsize,
        mut on_epoch: F,
    ) -> Result<TrainingReport>
    where
        F: FnMut(&EpochReport) -> Result<()>,
    {
        let mut report = TrainingReport {
            epochs: Vec::with_capacity(epochs.get()),
        };

        for _ in 0..epochs.get() {
            let (next, epoch_report) = self.step(state)?;
            on_epoch(&epoch_report)?;

            state = next;
            report.epochs.push(epoch_report);
        }

        Ok(report)
    }
}
