use crate::debugger::Warning;

/// What happened during a single epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    /// One based epoch index.
    pub epoch: usize,
    /// The weight after this epoch's update.
    pub weight: f32,
    /// The loss after this epoch's update.
    pub loss: f32,
    /// The gradient the update was taken with.
    pub gradient: f32,
    pub warnings: Vec<Warning>,
}

/// The outcome of a full training run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainingReport {
    pub epochs: Vec<EpochReport>,
}

impl TrainingReport {
    pub fn last(&self) -> Option<&EpochReport> {
        self.epochs.last()
    }

    pub fn final_weight(&self) -> Option<f32> {
        self.last().map(|r| r.weight)
    }

    pub fn final_loss(&self) -> Option<f32> {
        self.last().map(|r| r.loss)
    }

    /// Total number of warnings raised over the run.
    pub fn warning_count(&self) -> usize {
        self.epochs.iter().map(|r| r.warnings.len()).sum()
    }
}
