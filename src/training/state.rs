/// Everything the driver carries from one epoch to the next.
///
/// It is passed by value into `Trainer::step`, which hands back the next state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingState {
    /// Number of epochs completed so far.
    pub epoch: usize,
    pub weight: f32,
    pub prev_loss: f32,
    /// Consecutive epochs in which the loss went up.
    pub increase_count: usize,
}

impl TrainingState {
    /// Returns the state before the first epoch.
    ///
    /// The previous loss starts at `+inf` so the first epoch can never look like an increase.
    pub fn new(weight: f32) -> Self {
        Self {
            epoch: 0,
            weight,
            prev_loss: f32::INFINITY,
            increase_count: 0,
        }
    }
}

impl Default for TrainingState {
    fn default() -> Self {
        Self::new(0.0)
    }
}
