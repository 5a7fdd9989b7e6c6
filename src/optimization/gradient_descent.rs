use super::Optimizer;

/// Plain batch gradient descent, `w <- w - learning_rate * grad`.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// # Arguments
    /// * `learning_rate` - Scales every gradient before it is subtracted from the weight.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    fn step(&mut self, w: f32, grad: f32) -> f32 {
        w - self.learning_rate * grad
    }
}
