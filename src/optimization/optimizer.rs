/// An update rule for the model weight.
pub trait Optimizer {
    /// Returns the weight after one update from `w` along `grad`.
    fn step(&mut self, w: f32, grad: f32) -> f32;
}
