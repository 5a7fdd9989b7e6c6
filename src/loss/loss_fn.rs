use ndarray::ArrayView1;

/// A loss over the single weight of a `y = w * x` model.
pub trait LossFn {
    fn loss(&self, w: f32, x: ArrayView1<f32>, y: ArrayView1<f32>) -> f32;

    /// The gradient of `loss` with respect to `w` without its constant factor, the learning
    /// rate absorbs it.
    fn loss_prime(&self, w: f32, x: ArrayView1<f32>, y: ArrayView1<f32>) -> f32;
}
