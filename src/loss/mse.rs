use ndarray::{Array1, ArrayView1};

use super::LossFn;

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, w: f32, x: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        compute_loss(w, x, y)
    }

    fn loss_prime(&self, w: f32, x: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        compute_gradient(w, x, y)
    }
}

fn residuals(w: f32, x: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
    &x * w - &y
}

/// Computes `(1/n) * Σ (w * x[i] - y[i])^2`.
///
/// `x` and `y` must be non empty and of the same length, which `Dataset` guarantees.
pub fn compute_loss(w: f32, x: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
    residuals(w, x, y)
        .mapv(|e| e.powi(2))
        .mean()
        .unwrap_or_default()
}

/// Computes `(1/n) * Σ (w * x[i] - y[i]) * x[i]`, the derivative of the loss with respect to `w`
/// up to the constant factor of 2.
pub fn compute_gradient(w: f32, x: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
    (residuals(w, x, y) * &x).mean().unwrap_or_default()
}
