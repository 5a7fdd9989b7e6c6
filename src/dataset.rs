use ndarray::{Array1, ArrayView1};

use crate::{RegressionErr, Result};

/// A single input, single target dataset.
///
/// Both sequences are guaranteed to be non empty and of the same length, so
/// the loss and gradient evaluators never have to check it themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array1<f32>,
    y: Array1<f32>,
}

/// The inputs `1, 2, ..., n` and their targets `slope * x`.
pub fn linear_samples(n: usize, slope: f32) -> (Vec<f32>, Vec<f32>) {
    let x: Vec<f32> = (1..=n).map(|i| i as f32).collect();
    let y = x.iter().map(|x| slope * x).collect();
    (x, y)
}

impl Dataset {
    /// Returns a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The inputs.
    /// * `y` - The targets, one for each input.
    ///
    /// # Errors
    /// Returns `RegressionErr::InvalidDataset` if either sequence is empty or their lengths differ,
    /// and `RegressionErr::NonFiniteSample` if any value is NaN or infinite.
    pub fn new(x: Vec<f32>, y: Vec<f32>) -> Result<Self> {
        let (x_len, y_len) = (x.len(), y.len());
        if x_len == 0 || x_len != y_len {
            return Err(RegressionErr::InvalidDataset { x_len, y_len });
        }

        if let Some(index) = x
            .iter()
            .zip(&y)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(RegressionErr::NonFiniteSample { index });
        }

        Ok(Self {
            x: Array1::from_vec(x),
            y: Array1::from_vec(y),
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns both views, inputs first.
    pub fn views(&self) -> (ArrayView1<'_, f32>, ArrayView1<'_, f32>) {
        (self.x.view(), self.y.view())
    }
}
