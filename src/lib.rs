//! Single variable linear regression trained with batch gradient descent, with a debugger that
//! watches the loss and warns about divergence and stagnation.

pub mod config;
pub mod dataset;
pub mod debugger;
pub mod error;
pub mod loss;
pub mod optimization;
pub mod render;
pub mod training;

pub use error::{RegressionErr, Result};
