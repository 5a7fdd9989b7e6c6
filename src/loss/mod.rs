mod loss_fn;
mod mse;

pub use loss_fn::LossFn;
pub use mse::{compute_gradient, compute_loss, Mse};
