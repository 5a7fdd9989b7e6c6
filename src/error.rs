use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum RegressionErr {
    /// The inputs and targets are empty or of different lengths.
    InvalidDataset { x_len: usize, y_len: usize },
    /// The sample at `index` holds a NaN or infinite value.
    NonFiniteSample { index: usize },
    /// The weight or the loss stopped being a finite number.
    NonFinite { epoch: usize, weight: f32, loss: f32 },
    /// A configuration value is out of range.
    InvalidConfig(String),
    Io(io::Error),
    Parse(serde_json::Error),
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::InvalidDataset { x_len, y_len } if *x_len == 0 || *y_len == 0 => {
                write!(f, "the dataset is empty (x has {x_len} values, y has {y_len})")
            }
            RegressionErr::InvalidDataset { x_len, y_len } => write!(
                f,
                "there's a size mismatch between x and y, got {x_len} and {y_len}"
            ),
            RegressionErr::NonFiniteSample { index } => {
                write!(f, "the sample at index {index} is not a finite number")
            }
            RegressionErr::NonFinite {
                epoch,
                weight,
                loss,
            } => write!(
                f,
                "training diverged to a non finite value at epoch {epoch} (weight: {weight}, loss: {loss})"
            ),
            RegressionErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            RegressionErr::Io(e) => write!(f, "io error: {e}"),
            RegressionErr::Parse(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl Error for RegressionErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RegressionErr::Io(e) => Some(e),
            RegressionErr::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RegressionErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RegressionErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
