use std::fmt;

/// A training health warning raised by the `TrendAnalyzer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The loss kept rising for several consecutive epochs.
    Divergence,
    /// The loss barely moved since the last epoch.
    Stagnation,
}

impl Warning {
    pub fn summary(&self) -> &'static str {
        match self {
            Warning::Divergence => "Loss increasing continuously",
            Warning::Stagnation => "No significant learning detected",
        }
    }

    pub fn cause(&self) -> &'static str {
        match self {
            Warning::Divergence => "Learning rate too high",
            Warning::Stagnation => "Learning rate too low or poor data",
        }
    }

    pub fn action(&self) -> Option<&'static str> {
        match self {
            Warning::Divergence => Some("Reduce learning rate"),
            Warning::Stagnation => None,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.summary(), self.cause())
    }
}
