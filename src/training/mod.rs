mod builder;
mod report;
mod state;
mod trainer;

pub use builder::TrainerBuilder;
pub use report::{EpochReport, TrainingReport};
pub use state::TrainingState;
pub use trainer::Trainer;
