pub mod batch;
pub mod checked;
pub mod error;
pub mod fitness;
pub mod information_gain;
pub mod types;

pub use types::{Float, Label, Partition, Weighting};

pub use error::{Result, SplitGainError};

pub use batch::{evaluate_batch, try_evaluate_batch};
pub use checked::{try_evaluate, try_range};
pub use fitness::{FitnessFunction, InformationGain};
pub use information_gain::{evaluate, evaluate_counts, range};

#[cfg(test)]
mod proptests;
