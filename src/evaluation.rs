//! Measures the performance of a trained classifier
//! against labeled data.

/// Defines accuracy and loss metrics.
pub(crate) mod metrics;

/// Defines a train/test holdout split.
pub(crate) mod split;


pub use metrics::{
    accuracy,
    zero_one_loss,
};

pub use split::TrainTestSplit;
