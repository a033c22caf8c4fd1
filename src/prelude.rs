//! Exports the standard items of this crate.
//!
pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
};


pub use crate::tree::{
    // The tree-growing algorithm
    DecisionTree,
    DecisionTreeClassifier,

    // The tree structure
    Node,

    // Entropy computations
    class_entropy,
    conditional_entropy,
};


pub use crate::hypothesis::{
    Classifier,
    Prediction,
};


pub use crate::evaluation::{
    accuracy,
    zero_one_loss,
    TrainTestSplit,
};


pub use crate::error::TreeError;
