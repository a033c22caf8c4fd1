#![warn(missing_docs)]

//!
//! A crate that provides a decision tree classifier
//! for categorical (discrete-valued) tabular data.
//!
//! The tree is grown top-down by recursive partitioning:
//! at every node the feature whose split minimizes the expected
//! class entropy (equivalently, maximizes the information gain)
//! is chosen, one child is created per observed value of that feature,
//! and the recursion stops once a node becomes pure
//! or runs out of features.
//! Leaves predict the majority class of the rows that reached them.
//!
//! All choices are deterministic:
//! ties between candidate features are broken by column order,
//! and ties in the majority vote are broken by the label
//! encountered first in row order.
//!
//! # Example
//! ```
//! use arbol::prelude::*;
//!
//! let sample = Sample::from_features(vec![
//!     Feature::from_values("weather", ["sunny", "rainy", "rainy", "sunny"]),
//!     Feature::from_values("play",    ["no",    "yes",   "yes",   "no"   ]),
//! ]).set_target("play")?;
//!
//! let f = DecisionTree::new().fit(&sample)?;
//!
//! assert_eq!(accuracy(&f, &sample)?, 1.0);
//! # Ok::<(), TreeError>(())
//! ```

pub mod sample;
pub mod hypothesis;
pub mod tree;
pub mod evaluation;
pub mod error;
pub mod prelude;


pub use sample::{Feature, Sample, SampleReader};
pub use hypothesis::{Classifier, Prediction};
pub use tree::{DecisionTree, DecisionTreeClassifier, Node};
pub use evaluation::{accuracy, zero_one_loss, TrainTestSplit};
pub use error::TreeError;
