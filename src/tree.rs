//! The files in `tree/` directory define the decision tree algorithm,
//! the tree structure, and the resulting classifier.

// Provides entropy computations.
pub(crate) mod entropy;
// Provides the tree node structure.
pub(crate) mod node;
// Provides the tree-growing algorithm.
pub(crate) mod algorithm;
// Provides the resulting classifier.
pub(crate) mod classifier;


pub use node::{Node, BranchNode, LeafNode};
pub use algorithm::DecisionTree;
pub use classifier::DecisionTreeClassifier;

pub use entropy::{class_entropy, conditional_entropy};
