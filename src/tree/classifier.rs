//! Defines the decision tree classifier.
use crate::{Classifier, Prediction, Sample};
use crate::error::TreeError;


use super::node::Node;
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs;


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`].
///
/// The tree is fully materialized by [`DecisionTree::fit`]
/// and never mutated afterwards; classification and evaluation
/// traverse it read-only.
///
/// [`DecisionTree::fit`]: crate::tree::DecisionTree::fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, sample: &Sample, row: usize)
        -> Result<Prediction<'_>, TreeError>
    {
        self.root.predict(sample, row)
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node of the tree.
    /// External collaborators (e.g., diagram builders) can traverse
    /// the tree through [`Node::children`] from here.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Write the current decision tree to a JSON file.
    #[inline]
    pub fn to_json_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let json = serde_json::to_string(self)
            .map_err(std::io::Error::from)?;
        fs::write(path, json)
    }


    /// Read a decision tree from a JSON file
    /// written by [`DecisionTreeClassifier::to_json_file`].
    #[inline]
    pub fn from_json_file<P>(path: P) -> std::io::Result<Self>
        where P: AsRef<Path>
    {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(std::io::Error::from)
    }
}
