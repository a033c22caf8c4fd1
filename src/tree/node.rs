//! Defines the inner representation
//! of the decision tree classifier.
use crate::{Classifier, Prediction, Sample};
use crate::error::TreeError;

use serde::{Serialize, Deserialize};

use std::fmt;


/// The value assigned to the root node in place of an incoming value.
pub(super) const ROOT_VALUE: &str = "root";


/// Enumeration of `BranchNode` and `LeafNode`.
///
/// Every node records the entropy of the class labels over the records
/// that reached it, the parent's split value that routed them here
/// (`"root"` for the root), and the number of such records.
/// A branch additionally holds its split feature and one child per
/// value of that feature observed during training;
/// a leaf holds the majority class label instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that routes records to its children
    /// by the value of its split feature.
    Branch(BranchNode),


    /// A node that has no child and predicts a class label.
    Leaf(LeafNode),
}


/// Represents the branch nodes of the decision tree.
/// Each `BranchNode` has one child per observed value
/// of its split feature, in first-encountered row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) split_feature: String,
    pub(super) children: Vec<Node>,
    pub(super) entropy: f64,
    pub(super) incoming: String,
    pub(super) n_sample: usize,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        split_feature: String,
        children: Vec<Node>,
        entropy: f64,
        incoming: String,
        n_sample: usize,
    ) -> Self
    {
        Self { split_feature, children, entropy, incoming, n_sample, }
    }


    /// Returns the child whose incoming value equals `value`,
    /// if such a child exists.
    #[inline]
    pub fn route(&self, value: &str) -> Option<&Node> {
        self.children.iter()
            .find(|child| child.incoming_value() == value)
    }
}


/// Represents the leaf nodes of the decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: String,
    pub(super) entropy: f64,
    pub(super) incoming: String,
    pub(super) n_sample: usize,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the label
    /// given to this function.
    #[inline]
    pub(super) fn from_raw(
        label: String,
        entropy: f64,
        incoming: String,
        n_sample: usize,
    ) -> Self
    {
        Self { label, entropy, incoming, n_sample, }
    }
}


impl Node {
    /// Construct a leaf node from the given arguments.
    #[inline]
    pub(super) fn leaf(
        label: String,
        entropy: f64,
        incoming: String,
        n_sample: usize,
    ) -> Self
    {
        Self::Leaf(LeafNode::from_raw(label, entropy, incoming, n_sample))
    }


    /// Construct a branch node from the given arguments.
    #[inline]
    pub(super) fn branch(
        split_feature: String,
        children: Vec<Node>,
        entropy: f64,
        incoming: String,
        n_sample: usize,
    ) -> Self
    {
        Self::Branch(BranchNode::from_raw(
            split_feature, children, entropy, incoming, n_sample,
        ))
    }


    /// Returns `true` when this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Returns the parent's split value that routed records
    /// into this node, or `"root"` for the root node.
    #[inline]
    pub fn incoming_value(&self) -> &str {
        match self {
            Node::Branch(node) => &node.incoming,
            Node::Leaf(node) => &node.incoming,
        }
    }


    /// Returns the number of training records that reached this node.
    #[inline]
    pub fn n_sample(&self) -> usize {
        match self {
            Node::Branch(node) => node.n_sample,
            Node::Leaf(node) => node.n_sample,
        }
    }


    /// Returns the class entropy of the training records
    /// that reached this node. A pure node has entropy `0.0`.
    #[inline]
    pub fn entropy(&self) -> f64 {
        match self {
            Node::Branch(node) => node.entropy,
            Node::Leaf(node) => node.entropy,
        }
    }


    /// Returns the feature this node splits on,
    /// or `None` for a leaf.
    #[inline]
    pub fn split_feature(&self) -> Option<&str> {
        match self {
            Node::Branch(node) => Some(&node.split_feature),
            Node::Leaf(_) => None,
        }
    }


    /// Returns the predicted class label of this node,
    /// or `None` for a branch.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Branch(_) => None,
            Node::Leaf(node) => Some(&node.label),
        }
    }


    /// Returns the children of this node.
    /// A leaf has no children.
    #[inline]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Branch(node) => &node.children[..],
            Node::Leaf(_) => &[],
        }
    }


    /// Returns the number of leaves of this sub-tree.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Branch(node) => {
                node.children.iter()
                    .map(Node::n_leaves)
                    .sum::<usize>()
            },
            Node::Leaf(_) => 1_usize,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(node) => {
                1 + node.children.iter()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
            Node::Leaf(_) => 0,
        }
    }
}


impl Classifier for LeafNode {
    #[inline]
    fn predict(&self, _sample: &Sample, _row: usize)
        -> Result<Prediction<'_>, TreeError>
    {
        Ok(Prediction::Label(&self.label))
    }
}


impl Classifier for BranchNode {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize)
        -> Result<Prediction<'_>, TreeError>
    {
        let feature = sample.feature(&self.split_feature)
            .ok_or_else(|| {
                TreeError::MissingFeature(self.split_feature.clone())
            })?;

        match self.route(&feature[row]) {
            Some(child) => child.predict(sample, row),
            None => Ok(Prediction::Unclassifiable),
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize)
        -> Result<Prediction<'_>, TreeError>
    {
        match self {
            Node::Branch(ref node) => node.predict(sample, row),
            Node::Leaf(ref node) => node.predict(sample, row),
        }
    }
}


impl fmt::Display for Node {
    /// Renders the identity of a single node.
    /// The rendering is stable and differs between siblings,
    /// so it can serve as a node key for external diagram builders.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "value= {}", self.incoming_value())?;
        writeln!(f, "samples= {}", self.n_sample())?;
        writeln!(f, "entropy= {:.4}", self.entropy())?;
        match self {
            Node::Branch(node) => {
                writeln!(f, "split= {}", node.split_feature)?;
                write!(f, "children= {}", node.children.len())
            },
            Node::Leaf(node) => {
                writeln!(f, "children= 0")?;
                write!(f, "class= {}", node.label)
            },
        }
    }
}
