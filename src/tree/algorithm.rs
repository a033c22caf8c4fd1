//! The decision tree growing algorithm.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::sample::{Feature, Sample};
use crate::error::TreeError;

use super::entropy::{best_split, entropy_over};
use super::node::{Node, ROOT_VALUE};
use super::classifier::DecisionTreeClassifier;


/// The decision tree algorithm for categorical data.
/// Given a sample with a designated class column,
/// [`DecisionTree`] outputs a [`DecisionTreeClassifier`]
/// that routes records by equality on discrete feature values.
///
/// At every node, the feature minimizing the conditional class entropy
/// (equivalently, maximizing the information gain) is chosen,
/// and one child is grown per value of that feature observed
/// at the node. A feature is split at most once per path,
/// so the tree depth is bounded by the number of features.
/// Growing stops at pure nodes and when no feature remains;
/// such leaves predict the majority class of their records.
///
/// # Example
/// ```no_run
/// use arbol::prelude::*;
///
/// # fn run() -> Result<(), TreeError> {
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::new()
///     .file(file)
///     .has_header(true)
///     .target_feature("class")
///     .read()?;
///
/// let f = DecisionTree::new().fit(&sample)?;
///
/// let train_acc = accuracy(&f, &sample)?;
/// println!("accuracy (train) is: {train_acc}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTree;


impl DecisionTree {
    /// Construct a new instance of [`DecisionTree`].
    #[inline]
    pub fn new() -> Self {
        Self
    }


    /// Grow a decision tree over `sample`
    /// and return the resulting classifier.
    ///
    /// The sample must have at least one record
    /// and a class column designated via [`Sample::set_target`];
    /// both are validated here, once,
    /// before the recursive construction starts.
    #[inline]
    pub fn fit(&self, sample: &Sample)
        -> Result<DecisionTreeClassifier, TreeError>
    {
        let (n_sample, n_feature) = sample.shape();
        if n_sample == 0 {
            return Err(TreeError::EmptySample);
        }
        let target = sample.target()
            .ok_or(TreeError::TargetNotSet)?;

        let rows = (0..n_sample).collect::<Vec<_>>();
        let remaining = (0..n_feature).collect::<Vec<_>>();

        let root = grow(
            sample, target, rows, remaining, ROOT_VALUE.to_string(),
        );

        Ok(DecisionTreeClassifier::from(root))
    }
}


/// Grow the sub-tree over the records in `rows`.
///
/// `remaining` holds the indices of the features not yet consumed
/// by ancestor splits, in column order.
/// Each call fully constructs and returns its own node;
/// the caller appends it into the parent's children.
/// Nodes are never mutated after being returned.
#[inline]
fn grow(
    sample: &Sample,
    target: &Feature,
    rows: Vec<usize>,
    remaining: Vec<usize>,
    incoming: String,
) -> Node
{
    let entropy = entropy_over(target, &rows);
    let n_sample = rows.len();

    // A pure node, or a node with no feature left to split on,
    // becomes a leaf predicting the majority class.
    if entropy == 0f64 || remaining.is_empty() {
        let label = majority_label(target, &rows);
        return Node::leaf(label, entropy, incoming, n_sample);
    }


    // Find the feature that maximizes the information gain.
    let split = best_split(sample, target, &rows, &remaining);
    let feature = &sample.features()[split];


    // A feature is consumed by the split
    // and never reused below this node.
    let rest = remaining.into_iter()
        .filter(|&k| k != split)
        .collect::<Vec<_>>();


    // One child per observed value, in first-encountered row order.
    // Subsets preserve row order, so the majority-vote tie-break
    // below this node stays deterministic.
    let mut children = Vec::new();
    for value in feature.distinct_values(&rows) {
        let subset = rows.iter()
            .copied()
            .filter(|&i| &feature[i] == value)
            .collect::<Vec<_>>();

        children.push(
            grow(sample, target, subset, rest.clone(), value.to_string())
        );
    }


    Node::branch(
        feature.name().to_string(), children, entropy, incoming, n_sample,
    )
}


/// Returns the class label with the highest frequency among `rows`.
/// Ties are broken by the label encountered first in row order.
#[inline]
fn majority_label(target: &Feature, rows: &[usize]) -> String {
    let mut counter: HashMap<&str, (usize, usize)> = HashMap::new();

    for (position, &i) in rows.iter().enumerate() {
        let entry = counter.entry(&target[i]).or_insert((0, position));
        entry.0 += 1;
    }

    counter.into_iter()
        .max_by_key(|&(_, (count, first_seen))| (count, Reverse(first_seen)))
        .map(|(label, _)| label.to_string())
        .expect("Tried a majority vote over an empty set of rows")
}
