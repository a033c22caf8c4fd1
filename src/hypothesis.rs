//! Defines the classifier trait and the prediction type.

use std::fmt;

use crate::sample::Sample;
use crate::error::TreeError;


/// The outcome of classifying a single record.
///
/// A record routed to a branch whose observed values do not cover it
/// yields [`Prediction::Unclassifiable`],
/// which is distinguishable from every valid label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction<'a> {
    /// The predicted class label.
    Label(&'a str),

    /// The record holds a value unseen during training
    /// at some branch of the tree.
    Unclassifiable,
}


impl<'a> Prediction<'a> {
    /// Returns the predicted label, or `None` when unclassifiable.
    pub fn label(&self) -> Option<&'a str> {
        match self {
            Self::Label(label) => Some(label),
            Self::Unclassifiable => None,
        }
    }


    /// Returns `true` when the record could not be classified.
    pub fn is_unclassifiable(&self) -> bool {
        matches!(self, Self::Unclassifiable)
    }
}


impl fmt::Display for Prediction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => write!(f, "{label}"),
            Self::Unclassifiable => write!(f, "unclassifiable"),
        }
    }
}


/// A trait that defines the behavior of a classifier
/// over categorical records.
/// You only need to implement the `predict` method.
pub trait Classifier {
    /// Predicts the class label of the `row`-th record of `sample`.
    ///
    /// Returns `Ok(Prediction::Unclassifiable)` when the record
    /// holds a feature value unseen during training,
    /// and `Err(TreeError::MissingFeature)` when a feature required
    /// by the classifier is absent from the sample schema.
    fn predict(&self, sample: &Sample, row: usize)
        -> Result<Prediction<'_>, TreeError>;


    /// Predicts the class labels of all records of `sample`.
    fn predict_all(&self, sample: &Sample)
        -> Result<Vec<Prediction<'_>>, TreeError>
    {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Result<Vec<_>, _>>()
    }
}
