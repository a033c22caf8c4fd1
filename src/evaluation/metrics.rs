use crate::{Classifier, Prediction, Sample};
use crate::error::TreeError;


/// Computes the fraction of records of `sample`
/// whose predicted label equals the class label, in `[0, 1]`.
///
/// Unclassifiable records count as misclassified.
/// Returns `TreeError::EmptySample` when `sample` has no rows
/// and `TreeError::TargetNotSet` when it carries no class column.
pub fn accuracy<H>(f: &H, sample: &Sample) -> Result<f64, TreeError>
    where H: Classifier
{
    let n_sample = sample.shape().0;
    if n_sample == 0 {
        return Err(TreeError::EmptySample);
    }
    let target = sample.target()
        .ok_or(TreeError::TargetNotSet)?;

    let mut n_correct = 0_usize;
    for row in 0..n_sample {
        if let Prediction::Label(label) = f.predict(sample, row)? {
            if label == &target[row] {
                n_correct += 1;
            }
        }
    }

    Ok(n_correct as f64 / n_sample as f64)
}


/// Computes the fraction of misclassified records of `sample`,
/// i.e., `1.0 - accuracy`.
pub fn zero_one_loss<H>(f: &H, sample: &Sample) -> Result<f64, TreeError>
    where H: Classifier
{
    accuracy(f, sample).map(|acc| 1f64 - acc)
}
