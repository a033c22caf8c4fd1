//! Entropy computations for growing a decision tree.

use rayon::prelude::*;

use std::collections::HashMap;

use crate::sample::{Feature, Sample};
use crate::error::TreeError;


/// Returns the base-2 Shannon entropy of the given label counts.
/// An empty map has entropy `0.0`.
#[inline(always)]
pub(crate) fn entropic_impurity(counts: &HashMap<&str, usize>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;
    if total <= 0f64 || counts.is_empty() { return 0f64; }

    counts.values()
        .map(|&count| {
            let r = count as f64 / total;
            if r <= 0f64 { 0f64 } else { -r * r.log2() }
        })
        .sum::<f64>()
}


/// Returns the entropy of the class labels over the given rows.
#[inline]
pub(crate) fn entropy_over(target: &Feature, rows: &[usize]) -> f64 {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &i in rows {
        *counts.entry(&target[i]).or_insert(0) += 1;
    }

    entropic_impurity(&counts)
}


/// Returns the expected class entropy after splitting the given rows
/// on `feature`: each subset's entropy, weighted by its share of rows.
#[inline]
pub(crate) fn conditional_entropy_over(
    feature: &Feature,
    target: &Feature,
    rows: &[usize],
) -> f64
{
    let n = rows.len() as f64;

    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for &i in rows {
        groups.entry(&feature[i]).or_default().push(i);
    }

    groups.values()
        .map(|subset| {
            let p = subset.len() as f64 / n;
            p * entropy_over(target, subset)
        })
        .sum::<f64>()
}


/// Returns the index (into `sample.features()`) of the feature
/// among `remaining` that minimizes the conditional class entropy,
/// i.e., maximizes the information gain.
///
/// The per-feature scores are computed in parallel;
/// the final scan is sequential so that ties are always broken
/// by the first feature in column order.
#[inline]
pub(super) fn best_split(
    sample: &Sample,
    target: &Feature,
    rows: &[usize],
    remaining: &[usize],
) -> usize
{
    let features = sample.features();
    let scores = remaining.par_iter()
        .map(|&k| conditional_entropy_over(&features[k], target, rows))
        .collect::<Vec<_>>();

    let mut best = 0;
    for (j, score) in scores.iter().enumerate().skip(1) {
        if *score < scores[best] {
            best = j;
        }
    }

    remaining[best]
}


/// Computes the base-2 Shannon entropy of the class column of `sample`.
///
/// Returns `0.0` exactly when every record shares one class value.
/// The entropy is bounded by `log2(k)` for `k` distinct classes.
pub fn class_entropy(sample: &Sample) -> Result<f64, TreeError> {
    let target = sample.target()
        .ok_or(TreeError::TargetNotSet)?;
    let rows = (0..sample.shape().0).collect::<Vec<_>>();

    Ok(entropy_over(target, &rows))
}


/// Computes the expected class entropy of `sample`
/// after splitting on the feature named `feature`.
///
/// The difference `class_entropy - conditional_entropy`
/// is the information gain of the split.
pub fn conditional_entropy<S: AsRef<str>>(sample: &Sample, feature: S)
    -> Result<f64, TreeError>
{
    let feature = feature.as_ref();
    let target = sample.target()
        .ok_or(TreeError::TargetNotSet)?;
    let feat = sample.feature(feature)
        .ok_or_else(|| TreeError::MissingFeature(feature.to_string()))?;
    let rows = (0..sample.shape().0).collect::<Vec<_>>();

    Ok(conditional_entropy_over(feat, target, &rows))
}
