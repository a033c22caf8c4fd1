use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;

use super::feature_struct::Feature;
use crate::error::TreeError;


/// Struct `Sample` holds a batch of categorical records in column format.
///
/// A sample is a fixed, ordered set of named features,
/// optionally with one column designated as the class label
/// via [`Sample::set_target`].
/// Once constructed, a sample is never mutated by the tree algorithms;
/// they operate on row-index subsets of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Option<Feature>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from a list of features.
    /// The class column is not set;
    /// call [`Sample::set_target`] to designate one.
    ///
    /// # Panics
    /// Panics when the features have unequal lengths.
    pub fn from_features(features: Vec<Feature>) -> Self {
        let n_sample = features.first()
            .map(Feature::len)
            .unwrap_or(0);
        assert!(
            features.iter().all(|feat| feat.len() == n_sample),
            "All columns must have the same number of rows"
        );

        let n_feature = features.len();
        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Self {
            name_to_index, features, target: None, n_sample, n_feature,
        }
    }


    /// Convert a `polars::DataFrame` into a `Sample`.
    /// Every column must be of dtype `Utf8`.
    /// This method takes the ownership of `data`.
    ///
    /// # Panics
    /// Panics when a column is not of dtype `Utf8`
    /// or contains null entries.
    pub fn from_dataframe(data: DataFrame) -> Self {
        let features = data.get_columns()
            .iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        Self::from_features(features)
    }


    /// Read a CSV format file of categorical values into a `Sample`.
    /// Without a header row, the columns are named `Feat. [i]`.
    pub fn from_csv<P>(file: P, mut has_header: bool) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut features: Vec<Feature> = Vec::new();
        let mut header_pending = has_header;

        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if header_pending {
                features = line.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
                header_pending = false;
                continue;
            }

            let xs = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();

            // if the header does not exist,
            // construct a dummy header.
            if !has_header {
                features = (1..=xs.len()).map(|i| {
                        let name = format!("Feat. [{i}]");
                        Feature::new(name)
                    })
                    .collect::<Vec<_>>();
                has_header = true;
            }

            for (feat, x) in features.iter_mut().zip(xs) {
                feat.append(x);
            }
        }

        Ok(Self::from_features(features))
    }


    /// Set the feature of name `target` as the class column.
    /// The column is removed from `self.features`.
    /// This method consumes `self`.
    pub fn set_target<S: AsRef<str>>(mut self, target: S)
        -> Result<Self, TreeError>
    {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| TreeError::MissingClassColumn(target.to_string()))?;

        self.target = Some(self.features.remove(pos));
        self.n_feature -= 1;

        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Ok(self)
    }


    /// Returns the class column, if one was designated.
    pub fn target(&self) -> Option<&Feature> {
        self.target.as_ref()
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature of the given name, if it exists.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Option<&Feature> {
        self.name_to_index.get(name.as_ref())
            .map(|&k| &self.features[k])
    }


    /// Returns the pair of the number of records and
    /// the number of features.
    /// The class column is not counted as a feature.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a copy of this sample restricted to the given rows,
    /// preserving their order.
    /// The class column, if set, is restricted as well.
    pub fn subset(&self, rows: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.take_rows(rows))
            .collect::<Vec<_>>();
        let target = self.target.as_ref()
            .map(|t| t.take_rows(rows));

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: rows.len(),
            n_feature: self.n_feature,
        }
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .expect("The feature of the given name does not exist");
        &self.features[k]
    }
}
