use polars::prelude::*;

use std::collections::HashSet;
use std::ops::Index;
use std::slice::Iter;


/// A named column of categorical values.
/// Values are compared by equality; no ordering is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Feature name
    name: String,
    /// Feature values, one per record.
    values: Vec<String>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self { name: name.to_string(), values: Vec::new(), }
    }


    /// Construct a feature from a name and its values.
    pub fn from_values<S, T>(name: S, values: T) -> Self
        where S: ToString,
              T: IntoIterator,
              T::Item: ToString,
    {
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();

        Self { name: name.to_string(), values, }
    }


    /// Convert a `polars::Series` of strings into a `Feature`.
    ///
    /// # Panics
    /// Panics when the series is not of dtype `Utf8`
    /// or contains null entries.
    pub fn from_series(series: &Series) -> Self {
        let name = series.name().to_string();
        let values = series.utf8()
            .expect("The column is not a dtype Utf8")
            .into_iter()
            .map(|v| {
                v.expect("The column contains null entries")
                    .to_string()
            })
            .collect::<Vec<_>>();

        Self { name, values, }
    }


    /// Append a value to this feature.
    pub fn append<T: ToString>(&mut self, value: T) {
        self.values.push(value.to_string());
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if this feature has no items.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns an iterator over the values of this feature.
    pub fn iter(&self) -> Iter<'_, String> {
        self.values.iter()
    }


    /// Returns the number of distinct values in this feature.
    pub fn distinct_value_count(&self) -> usize {
        self.values.iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }


    /// Returns the distinct values among the given rows,
    /// in first-encountered order.
    pub fn distinct_values(&self, rows: &[usize]) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for &i in rows {
            let v = &self.values[i][..];
            if seen.insert(v) {
                values.push(v);
            }
        }
        values
    }


    /// Returns a copy of this feature restricted to the given rows,
    /// preserving their order.
    pub(crate) fn take_rows(&self, rows: &[usize]) -> Self {
        let values = rows.iter()
            .map(|&i| self.values[i].clone())
            .collect::<Vec<_>>();

        Self { name: self.name.clone(), values, }
    }
}


impl Index<usize> for Feature {
    type Output = str;


    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}
