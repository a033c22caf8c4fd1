use std::path::Path;

use super::sample_struct::Sample;
use crate::error::TreeError;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file of categorical
/// values to [`Sample`]. Other formats are not supported yet.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// # use arbol::prelude::*;
/// # fn run() -> Result<(), TreeError> {
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()?;
/// # Ok(())
/// # }
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the class label.
    /// Leave it unset to read an unlabeled sample
    /// (e.g., records to classify).
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}



impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Sample, TreeError>`.
    /// This method consumes `self.`
    ///
    /// # Panics
    /// Panics when the file name is not set.
    pub fn read(self) -> Result<Sample, TreeError> {
        let Some(file) = self.file else {
            panic!("The file name for the csv file is not set");
        };

        let sample = Sample::from_csv(file, self.has_header)?;

        match self.target {
            Some(target) => sample.set_target(target.as_ref()),
            None => Ok(sample),
        }
    }
}
