use rand::prelude::*;
use colored::Colorize;

use crate::Sample;

const WIDTH: usize = 9;

/// A struct that splits a sample into
/// a training/test pair for holdout evaluation.
/// # Example
/// ```no_run
/// use arbol::prelude::*;
///
/// # fn run() -> Result<(), TreeError> {
/// # let path = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(path)
///     .has_header(true)
///     .target_feature("class")
///     .read()?;
/// let (train, test) = TrainTestSplit::new(&sample)
///     .train_ratio(0.8)
///     .seed(777)
///     .shuffle()
///     .split();
///
/// let f = DecisionTree::new().fit(&train)?;
/// let train_acc = accuracy(&f, &train)?;
/// let test_acc = accuracy(&f, &test)?;
/// println!("[train: {train_acc}] [test: {test_acc}]");
/// # Ok(())
/// # }
/// ```
pub struct TrainTestSplit<'a> {
    train_size: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> TrainTestSplit<'a> {
    /// Construct a new instance of `TrainTestSplit.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let train_size = (n_sample as f64 * 0.8) as usize;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            seed: 1234,
            verbose: false,
            train_size,
            sample,
            ix,
        }
    }


    /// Set the ratio of the training sample.
    /// Default value is `0.8`.
    #[inline]
    pub fn train_ratio(mut self, ratio: f64) -> Self {
        assert!(
            0f64 < ratio && ratio < 1f64,
            "Training ratio should be in `(0, 1)`."
        );
        let n_sample = self.sample.shape().0 as f64;
        self.train_size = (ratio * n_sample) as usize;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default value is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `TrainTestSplit` prints the train/test sizes
    /// when generating the pair.
    /// Default value is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the sample before splitting.
    /// By default, `TrainTestSplit` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test pair.
    /// This method consumes `self.`
    #[inline]
    pub fn split(self) -> (Sample, Sample) {
        let train = self.sample.subset(&self.ix[..self.train_size]);
        let test = self.sample.subset(&self.ix[self.train_size..]);

        if self.verbose {
            let train_size = train.shape().0;
            let test_size = test.shape().0;
            println!(
                "{}    {}",
                format!("[TRAIN {train_size:>WIDTH$}]").bold().green(),
                format!("[TEST {test_size:>WIDTH$}]").bold().yellow(),
            );
        }

        (train, test)
    }
}
