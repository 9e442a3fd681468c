//! Sample preprocessing and dataset orchestration.
//!
//! Composes the angle extractor and the quantizer into a per-sample
//! transform, then applies it over the train and test splits of an archive.
//! Only the train split is shuffled afterwards; test order stays as loaded
//! so evaluation runs are reproducible.

use serde::Serialize;

use crate::angles::{TraceError, turning_angles};
use crate::config::{ConfigError, PreprocessConfig};
use crate::dataset::{DatasetArchive, RawSample};
use crate::quantize::{Emission, quantize_angles};
use crate::shuffle::seeded_shuffle;

/// A quantized observation sequence with its class label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedSample {
    pub observations: Vec<Emission>,
    pub label: String,
}

/// Per-sample failures, passed through from the failing stage unchanged so
/// callers can tell extraction and quantization apart by kind.
#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Stateless sample preprocessor, parameterized by alphabet size.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    n_emission: usize,
}

/// Preprocessed train and test splits. `train` is shuffled, `test` keeps
/// archive order.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedSplits {
    pub train: Vec<ProcessedSample>,
    pub test: Vec<ProcessedSample>,
}

impl Preprocessor {
    pub fn new(config: &PreprocessConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            n_emission: config.n_emission,
        })
    }

    #[must_use]
    pub fn n_emission(&self) -> usize {
        self.n_emission
    }

    /// Quantized turning-angle observations for one trace; the label is
    /// passed through unchanged.
    pub fn preprocess_sample(&self, sample: &RawSample) -> Result<ProcessedSample, PreprocessError> {
        let angles = turning_angles(&sample.points)?;
        let observations = quantize_angles(&angles, self.n_emission)?;
        Ok(ProcessedSample {
            observations,
            label: sample.label.clone(),
        })
    }

    /// Preprocess both archive splits in order, then shuffle the train split
    /// with the given seed.
    ///
    /// Fail-fast: the first malformed sample aborts the run, no partial
    /// splits are returned.
    pub fn prepare_splits(
        &self,
        archive: &DatasetArchive,
        shuffle_seed: u64,
    ) -> Result<PreparedSplits, PreprocessError> {
        let train = self.preprocess_all(&archive.train)?;
        let test = self.preprocess_all(&archive.test)?;
        Ok(PreparedSplits {
            train: seeded_shuffle(train, shuffle_seed),
            test,
        })
    }

    fn preprocess_all(&self, samples: &[RawSample]) -> Result<Vec<ProcessedSample>, PreprocessError> {
        samples
            .iter()
            .map(|sample| self.preprocess_sample(sample))
            .collect()
    }
}
