use crate::error::{NeuralError, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `learning_rate` — step size for every per-sample update
/// - `shuffle`       — reorder the dataset with the run's random source at
///                     the start of every epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub shuffle: bool,
}

impl TrainConfig {
    /// Creates a `TrainConfig` that shuffles every epoch.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            shuffle: true,
        }
    }

    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.learning_rate.is_finite() && self.learning_rate > 0.0 {
            Ok(())
        } else {
            Err(NeuralError::InvalidLearningRate(self.learning_rate))
        }
    }
}
