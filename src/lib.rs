pub mod activation;
pub mod app;
pub mod data;
pub mod error;
pub mod loss;
pub mod network;
pub mod random;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative_from_output};
pub use data::{DataItem, Dataset};
pub use error::{NeuralError, Result};
pub use loss::MseLoss;
pub use network::{Network, Shape};
pub use random::{shuffle, ParkMiller, RandomSource, RngSource};
pub use train::{train_loop, EpochStats, TrainConfig, Trainer};
