//! # elman
//!
//! A single-layer recurrent neural network trained with backpropagation
//! through time, built on a hand-written dense matrix.
//!
//! This is the top-level facade crate that re-exports everything you need.
//!
//! ## Usage
//!
//! ```rust
//! use elman::prelude::*;
//!
//! let task = ShiftTask::new(10, 10, 3)?;
//! let pair = task.pair(0)?;
//! let mut rnn = RNN::from_config(RNNConfig::new(10, 10, 10, 10).seed(1))?;
//! let first = rnn.train(&pair.inputs, &pair.targets, 0.1, None)?;
//! let second = rnn.train(&pair.inputs, &pair.targets, 0.1, None)?;
//! assert!(second < first);
//! # Ok::<(), elman::Error>(())
//! ```
//!
//! ## Architecture
//!
//! | Crate | Purpose |
//! |-------|----------|
//! | `elman-core` | Matrix, Shape, Error |
//! | `elman-nn` | RNN, initializers, loss, clipping + SGD, metrics, Trainer |
//! | `elman-data` | One-hot encoding and the shift sequence task |

/// Re-export core types.
pub use elman_core::{Error, Matrix, Result, Shape};

/// Re-export the network, its training utilities, and metrics.
pub mod nn {
    pub use elman_nn::*;
}

/// Re-export synthetic sequence data.
pub mod data {
    pub use elman_data::*;
}

/// Prelude: import this for the most common types.
pub mod prelude {
    pub use crate::data::{one_hot, one_hot_series, SequenceDataset, SequencePair, ShiftTask};
    pub use crate::nn::{
        accuracy, argmax_classes, mse_loss, sequence_accuracy, sequence_mse_loss, EpochLog,
        ForwardMode, ForwardPass, GradClip, Gradients, InitScheme, RNNConfig, RNNParams, Sgd,
        TrainConfig, TrainResult, Trainer, DEFAULT_ETA, RNN,
    };
    pub use crate::{Error, Matrix, Result, Shape};
}
