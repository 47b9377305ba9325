//! # elman-nn
//!
//! A single-layer vanilla tanh RNN trained with backpropagation through time.
//!
//! 1. **RNN**: forward pass, BPTT, clipped SGD update, inference
//! 2. **init**: seeded uniform / Xavier weight initializers
//! 3. **loss**: per-step MSE summed over the sequence
//! 4. **optim**: elementwise gradient clipping and plain SGD
//! 5. **metrics**: argmax classes and sequence accuracy
//! 6. **trainer**: fixed-epoch training loop with epoch logs
//!
//! All numeric work goes through [`elman_core::Matrix`].

pub mod init;
pub mod loss;
pub mod metrics;
pub mod optim;
pub mod rnn;
pub mod trainer;

pub use init::InitScheme;
pub use loss::{mse_loss, sequence_mse_loss};
pub use metrics::{accuracy, argmax_classes, sequence_accuracy};
pub use optim::{GradClip, Sgd};
pub use rnn::{ForwardMode, ForwardPass, Gradients, RNNConfig, RNNParams, DEFAULT_ETA, RNN};
pub use trainer::{EpochLog, TrainConfig, TrainResult, Trainer};
