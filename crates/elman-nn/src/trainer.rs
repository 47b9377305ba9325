// Trainer: fixed-length training loop with epoch logs
//
// Repeats `RNN::train` on one (inputs, targets) pair:
//   1. For each epoch:
//      a. Forward pass, BPTT, clip, SGD update (one `train` call)
//      b. Record the pre-update loss
//      c. Every `log_every` epochs (and on the last), hand the log to the
//         caller's callback
//
// There is no convergence criterion: exactly `epochs` calls are made.

use std::fmt;

use elman_core::error::Result;
use elman_core::Matrix;

use crate::rnn::{DEFAULT_ETA, RNN};

/// Configuration for a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of `train` calls.
    pub epochs: usize,
    /// Learning rate passed to every call.
    pub eta: f64,
    /// Report every N epochs (0 = only the last one).
    pub log_every: usize,
    /// Initial hidden state for every call (zeros when `None`).
    pub prev_state: Option<Matrix>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            eta: DEFAULT_ETA,
            log_every: 10,
            prev_state: None,
        }
    }
}

impl TrainConfig {
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    pub fn log_every(mut self, n: usize) -> Self {
        self.log_every = n;
        self
    }

    pub fn prev_state(mut self, state: Matrix) -> Self {
        self.prev_state = Some(state);
        self
    }

    fn should_log(&self, epoch: usize) -> bool {
        let last = epoch + 1 == self.epochs;
        last || (self.log_every > 0 && epoch % self.log_every == 0)
    }
}

// Training result types

/// Log for a single training epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochLog {
    /// Epoch number (0-indexed).
    pub epoch: usize,
    /// Loss before this epoch's update.
    pub loss: f64,
}

/// Summary of a full training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainResult {
    /// One entry per epoch, in order.
    pub epochs: Vec<EpochLog>,
    /// Loss reported by the last `train` call (NaN if no epochs ran).
    pub final_loss: f64,
}

impl TrainResult {
    /// Loss reported by the first `train` call.
    pub fn first_loss(&self) -> Option<f64> {
        self.epochs.first().map(|l| l.loss)
    }
}

impl fmt::Display for TrainResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training complete: {} epochs", self.epochs.len())?;
        if let Some(first) = self.first_loss() {
            writeln!(f, "  first loss: {:.6}", first)?;
        }
        write!(f, "  final loss: {:.6}", self.final_loss)
    }
}

// Trainer

/// Runs a fixed number of training steps against one sequence pair.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Train without progress reporting.
    pub fn fit(&self, rnn: &mut RNN, inputs: &Matrix, targets: &Matrix) -> Result<TrainResult> {
        self.fit_with(rnn, inputs, targets, |_| {})
    }

    /// Train, calling `on_log` for every epoch selected by `log_every`.
    ///
    /// Stops at the first failing call and returns its error; the network
    /// keeps the updates of the epochs that completed.
    pub fn fit_with<F>(
        &self,
        rnn: &mut RNN,
        inputs: &Matrix,
        targets: &Matrix,
        mut on_log: F,
    ) -> Result<TrainResult>
    where
        F: FnMut(&EpochLog),
    {
        let mut epochs = Vec::with_capacity(self.config.epochs);
        for epoch in 0..self.config.epochs {
            let loss = rnn.train(
                inputs,
                targets,
                self.config.eta,
                self.config.prev_state.as_ref(),
            )?;
            let log = EpochLog { epoch, loss };
            if self.config.should_log(epoch) {
                on_log(&log);
            }
            epochs.push(log);
        }
        let final_loss = epochs.last().map_or(f64::NAN, |l| l.loss);
        Ok(TrainResult { epochs, final_loss })
    }
}
