//! # elman-data
//!
//! Synthetic sequence data for elman networks.
//!
//! This crate provides:
//! - [`one_hot`] / [`one_hot_series`]: one-hot encoded matrices
//! - [`SequenceDataset`] trait: indexed collection of (inputs, targets) pairs
//! - [`ShiftTask`]: inputs cycling through classes, targets shifted by a
//!   fixed offset (the classic "learn the offset" sanity task)

pub mod dataset;
pub mod onehot;

pub use dataset::{SequenceDataset, SequencePair, ShiftTask};
pub use onehot::{one_hot, one_hot_series};
