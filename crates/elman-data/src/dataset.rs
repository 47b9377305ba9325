// SequenceDataset: indexed collection of (inputs, targets) sequence pairs

use elman_core::{Matrix, Result};

use crate::onehot::one_hot_series;

/// One training example: an input sequence and its target sequence, both
/// time-major (`[series_len, features]`).
#[derive(Debug, Clone, PartialEq)]
pub struct SequencePair {
    pub inputs: Matrix,
    pub targets: Matrix,
}

/// A dataset is an indexed collection of sequence pairs.
pub trait SequenceDataset {
    /// Total number of pairs in the dataset.
    fn len(&self) -> usize;

    /// Whether the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the pair at position `index`.
    fn get(&self, index: usize) -> Result<SequencePair>;

    /// Optional human-readable name.
    fn name(&self) -> &str {
        "sequence-dataset"
    }
}

/// Cyclic one-hot sequences whose targets run `shift` classes ahead of the
/// inputs.
///
/// Pair `start` has input row `i` hot at `(i + start) % dim` and target row
/// `i` hot at `(i + start + shift) % dim`. There are `dim` distinct starts.
///
/// ```
/// use elman_data::{SequenceDataset, ShiftTask};
///
/// let task = ShiftTask::new(10, 10, 3)?;
/// let pair = task.get(0)?;
/// assert_eq!(pair.inputs.argmax_indices(1)?[0], 0);
/// assert_eq!(pair.targets.argmax_indices(1)?[0], 3);
/// # Ok::<(), elman_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTask {
    series_len: usize,
    dim: usize,
    shift: usize,
}

impl ShiftTask {
    /// `series_len` and `dim` must be positive.
    pub fn new(series_len: usize, dim: usize, shift: usize) -> Result<Self> {
        if series_len == 0 || dim == 0 {
            elman_core::bail!(
                "shift task needs positive series_len and dim, got {} and {}",
                series_len,
                dim
            );
        }
        Ok(ShiftTask {
            series_len,
            dim,
            shift,
        })
    }

    pub fn series_len(&self) -> usize {
        self.series_len
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    /// The pair starting at class `start` (any value; taken modulo `dim`).
    pub fn pair(&self, start: usize) -> Result<SequencePair> {
        let start = start % self.dim;
        let target_start = (start + self.shift % self.dim) % self.dim;
        Ok(SequencePair {
            inputs: one_hot_series(self.series_len, self.dim, start)?,
            targets: one_hot_series(self.series_len, self.dim, target_start)?,
        })
    }
}

impl SequenceDataset for ShiftTask {
    fn len(&self) -> usize {
        self.dim
    }

    fn get(&self, index: usize) -> Result<SequencePair> {
        if index >= self.dim {
            return Err(elman_core::Error::IndexOutOfRange {
                axis: "start",
                index,
                len: self.dim,
            });
        }
        self.pair(index)
    }

    fn name(&self) -> &str {
        "shift"
    }
}
