// One-hot encoding
//
// Class labels become rows with a single 1 at the label's index:
//   labels [2, 0] with 3 classes → [[0, 0, 1], [1, 0, 0]]

use elman_core::{Error, Matrix, Result};

/// One row per label, each with a single 1 at the label's column.
///
/// Fails with `InvalidArgument` if `num_classes` is zero or any label is
/// outside `[0, num_classes)`.
pub fn one_hot(labels: &[usize], num_classes: usize) -> Result<Matrix> {
    if num_classes == 0 {
        elman_core::bail!("one_hot: num_classes must be positive");
    }
    let mut m = Matrix::zeros((labels.len(), num_classes));
    for (row, &label) in labels.iter().enumerate() {
        if label >= num_classes {
            return Err(Error::invalid(format!(
                "one_hot: label {} at row {} outside [0, {})",
                label, row, num_classes
            )));
        }
        m.set(row, label, 1.0)?;
    }
    Ok(m)
}

/// A `[len, dim]` series whose row `i` is hot at `(i + offset) % dim`.
///
/// Any `offset` is accepted; the sum is reduced modulo `dim` without
/// overflowing.
pub fn one_hot_series(len: usize, dim: usize, offset: usize) -> Result<Matrix> {
    if dim == 0 {
        elman_core::bail!("one_hot_series: dim must be positive");
    }
    let offset = offset % dim;
    let labels: Vec<usize> = (0..len).map(|i| (i % dim + offset) % dim).collect();
    one_hot(&labels, dim)
}
