// Evaluation Metrics
//
// For one-hot sequence tasks each output row is read as a class: the index
// of its largest entry. Accuracy is the fraction of time steps whose
// predicted class matches the target's.

use elman_core::error::{Error, Result};
use elman_core::Matrix;

/// Per-row argmax of a `[rows, n_classes]` matrix.
pub fn argmax_classes(m: &Matrix) -> Result<Vec<usize>> {
    m.argmax_indices(1)
}

/// Classification accuracy: fraction of correct predictions.
pub fn accuracy(predictions: &[usize], targets: &[usize]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let correct = predictions
        .iter()
        .zip(targets.iter())
        .filter(|(p, t)| p == t)
        .count();
    correct as f64 / predictions.len() as f64
}

/// Fraction of time steps where `outputs` and `targets` agree on the argmax.
///
/// Both must have the same shape.
pub fn sequence_accuracy(outputs: &Matrix, targets: &Matrix) -> Result<f64> {
    if outputs.shape() != targets.shape() {
        return Err(Error::ShapeMismatch {
            op: "sequence_accuracy",
            lhs: outputs.shape(),
            rhs: targets.shape(),
        });
    }
    Ok(accuracy(
        &argmax_classes(outputs)?,
        &argmax_classes(targets)?,
    ))
}
