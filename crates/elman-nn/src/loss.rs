// Loss Functions
//
// 1. MSE (Mean Squared Error): mean((pred - target)²) over one time step.
// 2. Sequence MSE: the per-step MSE summed (not averaged) over the series.
//    This is the scalar `RNN::train` reports.
//
// The backward pass seeds each step with `out[t] - target[t]`, which is the
// gradient of the half sum of squared errors. Summed per-step MSE and that
// seed differ only by the constant factor output_dim / 2, so both decrease
// together.

use elman_core::error::{Error, Result};
use elman_core::Matrix;

fn check_shapes(op: &'static str, prediction: &Matrix, target: &Matrix) -> Result<()> {
    if prediction.shape() != target.shape() {
        return Err(Error::ShapeMismatch {
            op,
            lhs: prediction.shape(),
            rhs: target.shape(),
        });
    }
    Ok(())
}

/// Mean Squared Error: mean((prediction - target)²).
///
/// Both operands must have the same shape.
pub fn mse_loss(prediction: &Matrix, target: &Matrix) -> Result<f64> {
    check_shapes("mse_loss", prediction, target)?;
    Ok(prediction.sub(target)?.powf(2.0).mean())
}

/// Per-row MSE summed over rows.
///
/// `outputs` and `targets` are `[series_len, output_dim]`; each row is one
/// time step.
pub fn sequence_mse_loss(outputs: &Matrix, targets: &Matrix) -> Result<f64> {
    check_shapes("sequence_mse_loss", outputs, targets)?;
    let mut loss = 0.0;
    for t in 0..outputs.rows() {
        loss += mse_loss(&outputs.row(t)?, &targets.row(t)?)?;
    }
    Ok(loss)
}
