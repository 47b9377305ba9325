// Optimization: gradient clipping and plain SGD
//
// Each update is:
//
//   param ← param − eta · clamp(grad, low, high)
//
// Clipping is elementwise, a cheap bound on exploding gradients in place of
// norm rescaling. The default range is [-5, 5].

use elman_core::error::Result;
use elman_core::Matrix;

/// Elementwise clipping range applied to every gradient before the update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradClip {
    low: f64,
    high: f64,
}

impl Default for GradClip {
    fn default() -> Self {
        GradClip {
            low: -5.0,
            high: 5.0,
        }
    }
}

impl GradClip {
    /// A clip range `[low, high]`. Both bounds must be finite and ordered.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            elman_core::bail!("clip bounds must be finite, got [{}, {}]", low, high);
        }
        if low > high {
            elman_core::bail!("clip: low ({}) must not exceed high ({})", low, high);
        }
        Ok(GradClip { low, high })
    }

    /// Symmetric range `[-bound, bound]`.
    pub fn symmetric(bound: f64) -> Result<Self> {
        Self::new(-bound, bound)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Clamp every element of `grad` into the range.
    pub fn apply(&self, grad: &Matrix) -> Result<Matrix> {
        grad.clamp(self.low, self.high)
    }
}

/// Stochastic gradient descent with a fixed learning rate.
///
/// Clipping is a separate pass ([`GradClip::apply`]); `Sgd` only scales and
/// subtracts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    eta: f64,
}

impl Sgd {
    /// `eta` must be finite and non-negative. Zero scores without moving.
    pub fn new(eta: f64) -> Result<Self> {
        if !eta.is_finite() || eta < 0.0 {
            elman_core::bail!("learning rate must be finite and non-negative, got {}", eta);
        }
        Ok(Sgd { eta })
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// The scaled step `eta · grad` without applying it.
    pub fn delta(&self, grad: &Matrix) -> Matrix {
        grad.mul_scalar(self.eta)
    }

    /// `param -= eta · grad`, in place. Fails before mutating on a shape
    /// mismatch.
    pub fn step(&self, param: &mut Matrix, grad: &Matrix) -> Result<()> {
        param.sub_inplace(&self.delta(grad))?;
        Ok(())
    }
}
