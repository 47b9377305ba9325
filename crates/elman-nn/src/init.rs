// nn::init: Parameter Initialization Utilities
//
// Standalone functions for creating initialized parameter matrices. Every
// random initializer takes the generator explicitly, so a network seeded
// with a fixed value always starts from the same weights.
//
// AVAILABLE INITIALIZERS:
//
//   uniform(shape, low, high, rng)         : U(low, high)
//   symmetric_uniform(shape, bound, rng)   : U(-bound, bound)
//   xavier_uniform(shape, gain, rng)       : Glorot uniform
//   zeros(shape)                           : all zeros (biases)

use rand::Rng;

use elman_core::error::Result;
use elman_core::shape::Shape;
use elman_core::Matrix;

/// How weight matrices are drawn at construction and on `reset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitScheme {
    /// U(-bound, bound) regardless of shape.
    Uniform { bound: f64 },
    /// Glorot uniform: bound = gain * sqrt(6 / (fan_in + fan_out)).
    Xavier { gain: f64 },
}

impl Default for InitScheme {
    fn default() -> Self {
        InitScheme::Uniform { bound: 0.1 }
    }
}

impl InitScheme {
    /// Reject non-finite or non-positive scale parameters.
    pub fn validate(&self) -> Result<()> {
        let (name, v) = match *self {
            InitScheme::Uniform { bound } => ("bound", bound),
            InitScheme::Xavier { gain } => ("gain", gain),
        };
        if !v.is_finite() || v <= 0.0 {
            elman_core::bail!("init {} must be finite and positive, got {}", name, v);
        }
        Ok(())
    }

    /// Draw a weight matrix of the given shape.
    pub fn weight<R: Rng + ?Sized>(&self, shape: impl Into<Shape>, rng: &mut R) -> Result<Matrix> {
        match *self {
            InitScheme::Uniform { bound } => symmetric_uniform(shape, bound, rng),
            InitScheme::Xavier { gain } => xavier_uniform(shape, gain, rng),
        }
    }
}

/// Initialize a matrix from a uniform distribution U(low, high).
pub fn uniform<R: Rng + ?Sized>(
    shape: impl Into<Shape>,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Matrix> {
    Matrix::random(shape, low, high, rng)
}

/// Initialize a matrix from U(-bound, bound).
pub fn symmetric_uniform<R: Rng + ?Sized>(
    shape: impl Into<Shape>,
    bound: f64,
    rng: &mut R,
) -> Result<Matrix> {
    uniform(shape, -bound, bound, rng)
}

/// Xavier (Glorot) uniform initialization.
///
/// For a `[fan_in, fan_out]` weight (inputs multiply from the left, `x @ W`),
/// draws from U(-a, a) where a = gain * sqrt(6 / (fan_in + fan_out)).
pub fn xavier_uniform<R: Rng + ?Sized>(
    shape: impl Into<Shape>,
    gain: f64,
    rng: &mut R,
) -> Result<Matrix> {
    let shape = shape.into();
    let fans = (shape.rows + shape.cols).max(1) as f64;
    let a = gain * (6.0 / fans).sqrt();
    symmetric_uniform(shape, a, rng)
}

/// All zeros. Biases start here.
pub fn zeros(shape: impl Into<Shape>) -> Matrix {
    Matrix::zeros(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let m = uniform((20, 50), -2.0, 3.0, &mut rng).unwrap();
        assert!(m.as_slice().iter().all(|&x| (-2.0..=3.0).contains(&x)));
    }

    #[test]
    fn test_symmetric_uniform_mean_near_zero() {
        let mut rng = StdRng::seed_from_u64(2);
        let m = symmetric_uniform((100, 100), 0.1, &mut rng).unwrap();
        assert!(m.mean().abs() < 0.01, "mean {} too far from 0", m.mean());
    }

    #[test]
    fn test_xavier_uniform_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        // fan_in + fan_out = 100 → bound = sqrt(6/100)
        let m = xavier_uniform((40, 60), 1.0, &mut rng).unwrap();
        let bound = (6.0 / 100.0_f64).sqrt();
        for &x in m.as_slice() {
            assert!(x.abs() <= bound + 1e-12, "value {} out of ±{}", x, bound);
        }
    }

    #[test]
    fn test_zeros_values() {
        let m = zeros((1, 5));
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_scheme_validate() {
        assert!(InitScheme::default().validate().is_ok());
        assert!(InitScheme::Uniform { bound: 0.0 }.validate().is_err());
        assert!(InitScheme::Xavier { gain: f64::NAN }.validate().is_err());
    }
}
