// Matrix: dense, row-major 2-D array of f64
//
// This is the whole numeric substrate of elman. The shape is fixed at
// construction; the contents are mutable only through `set`, `set_row`, and
// the two in-place accumulators (`add_inplace`, `sub_inplace`). Every other
// operation returns a new matrix.
//
// SHAPE RULES:
//   add / sub / mul (Hadamard)  : both operands have identical shape
//   matmul [m, k] @ [k, n]      : inner dims agree, result [m, n]
//   transpose [m, n]            : result [n, m]
//
// A violated rule is reported as Error::ShapeMismatch naming the operation.
// Index errors are Error::IndexOutOfRange; nonsensical arguments (low > high,
// unknown axis, ragged literal rows) are Error::InvalidArgument.
//
// Kernels are plain nested loops; matrices here are a few dozen elements wide.

use std::fmt;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{Error, Result};
use crate::shape::Shape;

/// Element-wise binary operations between two same-shaped matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
        }
    }

    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
        }
    }
}

/// A dense 2-D matrix of `f64` values in row-major order.
///
/// # Example
/// ```
/// use elman_core::Matrix;
///
/// let x = Matrix::from_rows(vec![vec![1.0, 0.0], vec![3.0, 4.0]])?;
/// let y = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
/// let z = x.matmul(&y)?;
/// assert_eq!(z.shape(), elman_core::Shape::new(2, 2));
/// assert_eq!(z.get(1, 1)?, 3.0 * 6.0 + 4.0 * 8.0);
/// # Ok::<(), elman_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    shape: Shape,
}

impl Matrix {
    // Constructors

    /// Build a matrix from a flat row-major vec.
    pub fn from_vec(shape: impl Into<Shape>, data: Vec<f64>) -> Result<Self> {
        let shape = shape.into();
        if data.len() != shape.elem_count() {
            return Err(Error::ElementCountMismatch {
                shape,
                expected: shape.elem_count(),
                got: data.len(),
            });
        }
        Ok(Matrix { data, shape })
    }

    /// Build a matrix from a literal list of rows. All rows must have the
    /// same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                crate::bail!(
                    "ragged rows: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                );
            }
            data.extend(row);
        }
        Self::from_vec((n_rows, n_cols), data)
    }

    /// A matrix with every element equal to `value`.
    pub fn full(shape: impl Into<Shape>, value: f64) -> Self {
        let shape = shape.into();
        Matrix {
            data: vec![value; shape.elem_count()],
            shape,
        }
    }

    pub fn zeros(shape: impl Into<Shape>) -> Self {
        Self::full(shape, 0.0)
    }

    pub fn ones(shape: impl Into<Shape>) -> Self {
        Self::full(shape, 1.0)
    }

    /// A matrix filled from U(low, high) using the caller's generator.
    ///
    /// Fails with `InvalidArgument` if `low > high`, either bound is not
    /// finite, or the width `high - low` overflows. `low == high` yields a
    /// constant matrix.
    pub fn random<R: Rng + ?Sized>(
        shape: impl Into<Shape>,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            crate::bail!("random bounds must be finite, got [{}, {}]", low, high);
        }
        if low > high {
            crate::bail!("random: low ({}) must not exceed high ({})", low, high);
        }
        if !(high - low).is_finite() {
            crate::bail!("random: range [{}, {}] is too wide to sample", low, high);
        }
        let shape = shape.into();
        let dist = Uniform::new_inclusive(low, high);
        let data = (0..shape.elem_count()).map(|_| dist.sample(rng)).collect();
        Ok(Matrix { data, shape })
    }

    // Accessors

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// The underlying row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    fn check_row(&self, r: usize) -> Result<()> {
        if r >= self.shape.rows {
            return Err(Error::IndexOutOfRange {
                axis: "row",
                index: r,
                len: self.shape.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, c: usize) -> Result<()> {
        if c >= self.shape.cols {
            return Err(Error::IndexOutOfRange {
                axis: "col",
                index: c,
                len: self.shape.cols,
            });
        }
        Ok(())
    }

    /// Element at (r, c).
    pub fn get(&self, r: usize, c: usize) -> Result<f64> {
        self.check_row(r)?;
        self.check_col(c)?;
        Ok(self.data[self.shape.offset(r, c)])
    }

    /// Overwrite element (r, c).
    pub fn set(&mut self, r: usize, c: usize, value: f64) -> Result<()> {
        self.check_row(r)?;
        self.check_col(c)?;
        let idx = self.shape.offset(r, c);
        self.data[idx] = value;
        Ok(())
    }

    /// Row `r` as an independent `[1, cols]` matrix.
    ///
    /// Always a copy: later writes to either matrix never show through the
    /// other, which keeps the forward pass's state history intact for BPTT.
    pub fn row(&self, r: usize) -> Result<Matrix> {
        self.check_row(r)?;
        let start = self.shape.offset(r, 0);
        let data = self.data[start..start + self.shape.cols].to_vec();
        Ok(Matrix {
            data,
            shape: Shape::new(1, self.shape.cols),
        })
    }

    /// Column `c` as an independent `[rows, 1]` matrix.
    pub fn column(&self, c: usize) -> Result<Matrix> {
        self.check_col(c)?;
        let data = (0..self.shape.rows)
            .map(|r| self.data[self.shape.offset(r, c)])
            .collect();
        Ok(Matrix {
            data,
            shape: Shape::new(self.shape.rows, 1),
        })
    }

    /// Replace row `r` in place with the contents of a `[1, cols]` matrix.
    pub fn set_row(&mut self, r: usize, row: &Matrix) -> Result<()> {
        self.check_row(r)?;
        let expected = Shape::new(1, self.shape.cols);
        if row.shape != expected {
            return Err(Error::ShapeMismatch {
                op: "set_row",
                lhs: expected,
                rhs: row.shape,
            });
        }
        let start = self.shape.offset(r, 0);
        self.data[start..start + self.shape.cols].copy_from_slice(&row.data);
        Ok(())
    }

    // Element-wise binary ops

    fn check_same_shape(&self, rhs: &Matrix, op: &'static str) -> Result<()> {
        if self.shape != rhs.shape {
            return Err(Error::ShapeMismatch {
                op,
                lhs: self.shape,
                rhs: rhs.shape,
            });
        }
        Ok(())
    }

    fn binary_op(&self, rhs: &Matrix, op: BinaryOp) -> Result<Matrix> {
        self.check_same_shape(rhs, op.name())?;
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(&a, &b)| op.apply(a, b))
            .collect();
        Ok(Matrix {
            data,
            shape: self.shape,
        })
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.binary_op(rhs, BinaryOp::Add)
    }

    /// Element-wise difference.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.binary_op(rhs, BinaryOp::Sub)
    }

    /// Element-wise (Hadamard) product.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix> {
        self.binary_op(rhs, BinaryOp::Mul)
    }

    // In-place accumulation
    //
    // The backward pass and the parameter update accumulate into matrices
    // they own; these avoid one allocation per step.

    fn binary_op_inplace(&mut self, rhs: &Matrix, op: BinaryOp) -> Result<&mut Self> {
        self.check_same_shape(rhs, op.name())?;
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = op.apply(*a, b);
        }
        Ok(self)
    }

    /// `self += rhs`, returning `self` for chaining.
    pub fn add_inplace(&mut self, rhs: &Matrix) -> Result<&mut Self> {
        self.binary_op_inplace(rhs, BinaryOp::Add)
    }

    /// `self -= rhs`, returning `self` for chaining.
    pub fn sub_inplace(&mut self, rhs: &Matrix) -> Result<&mut Self> {
        self.binary_op_inplace(rhs, BinaryOp::Sub)
    }

    // Scalar and unary ops

    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape,
        }
    }

    /// Multiply every element by `scalar`.
    pub fn mul_scalar(&self, scalar: f64) -> Matrix {
        self.map(|x| x * scalar)
    }

    /// Clamp every element into `[low, high]`.
    pub fn clamp(&self, low: f64, high: f64) -> Result<Matrix> {
        if low > high {
            crate::bail!("clamp: low ({}) must not exceed high ({})", low, high);
        }
        Ok(self.map(|x| x.clamp(low, high)))
    }

    /// Element-wise hyperbolic tangent.
    pub fn tanh(&self) -> Matrix {
        self.map(f64::tanh)
    }

    /// Derivative of tanh expressed in terms of its output.
    ///
    /// `self` must already hold activated values `y = tanh(x)`; the result is
    /// `1 - y²`, the usual backprop shortcut that avoids recomputing tanh.
    pub fn tanh_derivative(&self) -> Matrix {
        self.map(|y| 1.0 - y * y)
    }

    /// Element-wise power: self^exponent.
    pub fn powf(&self, exponent: f64) -> Matrix {
        self.map(|x| x.powf(exponent))
    }

    // Linear algebra

    /// Matrix product `[m, k] @ [k, n] -> [m, n]`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.shape.cols != rhs.shape.rows {
            return Err(Error::ShapeMismatch {
                op: "matmul",
                lhs: self.shape,
                rhs: rhs.shape,
            });
        }
        let (m, k, n) = (self.shape.rows, self.shape.cols, rhs.shape.cols);
        let mut data = vec![0.0; m * n];
        // i-k-j order walks both operands row-major.
        for i in 0..m {
            for p in 0..k {
                let a = self.data[i * k + p];
                let rhs_row = &rhs.data[p * n..(p + 1) * n];
                let out_row = &mut data[i * n..(i + 1) * n];
                for (o, &b) in out_row.iter_mut().zip(rhs_row) {
                    *o += a * b;
                }
            }
        }
        Ok(Matrix {
            data,
            shape: Shape::new(m, n),
        })
    }

    /// A new matrix with rows and columns swapped.
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = (self.shape.rows, self.shape.cols);
        let mut data = vec![0.0; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }
        Matrix {
            data,
            shape: self.shape.transposed(),
        }
    }

    // Reductions

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Average of all elements. NaN for an empty matrix.
    pub fn mean(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    /// Index of the maximum along `axis`, as plain indices.
    ///
    /// - axis 0: for each column, the row index of its maximum (`cols` entries)
    /// - axis 1: for each row, the column index of its maximum (`rows` entries)
    ///
    /// Ties resolve to the lowest index.
    pub fn argmax_indices(&self, axis: usize) -> Result<Vec<usize>> {
        let (rows, cols) = (self.shape.rows, self.shape.cols);
        let (outer, inner) = match axis {
            0 => (cols, rows),
            1 => (rows, cols),
            _ => crate::bail!("argmax: axis {} out of range for a 2-D matrix", axis),
        };
        if inner == 0 && outer > 0 {
            crate::bail!("argmax over an empty axis of shape {}", self.shape);
        }
        let at = |o: usize, i: usize| {
            if axis == 0 {
                self.data[i * cols + o]
            } else {
                self.data[o * cols + i]
            }
        };
        let indices = (0..outer)
            .map(|o| {
                let mut best = 0;
                for i in 1..inner {
                    if at(o, i) > at(o, best) {
                        best = i;
                    }
                }
                best
            })
            .collect();
        Ok(indices)
    }

    /// Index of the maximum along `axis`, as a vector-shaped matrix:
    /// `[1, cols]` for axis 0 and `[rows, 1]` for axis 1.
    pub fn argmax(&self, axis: usize) -> Result<Matrix> {
        let indices = self.argmax_indices(axis)?;
        let shape = if axis == 0 {
            Shape::new(1, indices.len())
        } else {
            Shape::new(indices.len(), 1)
        };
        let data = indices.into_iter().map(|i| i as f64).collect();
        Matrix::from_vec(shape, data)
    }

    // Comparison

    /// True if both shapes match and every element differs by at most `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl fmt::Display for Matrix {
    /// One bracketed row per line, e.g.
    /// ```text
    /// [1, 0]
    /// [3, 4]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.shape.rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for c in 0..self.shape.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                let v = self.data[self.shape.offset(r, c)];
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, v)?,
                    None => write!(f, "{}", v)?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn x() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 0.0], vec![3.0, 4.0]]).unwrap()
    }

    fn y() -> Matrix {
        Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_from_vec_count_mismatch() {
        let err = Matrix::from_vec((2, 2), vec![1.0; 3]).unwrap_err();
        assert_eq!(
            err,
            Error::ElementCountMismatch {
                shape: Shape::new(2, 2),
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn test_elementwise() {
        assert_eq!(x().add(&y()).unwrap().as_slice(), &[6.0, 6.0, 10.0, 12.0]);
        assert_eq!(x().sub(&y()).unwrap().as_slice(), &[-4.0, -6.0, -4.0, -4.0]);
        assert_eq!(x().mul(&y()).unwrap().as_slice(), &[5.0, 0.0, 21.0, 32.0]);
    }

    #[test]
    fn test_elementwise_shape_mismatch() {
        let a = Matrix::zeros((2, 3));
        let b = Matrix::zeros((3, 2));
        assert_eq!(
            a.add(&b).unwrap_err(),
            Error::ShapeMismatch {
                op: "add",
                lhs: Shape::new(2, 3),
                rhs: Shape::new(3, 2)
            }
        );
    }

    #[test]
    fn test_matmul() {
        // [[1,0],[3,4]] @ [[5,6],[7,8]] = [[5,6],[43,50]]
        let z = x().matmul(&y()).unwrap();
        assert_eq!(z.as_slice(), &[5.0, 6.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_rectangular() {
        let a = Matrix::from_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec((3, 1), vec![1.0, 0.0, -1.0]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), Shape::new(2, 1));
        assert_eq!(c.as_slice(), &[-2.0, -2.0]);
        assert!(b.matmul(&a).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_row_is_a_copy() {
        let mut m = x();
        let r = m.row(1).unwrap();
        m.set(1, 0, 100.0).unwrap();
        assert_eq!(r.as_slice(), &[3.0, 4.0]);
        assert_eq!(r.shape(), Shape::new(1, 2));
    }

    #[test]
    fn test_set_row() {
        let mut m = Matrix::zeros((3, 2));
        m.set_row(2, &Matrix::from_vec((1, 2), vec![7.0, 9.0]).unwrap())
            .unwrap();
        assert_eq!(m.as_slice(), &[0.0, 0.0, 0.0, 0.0, 7.0, 9.0]);
        assert!(matches!(
            m.set_row(3, &Matrix::zeros((1, 2))),
            Err(Error::IndexOutOfRange { index: 3, len: 3, .. })
        ));
        assert!(matches!(
            m.set_row(0, &Matrix::zeros((1, 3))),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_get_out_of_range() {
        let m = x();
        assert!(matches!(
            m.get(0, 2),
            Err(Error::IndexOutOfRange { axis: "col", .. })
        ));
        assert!(matches!(
            m.get(2, 0),
            Err(Error::IndexOutOfRange { axis: "row", .. })
        ));
    }

    #[test]
    fn test_inplace_chaining() {
        let mut acc = Matrix::zeros((2, 2));
        acc.add_inplace(&x()).unwrap().add_inplace(&y()).unwrap();
        acc.sub_inplace(&Matrix::ones((2, 2))).unwrap();
        assert_eq!(acc.as_slice(), &[5.0, 5.0, 9.0, 11.0]);
        assert!(acc.add_inplace(&Matrix::zeros((1, 2))).is_err());
    }

    #[test]
    fn test_clamp() {
        let m = Matrix::from_vec((1, 4), vec![-10.0, -1.0, 1.0, 10.0]).unwrap();
        assert_eq!(m.clamp(-5.0, 5.0).unwrap().as_slice(), &[-5.0, -1.0, 1.0, 5.0]);
        assert!(m.clamp(1.0, -1.0).is_err());
    }

    #[test]
    fn test_tanh_derivative_from_activated() {
        let pre = Matrix::from_vec((1, 3), vec![-2.0, 0.0, 0.5]).unwrap();
        let d = pre.tanh().tanh_derivative();
        for (&x, &g) in pre.as_slice().iter().zip(d.as_slice()) {
            let c = x.cosh();
            assert!((g - 1.0 / (c * c)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pow_mean_sum() {
        let m = x();
        assert_eq!(m.powf(2.0).as_slice(), &[1.0, 0.0, 9.0, 16.0]);
        assert_eq!(m.sum(), 8.0);
        assert_eq!(m.mean(), 2.0);
    }

    #[test]
    fn test_argmax_axes() {
        // [[1, 0], [3, 4]]
        let m = x();
        let a0 = m.argmax(0).unwrap();
        assert_eq!(a0.shape(), Shape::new(1, 2));
        assert_eq!(a0.as_slice(), &[1.0, 1.0]);
        let a1 = m.argmax(1).unwrap();
        assert_eq!(a1.shape(), Shape::new(2, 1));
        assert_eq!(a1.as_slice(), &[0.0, 1.0]);
        assert!(m.argmax(2).is_err());
    }

    #[test]
    fn test_argmax_ties_take_first() {
        let m = Matrix::from_vec((1, 3), vec![2.0, 2.0, 1.0]).unwrap();
        assert_eq!(m.argmax_indices(1).unwrap(), vec![0]);
    }

    #[test]
    fn test_random_range_and_seed() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Matrix::random((4, 5), -0.1, 0.1, &mut rng).unwrap();
        assert!(a.as_slice().iter().all(|v| (-0.1..=0.1).contains(v)));

        let mut rng = StdRng::seed_from_u64(7);
        let b = Matrix::random((4, 5), -0.1, 0.1, &mut rng).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_rejects_bad_range() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Matrix::random((2, 2), 1.0, -1.0, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Matrix::random((2, 2), 0.0, f64::INFINITY, &mut rng).is_err());
        let c = Matrix::random((2, 2), 0.5, 0.5, &mut rng).unwrap();
        assert_eq!(c, Matrix::full((2, 2), 0.5));
    }

    #[test]
    fn test_random_rejects_overflowing_width() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Matrix::random((2, 2), -f64::MAX, f64::MAX, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Matrix::random((2, 2), f64::MAX, f64::MAX, &mut rng).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", x()), "[1, 0]\n[3, 4]");
        let m = Matrix::from_vec((1, 2), vec![0.5, 0.26]).unwrap();
        assert_eq!(format!("{:.1}", m), "[0.5, 0.3]");
    }
}
