use crate::shape::Shape;

/// All errors that can occur within elman.
///
/// Every failure is a precondition violation at the call site: operand shapes
/// that don't conform, indices outside the matrix, nonsensical arguments, or
/// network inputs that disagree with the network's fixed dimensions.
/// Using a single error type across the workspace simplifies propagation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Two operands whose shapes don't satisfy the operation's algebraic rule
    /// (e.g. adding [2, 3] + [3, 2], or a matmul with mismatched inner dims).
    #[error("shape mismatch in {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// Row, column, or element index outside `[0, len)`.
    #[error("index out of range: {index} for {axis} of length {len}")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    /// Construction or initialization given a nonsensical argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network input whose shape disagrees with the network's dimensions.
    #[error("input mismatch: {what} expected {expected}, got {got}")]
    InputMismatch {
        what: &'static str,
        expected: Shape,
        got: Shape,
    },

    /// Element count mismatch when building a matrix from a flat vec.
    #[error("element count mismatch: shape {shape} requires {expected} elements, got {got}")]
    ElementCountMismatch {
        shape: Shape,
        expected: usize,
        got: usize,
    },
}

impl Error {
    /// Create an `InvalidArgument` error from any string message.
    pub fn invalid(s: impl Into<String>) -> Self {
        Error::InvalidArgument(s.into())
    }
}

/// Convenience Result type used throughout elman.
pub type Result<T> = std::result::Result<T, Error>;

/// Early return with a formatted `InvalidArgument` error.
/// Usage: `bail!("low ({}) must not exceed high ({})", low, high)`
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::InvalidArgument(format!($($arg)*)))
    };
}
