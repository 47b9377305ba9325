use std::fmt;

// Shape: (rows, cols) of a dense matrix
//
// Every matrix in elman is 2-D, so the shape is a fixed pair rather than a
// variable-rank list. Sequences are laid out as [time_steps, features] and
// single vectors as [1, features]:
//   - inputs:  [series_len, input_dim]
//   - states:  [series_len + 1, hidden_dim]
//   - bias:    [1, hidden_dim]
//
// Storage is row-major: element (r, c) lives at offset r * cols + c.

/// Shape of a 2-D matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Total number of elements.
    pub fn elem_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The shape with rows and cols swapped.
    pub fn transposed(&self) -> Shape {
        Shape::new(self.cols, self.rows)
    }

    /// Row-major offset of element (r, c). Does not bounds-check.
    pub(crate) fn offset(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// Checked accessor for a dimension by axis (0 = rows, 1 = cols).
    pub fn dim(&self, axis: usize) -> crate::Result<usize> {
        match axis {
            0 => Ok(self.rows),
            1 => Ok(self.cols),
            _ => Err(crate::Error::invalid(format!(
                "axis {} out of range for a 2-D shape",
                axis
            ))),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

impl From<Shape> for (usize, usize) {
    fn from(s: Shape) -> Self {
        (s.rows, s.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elem_count() {
        let s = Shape::from((3, 4));
        assert_eq!(s.elem_count(), 12);
        assert_eq!(Shape::new(0, 7).elem_count(), 0);
    }

    #[test]
    fn test_row_major_offset() {
        let s = Shape::new(3, 4);
        // Row-major: row stride = 4, col stride = 1
        assert_eq!(s.offset(0, 0), 0);
        assert_eq!(s.offset(1, 0), 4);
        assert_eq!(s.offset(2, 3), 11);
    }

    #[test]
    fn test_transposed() {
        assert_eq!(Shape::new(2, 5).transposed(), Shape::new(5, 2));
    }

    #[test]
    fn test_dim() {
        let s = Shape::new(2, 5);
        assert_eq!(s.dim(0).unwrap(), 2);
        assert_eq!(s.dim(1).unwrap(), 5);
        assert!(s.dim(2).is_err());
    }

    #[test]
    fn test_display() {
        let s = Shape::from((3, 4));
        assert_eq!(format!("{}", s), "[3, 4]");
    }
}
