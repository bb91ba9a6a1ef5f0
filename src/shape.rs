use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub const fn new(rows: usize, columns: usize) -> Shape {
        Shape { rows, columns }
    }

    pub fn elem_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub fn transposed(&self) -> Shape {
        Shape::new(self.columns, self.rows)
    }

    /// Row-major offset of `(row, column)`, or `None` outside the shape.
    #[inline]
    pub fn offset(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    pub fn len_of(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.rows,
            Axis::Columns => self.columns,
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from(d: (usize, usize)) -> Self {
        Shape::new(d.0, d.1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let s = Shape::new(3, 4);
        assert_eq!(s.offset(0, 0), Some(0));
        assert_eq!(s.offset(2, 3), Some(11));
        assert_eq!(s.offset(3, 0), None);
        assert_eq!(s.offset(0, 4), None);
        assert_eq!(s.elem_count(), 12);
        assert_eq!(s.transposed(), Shape::new(4, 3));
        assert_eq!(s.len_of(Axis::Columns), 4);
    }
}
