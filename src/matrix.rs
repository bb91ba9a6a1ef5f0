use core::fmt;
use std::ops::{Index, IndexMut};

use crate::element::{Element, ElementMut, Scalar};
use crate::error::{MatError, MatResult};
use crate::shape::Shape;

/// A dense row-major matrix.
///
/// `E` is either an arithmetic type (the matrix owns its values) or an alias
/// `&A` / `&mut A` into another matrix's storage, in which case the matrix is
/// a view: reads and writes go straight through to the source.
#[derive(Clone, Debug)]
pub struct Matrix<E: Element> {
    pub(crate) data: Vec<E>,
    pub(crate) rows: usize,
    pub(crate) columns: usize,
}

pub type MatrixView<'a, A> = Matrix<&'a A>;

pub type MatrixViewMut<'a, A> = Matrix<&'a mut A>;

impl<E: Element> Default for Matrix<E> {
    fn default() -> Self {
        Matrix::new()
    }
}

impl<E: Element> Matrix<E> {
    pub fn new() -> Self {
        Matrix {
            data: Vec::new(),
            rows: 0,
            columns: 0,
        }
    }

    pub(crate) fn from_parts(data: Vec<E>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.elem_count());
        Matrix {
            data,
            rows: shape.rows,
            columns: shape.columns,
        }
    }

    /// Fills a `rows x columns` matrix in row-major order from `iter`.
    ///
    /// Extra items are ignored; a short iterator is an error.
    pub fn from_shape_iter<I>(rows: usize, columns: usize, iter: I) -> MatResult<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let shape = Shape::new(rows, columns);
        let data: Vec<E> = iter.into_iter().take(shape.elem_count()).collect();
        if data.len() != shape.elem_count() {
            return Err(MatError::mismatch(
                "from_shape_iter",
                shape,
                Shape::new(1, data.len()),
            ));
        }
        Ok(Self::from_parts(data, shape))
    }

    pub fn from_shape_vec(rows: usize, columns: usize, data: Vec<E>) -> MatResult<Self> {
        let shape = Shape::new(rows, columns);
        if data.len() != shape.elem_count() {
            return Err(MatError::mismatch(
                "from_shape_vec",
                shape,
                Shape::new(1, data.len()),
            ));
        }
        Ok(Self::from_parts(data, shape))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.columns)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn at(&self, row: usize, column: usize) -> MatResult<&E::Scalar> {
        match self.shape().offset(row, column) {
            Some(k) => Ok(self.data[k].value()),
            None => Err(MatError::out_of_range(row, column, self.shape())),
        }
    }

    #[inline]
    pub(crate) fn value_at_offset(&self, k: usize) -> E::Scalar {
        *self.data[k].value()
    }

    pub fn to_owned_matrix(&self) -> Matrix<E::Scalar> {
        Matrix {
            data: self.data.iter().map(|e| *e.value()).collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn cast<B: Scalar>(&self) -> Matrix<B> {
        Matrix {
            data: self.data.iter().map(|e| B::cast_from(*e.value())).collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<E::Scalar>> {
        if self.columns == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data
            .chunks(self.columns)
            .map(|row| row.iter().map(|e| *e.value()).collect())
            .collect()
    }
}

impl<E: ElementMut> Matrix<E> {
    pub fn at_mut(&mut self, row: usize, column: usize) -> MatResult<&mut E::Scalar> {
        let shape = self.shape();
        match shape.offset(row, column) {
            Some(k) => Ok(self.data[k].value_mut()),
            None => Err(MatError::out_of_range(row, column, shape)),
        }
    }

    pub fn set(&mut self, row: usize, column: usize, value: E::Scalar) -> MatResult<()> {
        *self.at_mut(row, column)? = value;
        Ok(())
    }
}

impl<A: Scalar> Matrix<A> {
    pub fn from_elem(rows: usize, columns: usize, value: A) -> Self {
        Matrix {
            data: vec![value; rows * columns],
            rows,
            columns,
        }
    }

    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::from_elem(rows, columns, A::zero())
    }

    pub fn ones(rows: usize, columns: usize) -> Self {
        Self::from_elem(rows, columns, A::one())
    }

    pub fn from_row(values: Vec<A>) -> Self {
        let columns = values.len();
        Matrix {
            data: values,
            rows: 1,
            columns,
        }
    }

    /// One matrix row per inner vector. Short rows are padded with
    /// `A::default()` up to the longest row.
    pub fn from_rows(rows: Vec<Vec<A>>) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let n = rows.len();
        let mut data = Vec::with_capacity(n * columns);
        for mut row in rows {
            row.resize(columns, A::default());
            data.extend(row);
        }
        Matrix {
            data,
            rows: n,
            columns,
        }
    }

    pub fn convert_from<E: Element>(other: &Matrix<E>) -> Self {
        other.cast()
    }

    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [A] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<A> {
        self.data
    }
}

impl<A: Scalar> From<Vec<A>> for Matrix<A> {
    fn from(values: Vec<A>) -> Self {
        Matrix::from_row(values)
    }
}

impl<A: Scalar> From<Vec<Vec<A>>> for Matrix<A> {
    fn from(rows: Vec<Vec<A>>) -> Self {
        Matrix::from_rows(rows)
    }
}

impl<E: Element> Index<(usize, usize)> for Matrix<E> {
    type Output = E::Scalar;

    fn index(&self, (row, column): (usize, usize)) -> &E::Scalar {
        match self.at(row, column) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<E: ElementMut> IndexMut<(usize, usize)> for Matrix<E> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut E::Scalar {
        match self.at_mut(row, column) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<E, E2> PartialEq<Matrix<E2>> for Matrix<E>
where
    E: Element,
    E2: Element<Scalar = E::Scalar>,
{
    fn eq(&self, other: &Matrix<E2>) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.value() == b.value())
    }
}

impl<E: Element> fmt::Display for Matrix<E> {
    /// One line per row, every value right-aligned in a field of width 5
    /// unless the formatter asks for another width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(5);
        for i in 0..self.rows {
            for j in 0..self.columns {
                let v = self.data[i * self.columns + j].value();
                write!(f, "{:>w$}", v, w = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let m: Matrix<i32> = Matrix::default();
        assert!(m.is_empty());
        assert_eq!(m.shape(), Shape::new(0, 0));
        assert_eq!(m.to_string(), "");
    }

    #[test]
    fn test_from_elem() {
        let m = Matrix::from_elem(3, 4, 5);
        assert_eq!(m.len(), 12);
        assert!(m.as_slice().iter().all(|&v| v == 5));
    }

    #[test]
    fn test_from_rows_pads() {
        let m = Matrix::from_rows(vec![vec![1i32, 2, 3], vec![4]]);
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 0, 0]);

        let m: Matrix<f64> = Matrix::from_rows(vec![vec![], vec![]]);
        assert_eq!(m.shape(), Shape::new(2, 0));
        assert_eq!(m.to_rows(), vec![Vec::<f64>::new(), Vec::new()]);
    }

    #[test]
    fn test_from_shape_iter_short() {
        let r = Matrix::from_shape_iter(2, 2, vec![1i32, 2, 3]);
        assert!(matches!(r, Err(MatError::DimensionMismatch { .. })));
        let m = Matrix::from_shape_iter(1, 2, 0..10i32).unwrap();
        assert_eq!(m.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_at_out_of_range() {
        let m = Matrix::from_elem(3, 4, 1.0f64);
        assert_eq!(
            m.at(4, 1),
            Err(MatError::OutOfRange {
                row: 4,
                column: 1,
                shape: Shape::new(3, 4)
            })
        );
        assert!(m.at(1, 5).is_err());
        assert_eq!(m.at(2, 3), Ok(&1.0));
    }

    #[test]
    fn test_set_and_index() {
        let mut m = Matrix::<i32>::zeros(2, 2);
        m.set(1, 0, 7).unwrap();
        m[(0, 1)] = 3;
        assert_eq!(m[(1, 0)], 7);
        assert_eq!(m.to_rows(), vec![vec![0, 3], vec![7, 0]]);
        assert!(m.set(2, 0, 1).is_err());
    }

    #[test]
    #[should_panic(expected = "exceeds matrix dimensions")]
    fn test_index_panics() {
        let m = Matrix::from_elem(1, 1, 0u8);
        let _ = m[(0, 1)];
    }

    #[test]
    fn test_cast_and_eq() {
        let m = Matrix::from_rows(vec![vec![1.5f64, -2.5], vec![3.0, 4.9]]);
        let c: Matrix<i32> = m.cast();
        assert_eq!(c.as_slice(), &[1, -2, 3, 4]);
        let back = Matrix::<f64>::convert_from(&c);
        assert_eq!(back, Matrix::from_rows(vec![vec![1.0, -2.0], vec![3.0, 4.0]]));
        assert_ne!(back, m);
        assert_ne!(back, Matrix::<f64>::zeros(4, 1));
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1i32, -2], vec![30, 4]]);
        assert_eq!(m.to_string(), "    1   -2\n   30    4\n");
        assert_eq!(format!("{:3}", m), "  1 -2\n 30  4\n");
    }
}
