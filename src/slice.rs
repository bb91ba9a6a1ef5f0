//! Textual sub-matrix selection.
//!
//! A slice expression has the form `<rows>,<columns>` where each axis is one
//! of
//!
//! ```text
//! N        a single index
//! end      the last index
//! a:b      indices a..b, stop exclusive
//! a:end    indices a..len
//! :        the whole axis
//! ```
//!
//! Indices are ASCII decimal digits and whitespace is not accepted, so
//! `"0:2,1:3"` selects rows 0..2 and columns 1..3.

use std::ops::Range;
use std::str::FromStr;

use log::trace;

use crate::element::{Element, ElementMut};
use crate::error::{MatError, MatResult, SliceErrorKind};
use crate::matrix::{Matrix, MatrixView, MatrixViewMut};
use crate::shape::{Axis, Shape};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stop {
    Index(usize),
    End,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AxisExpr {
    Index(usize),
    End,
    Span(usize, Stop),
    Full,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AxisRange {
    pub start: usize,
    pub stop: usize,
}

impl AxisRange {
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.stop == self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

fn parse_index(s: &str) -> Result<usize, SliceErrorKind> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SliceErrorKind::BadAxis(s.to_string()));
    }
    s.parse::<usize>()
        .map_err(|_| SliceErrorKind::BadAxis(s.to_string()))
}

impl FromStr for AxisExpr {
    type Err = SliceErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ":" => return Ok(AxisExpr::Full),
            "end" => return Ok(AxisExpr::End),
            _ => {}
        }
        match s.split_once(':') {
            None => Ok(AxisExpr::Index(parse_index(s)?)),
            Some((start, stop)) => {
                let start = parse_index(start)?;
                let stop = match stop {
                    "end" => Stop::End,
                    n => Stop::Index(parse_index(n)?),
                };
                if let Stop::Index(stop) = stop {
                    if stop < start {
                        return Err(SliceErrorKind::Reversed { start, stop });
                    }
                }
                Ok(AxisExpr::Span(start, stop))
            }
        }
    }
}

impl AxisExpr {
    /// Resolves against an axis of length `len`. On failure returns the
    /// offending index.
    pub fn resolve(&self, len: usize) -> Result<AxisRange, usize> {
        let (start, stop) = match *self {
            AxisExpr::Index(i) if i < len => (i, i + 1),
            AxisExpr::Index(i) => return Err(i),
            AxisExpr::End => {
                if len == 0 {
                    return Err(0);
                }
                (len - 1, len)
            }
            AxisExpr::Span(start, Stop::Index(stop)) => (start, stop),
            AxisExpr::Span(start, Stop::End) => (start, len),
            AxisExpr::Full => (0, len),
        };
        if stop > len {
            return Err(stop - 1);
        }
        if start > stop {
            return Err(start);
        }
        Ok(AxisRange { start, stop })
    }
}

/// A parsed `<rows>,<columns>` expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SliceExpr {
    pub rows: AxisExpr,
    pub columns: AxisExpr,
}

impl FromStr for SliceExpr {
    type Err = MatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, columns) = s
            .split_once(',')
            .ok_or_else(|| MatError::slice(s, SliceErrorKind::MissingComma))?;
        let rows = rows.parse().map_err(|kind| MatError::slice(s, kind))?;
        let columns = columns.parse().map_err(|kind| MatError::slice(s, kind))?;
        Ok(SliceExpr { rows, columns })
    }
}

impl SliceExpr {
    pub fn axis(&self, axis: Axis) -> AxisExpr {
        match axis {
            Axis::Rows => self.rows,
            Axis::Columns => self.columns,
        }
    }

    pub fn resolve(&self, shape: Shape) -> MatResult<(AxisRange, AxisRange)> {
        let rows = self
            .rows
            .resolve(shape.rows)
            .map_err(|i| MatError::out_of_range(i, 0, shape))?;
        let columns = self
            .columns
            .resolve(shape.columns)
            .map_err(|j| MatError::out_of_range(0, j, shape))?;
        trace!(
            "slice {:?} of {} -> rows {:?}, columns {:?}",
            self,
            shape,
            rows.range(),
            columns.range()
        );
        Ok((rows, columns))
    }
}

impl<E: Element> Matrix<E> {
    /// Read-only view of the selected sub-matrix.
    ///
    /// ```
    /// use matview::matrix;
    ///
    /// let m = matrix![[1i32, 2, 4, 5], [6, 7, 9, -2], [-5, 6, -9, 3]];
    /// let v = m.slice("0:2,1:3").unwrap();
    /// assert_eq!(v, matrix![[2, 4], [7, 9]]);
    /// ```
    pub fn slice(&self, expr: &str) -> MatResult<MatrixView<'_, E::Scalar>> {
        let expr: SliceExpr = expr.parse()?;
        self.slice_expr(&expr)
    }

    pub fn slice_expr(&self, expr: &SliceExpr) -> MatResult<MatrixView<'_, E::Scalar>> {
        let (rows, columns) = expr.resolve(self.shape())?;
        let data = &self.data;
        let width = self.columns;
        let cells = rows.range().flat_map(move |i| {
            columns
                .range()
                .map(move |j| data[i * width + j].value())
        });
        Matrix::from_shape_iter(rows.len(), columns.len(), cells)
    }
}

impl<E: ElementMut> Matrix<E> {
    /// Writable view of the selected sub-matrix; writes land in `self`.
    pub fn slice_mut(&mut self, expr: &str) -> MatResult<MatrixViewMut<'_, E::Scalar>> {
        let expr: SliceExpr = expr.parse()?;
        self.slice_expr_mut(&expr)
    }

    pub fn slice_expr_mut(&mut self, expr: &SliceExpr) -> MatResult<MatrixViewMut<'_, E::Scalar>> {
        let (rows, columns) = expr.resolve(self.shape())?;
        let shape = Shape::new(rows.len(), columns.len());
        if shape.elem_count() == 0 {
            return Ok(Matrix::from_parts(Vec::new(), shape));
        }
        let cells: Vec<&mut E::Scalar> = self
            .data
            .chunks_mut(self.columns)
            .skip(rows.start)
            .take(rows.len())
            .flat_map(|row| row[columns.range()].iter_mut().map(ElementMut::value_mut))
            .collect();
        Ok(Matrix::from_parts(cells, shape))
    }
}
