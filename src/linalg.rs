use std::mem;

use log::debug;
use num_traits::Zero;

use crate::element::{Element, Scalar};
use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;
use crate::shape::{Axis, Shape};

// Cofactor expansion is O(n!); anything this large is worth a log line.
const LARGE_DET: usize = 8;

// First-row cofactor expansion of the `n x n` row-major block `m`. Unsigned
// minors may be negative, so the sum runs modulo the integer width.
fn cofactor_det<A: Scalar>(m: &[A], n: usize) -> A {
    match n {
        0 => A::zero(),
        1 => m[0],
        2 => m[0].wrapping_mul(m[3]).wrapping_sub(m[1].wrapping_mul(m[2])),
        _ => {
            let mut det = A::zero();
            let mut minor = Vec::with_capacity((n - 1) * (n - 1));
            for j in 0..n {
                minor.clear();
                for i in 1..n {
                    for k in 0..n {
                        if k != j {
                            minor.push(m[i * n + k]);
                        }
                    }
                }
                let term = m[j].wrapping_mul(cofactor_det(&minor, n - 1));
                det = if j % 2 == 0 {
                    det.wrapping_add(term)
                } else {
                    det.wrapping_sub(term)
                };
            }
            det
        }
    }
}

impl<E: Element> Matrix<E> {
    /// Determinant of a square matrix. The 0x0 matrix has determinant zero.
    ///
    /// ```
    /// use matview::matrix;
    ///
    /// let m = matrix![[3i64, 7], [1, -4]];
    /// assert_eq!(m.det().unwrap(), -19);
    /// ```
    pub fn det(&self) -> MatResult<E::Scalar> {
        let shape = self.shape();
        if !shape.is_square() {
            return Err(MatError::NotSquare(shape));
        }
        if shape.rows >= LARGE_DET {
            debug!("cofactor expansion of a {} matrix", shape);
        }
        let values: Vec<E::Scalar> = self.data.iter().map(|e| *e.value()).collect();
        Ok(cofactor_det(&values, shape.rows))
    }

    pub fn dot<E2>(&self, other: &Matrix<E2>) -> MatResult<Matrix<E::Scalar>>
    where
        E2: Element<Scalar = E::Scalar>,
    {
        if self.columns != other.rows {
            return Err(MatError::mismatch("dot", self.shape(), other.shape()));
        }
        let (n, m, p) = (self.rows, self.columns, other.columns);
        let mut out = Matrix::zeros(n, p);
        for i in 0..n {
            for j in 0..p {
                let mut sum = E::Scalar::zero();
                for k in 0..m {
                    sum += *self.data[i * m + k].value() * *other.data[k * p + j].value();
                }
                out.data[i * p + j] = sum;
            }
        }
        Ok(out)
    }

    /// Transposes in place. A view permutes its aliases, so the source
    /// matrix is left untouched.
    pub fn transpose(&mut self) {
        let (rows, columns) = (self.rows, self.columns);
        let mut keyed: Vec<(usize, E)> = mem::take(&mut self.data)
            .into_iter()
            .enumerate()
            .map(|(k, e)| ((k % columns) * rows + k / columns, e))
            .collect();
        keyed.sort_unstable_by_key(|(target, _)| *target);
        self.data = keyed.into_iter().map(|(_, e)| e).collect();
        self.rows = columns;
        self.columns = rows;
    }

    pub fn transposed(&self) -> Matrix<E::Scalar> {
        let mut t = self.to_owned_matrix();
        t.transpose();
        t
    }
}

/// Joins two matrices along `axis`.
///
/// `Axis::Rows` stacks `b` below `a` (column counts must agree);
/// `Axis::Columns` places `b` to the right of `a` (row counts must agree).
pub fn concat<E1, E2>(axis: Axis, a: &Matrix<E1>, b: &Matrix<E2>) -> MatResult<Matrix<E1::Scalar>>
where
    E1: Element,
    E2: Element<Scalar = E1::Scalar>,
{
    let other = match axis {
        Axis::Rows => Axis::Columns,
        Axis::Columns => Axis::Rows,
    };
    if a.shape().len_of(other) != b.shape().len_of(other) {
        return Err(MatError::mismatch("concat", a.shape(), b.shape()));
    }

    let shape = match axis {
        Axis::Rows => Shape::new(a.rows + b.rows, a.columns),
        Axis::Columns => Shape::new(a.rows, a.columns + b.columns),
    };
    let mut data = Vec::with_capacity(shape.elem_count());
    match axis {
        Axis::Rows => {
            data.extend(a.data.iter().map(|e| *e.value()));
            data.extend(b.data.iter().map(|e| *e.value()));
        }
        Axis::Columns => {
            for i in 0..shape.rows {
                let ra = &a.data[i * a.columns..(i + 1) * a.columns];
                let rb = &b.data[i * b.columns..(i + 1) * b.columns];
                data.extend(ra.iter().map(|e| *e.value()));
                data.extend(rb.iter().map(|e| *e.value()));
            }
        }
    }
    Ok(Matrix::from_parts(data, shape))
}
