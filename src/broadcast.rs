use crate::element::Scalar;
use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;
use crate::op::Operand;
use crate::shape::Shape;

pub fn broadcast<A: Scalar>(value: A, shape: Shape) -> Matrix<A> {
    Matrix::from_elem(shape.rows, shape.columns, value)
}

pub(crate) fn ensure_same_shape(op: &'static str, lhs: Shape, rhs: Shape) -> MatResult<()> {
    if lhs != rhs {
        return Err(MatError::mismatch(op, lhs, rhs));
    }
    Ok(())
}

/// Output shape of `lhs op rhs`.
///
/// Two matrices must agree exactly; a scalar takes the shape of the matrix on
/// the other side, and two scalars combine into a 1x1 result.
pub fn broadcast_shape<L, R>(op: &'static str, lhs: &L, rhs: &R) -> MatResult<Shape>
where
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
{
    match (L::IS_MATRIX, R::IS_MATRIX) {
        (true, true) => {
            ensure_same_shape(op, lhs.dims(), rhs.dims())?;
            Ok(lhs.dims())
        }
        (true, false) => Ok(lhs.dims()),
        (false, true) => Ok(rhs.dims()),
        (false, false) => Ok(Shape::new(1, 1)),
    }
}

/// Owning copy of `item` stretched to `shape`. A matrix operand must already
/// have that shape.
pub(crate) fn materialize<O: Operand>(item: &O, shape: Shape) -> Matrix<O::Scalar> {
    if O::IS_MATRIX {
        debug_assert_eq!(item.dims(), shape);
        let data = (0..shape.elem_count()).map(|k| item.value_at(k)).collect();
        Matrix::from_parts(data, shape)
    } else {
        broadcast(item.value_at(0), shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_shape() {
        let m = Matrix::<i32>::zeros(2, 3);
        let n = Matrix::<i32>::zeros(3, 2);
        assert_eq!(broadcast_shape("add", &m, &5i32), Ok(Shape::new(2, 3)));
        assert_eq!(broadcast_shape("add", &5i32, &n), Ok(Shape::new(3, 2)));
        assert_eq!(broadcast_shape("add", &1i32, &2i32), Ok(Shape::new(1, 1)));
        assert_eq!(
            broadcast_shape("add", &m, &n),
            Err(MatError::mismatch("add", Shape::new(2, 3), Shape::new(3, 2)))
        );
    }

    #[test]
    fn test_materialize() {
        let m = materialize(&4.5f64, Shape::new(2, 2));
        assert_eq!(m.as_slice(), &[4.5; 4]);

        let src = Matrix::from_rows(vec![vec![1u8, 2], vec![3, 4]]);
        let view = src.slice(":,:").unwrap();
        let copy = materialize(&view, view.shape());
        assert_eq!(copy, src);
    }
}
