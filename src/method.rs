//! Elementwise math.
//!
//! Every function returns a new owning matrix and leaves its argument (and,
//! for views, the source) untouched. Values are computed in `f64` and
//! converted back with [`Scalar::from_f64_lossy`], so integer matrices
//! truncate: `sqrt` of `[[5]]` as `i32` is `[[2]]`. `ceil` and `floor`
//! return integer values unchanged.

use num_traits::Zero;

use crate::broadcast::ensure_same_shape;
use crate::element::{Element, Scalar};
use crate::error::MatResult;
use crate::matrix::Matrix;

impl<E: Element> Matrix<E> {
    pub fn map<F>(&self, mut f: F) -> Matrix<E::Scalar>
    where
        F: FnMut(E::Scalar) -> E::Scalar,
    {
        Matrix::from_parts(
            self.data.iter().map(|e| f(*e.value())).collect(),
            self.shape(),
        )
    }

    pub fn map_f64<F>(&self, mut f: F) -> Matrix<E::Scalar>
    where
        F: FnMut(f64) -> f64,
    {
        self.map(|v| E::Scalar::from_f64_lossy(f(v.as_f64())))
    }
}

macro_rules! impl_unary_fn {
    ($($(#[$meta:meta])* $name:ident),*) => {
        $($(#[$meta])*
        pub fn $name<E: Element>(m: &Matrix<E>) -> Matrix<E::Scalar> {
            m.map_f64(f64::$name)
        })*
    };
}

impl_unary_fn!(
    sin,
    cos,
    tan,
    /// Outside `[-1, 1]` the float result is NaN, which integers read as 0.
    asin,
    acos,
    atan,
    exp,
    sqrt
);

macro_rules! impl_rounding_fn {
    ($($name:ident),*) => {
        $(pub fn $name<E: Element>(m: &Matrix<E>) -> Matrix<E::Scalar> {
            if <E::Scalar as Scalar>::IS_INTEGER {
                m.map(|v| v)
            } else {
                m.map_f64(f64::$name)
            }
        })*
    };
}

// Integers are already whole; going through `f64` would drop bits above 2^53.
impl_rounding_fn!(ceil, floor);

/// Absolute value, computed in the element type.
pub fn abs<E: Element>(m: &Matrix<E>) -> Matrix<E::Scalar> {
    let zero = <E::Scalar as Zero>::zero();
    m.map(|v| if v < zero { zero - v } else { v })
}

pub fn pow<E: Element>(m: &Matrix<E>, exponent: f64) -> Matrix<E::Scalar> {
    m.map_f64(|v| v.powf(exponent))
}

pub fn atan2<E1, E2>(y: &Matrix<E1>, x: &Matrix<E2>) -> MatResult<Matrix<E1::Scalar>>
where
    E1: Element,
    E2: Element<Scalar = E1::Scalar>,
{
    ensure_same_shape("atan2", y.shape(), x.shape())?;
    let data = y
        .data
        .iter()
        .zip(x.data.iter())
        .map(|(a, b)| E1::Scalar::from_f64_lossy(a.value().as_f64().atan2(b.value().as_f64())))
        .collect();
    Ok(Matrix::from_parts(data, y.shape()))
}
