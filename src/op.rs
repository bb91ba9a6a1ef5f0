//! Arithmetic dispatch.
//!
//! Every arithmetic form in the crate funnels into [`Matrix::apply`]: an
//! operand is either a scalar, applied to every element, or a matrix of the
//! same shape, applied position by position. Which of the two happens is
//! decided from [`Kind::IS_MATRIX`] at compile time.
//!
//! The `std::ops` operators panic with the error message when shapes
//! disagree; the `try_*` methods and the free functions in this module return
//! the error instead.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::trace;
use num_traits::Zero;

use crate::broadcast::{broadcast_shape, ensure_same_shape, materialize};
use crate::element::{Element, ElementMut, Kind, Scalar};
use crate::error::MatResult;
use crate::matrix::Matrix;
use crate::shape::Shape;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Assign => "assign",
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
        }
    }

    #[inline]
    pub fn apply<A: Scalar>(self, target: &mut A, value: A) {
        match self {
            BinaryOp::Assign => *target = value,
            BinaryOp::Add => *target += value,
            BinaryOp::Sub => *target -= value,
            BinaryOp::Mul => *target *= value,
            BinaryOp::Div => *target /= value,
        }
    }
}

pub trait Operand: Kind {
    fn dims(&self) -> Shape;

    /// Value at row-major offset `k`. Scalars ignore `k`.
    fn value_at(&self, k: usize) -> Self::Scalar;
}

impl<A: Scalar> Operand for A {
    #[inline]
    fn dims(&self) -> Shape {
        Shape::new(1, 1)
    }

    #[inline]
    fn value_at(&self, _k: usize) -> A {
        *self.value()
    }
}

impl<E: Element> Operand for Matrix<E> {
    #[inline]
    fn dims(&self) -> Shape {
        self.shape()
    }

    #[inline]
    fn value_at(&self, k: usize) -> E::Scalar {
        self.value_at_offset(k)
    }
}

impl<E: ElementMut> Matrix<E> {
    pub(crate) fn apply_scalar(&mut self, value: E::Scalar, op: BinaryOp) {
        for e in self.data.iter_mut() {
            op.apply(e.value_mut(), value);
        }
    }

    pub fn apply<I>(&mut self, item: &I, op: BinaryOp) -> MatResult<&mut Self>
    where
        I: Operand<Scalar = E::Scalar>,
    {
        if I::IS_MATRIX {
            ensure_same_shape(op.name(), self.shape(), item.dims())?;
            for (k, e) in self.data.iter_mut().enumerate() {
                op.apply(e.value_mut(), item.value_at(k));
            }
        } else {
            self.apply_scalar(item.value_at(0), op);
        }
        trace!(
            "{} {} into {} matrix",
            op.name(),
            if I::IS_MATRIX { "matrix" } else { "scalar" },
            self.shape()
        );
        Ok(self)
    }

    pub fn try_assign<I>(&mut self, item: &I) -> MatResult<&mut Self>
    where
        I: Operand<Scalar = E::Scalar>,
    {
        self.apply(item, BinaryOp::Assign)
    }

    pub fn try_add<I>(&mut self, item: &I) -> MatResult<&mut Self>
    where
        I: Operand<Scalar = E::Scalar>,
    {
        self.apply(item, BinaryOp::Add)
    }

    pub fn try_sub<I>(&mut self, item: &I) -> MatResult<&mut Self>
    where
        I: Operand<Scalar = E::Scalar>,
    {
        self.apply(item, BinaryOp::Sub)
    }

    pub fn try_mul<I>(&mut self, item: &I) -> MatResult<&mut Self>
    where
        I: Operand<Scalar = E::Scalar>,
    {
        self.apply(item, BinaryOp::Mul)
    }

    pub fn try_div<I>(&mut self, item: &I) -> MatResult<&mut Self>
    where
        I: Operand<Scalar = E::Scalar>,
    {
        self.apply(item, BinaryOp::Div)
    }
}

/// `lhs op rhs` into a new owning matrix.
///
/// ```
/// use matview::{matrix, op, BinaryOp};
///
/// let m = matrix![[1i32, 2], [3, 4]];
/// assert_eq!(op::combine(&10i32, &m, BinaryOp::Sub).unwrap(), matrix![[9, 8], [7, 6]]);
/// assert_eq!(op::combine(&2i32, &3i32, BinaryOp::Mul).unwrap(), matrix![6]);
/// ```
pub fn combine<L, R>(lhs: &L, rhs: &R, op: BinaryOp) -> MatResult<Matrix<L::Scalar>>
where
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
{
    let shape = broadcast_shape(op.name(), lhs, rhs)?;
    let mut out = materialize(lhs, shape);
    out.apply(rhs, op)?;
    Ok(out)
}

pub fn add<L, R>(lhs: &L, rhs: &R) -> MatResult<Matrix<L::Scalar>>
where
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
{
    combine(lhs, rhs, BinaryOp::Add)
}

pub fn sub<L, R>(lhs: &L, rhs: &R) -> MatResult<Matrix<L::Scalar>>
where
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
{
    combine(lhs, rhs, BinaryOp::Sub)
}

pub fn mul<L, R>(lhs: &L, rhs: &R) -> MatResult<Matrix<L::Scalar>>
where
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
{
    combine(lhs, rhs, BinaryOp::Mul)
}

pub fn div<L, R>(lhs: &L, rhs: &R) -> MatResult<Matrix<L::Scalar>>
where
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
{
    combine(lhs, rhs, BinaryOp::Div)
}

#[track_caller]
fn unwrap_op<T>(r: MatResult<T>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! impl_assign_op {
    ($trt:ident, $mth:ident, $op:expr) => {
        impl<'a, E, E2> $trt<&'a Matrix<E2>> for Matrix<E>
        where
            E: ElementMut,
            E2: Element<Scalar = E::Scalar>,
        {
            #[track_caller]
            fn $mth(&mut self, rhs: &'a Matrix<E2>) {
                unwrap_op(self.apply(rhs, $op));
            }
        }

        impl<E, E2> $trt<Matrix<E2>> for Matrix<E>
        where
            E: ElementMut,
            E2: Element<Scalar = E::Scalar>,
        {
            #[track_caller]
            fn $mth(&mut self, rhs: Matrix<E2>) {
                unwrap_op(self.apply(&rhs, $op));
            }
        }
    };
}

macro_rules! impl_binary_op {
    ($trt:ident, $mth:ident, $op:expr) => {
        impl<'a, 'b, E, E2> $trt<&'b Matrix<E2>> for &'a Matrix<E>
        where
            E: Element,
            E2: Element<Scalar = E::Scalar>,
        {
            type Output = Matrix<E::Scalar>;

            #[track_caller]
            fn $mth(self, rhs: &'b Matrix<E2>) -> Self::Output {
                unwrap_op(combine(self, rhs, $op))
            }
        }

        impl<'a, E, E2> $trt<Matrix<E2>> for &'a Matrix<E>
        where
            E: Element,
            E2: Element<Scalar = E::Scalar>,
        {
            type Output = Matrix<E::Scalar>;

            #[track_caller]
            fn $mth(self, rhs: Matrix<E2>) -> Self::Output {
                unwrap_op(combine(self, &rhs, $op))
            }
        }

        impl<'b, E, E2> $trt<&'b Matrix<E2>> for Matrix<E>
        where
            E: Element,
            E2: Element<Scalar = E::Scalar>,
        {
            type Output = Matrix<E::Scalar>;

            #[track_caller]
            fn $mth(self, rhs: &'b Matrix<E2>) -> Self::Output {
                unwrap_op(combine(&self, rhs, $op))
            }
        }

        impl<E, E2> $trt<Matrix<E2>> for Matrix<E>
        where
            E: Element,
            E2: Element<Scalar = E::Scalar>,
        {
            type Output = Matrix<E::Scalar>;

            #[track_caller]
            fn $mth(self, rhs: Matrix<E2>) -> Self::Output {
                unwrap_op(combine(&self, &rhs, $op))
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, BinaryOp::Add);
impl_assign_op!(SubAssign, sub_assign, BinaryOp::Sub);
impl_assign_op!(MulAssign, mul_assign, BinaryOp::Mul);
impl_assign_op!(DivAssign, div_assign, BinaryOp::Div);

impl_binary_op!(Add, add, BinaryOp::Add);
impl_binary_op!(Sub, sub, BinaryOp::Sub);
impl_binary_op!(Mul, mul, BinaryOp::Mul);
impl_binary_op!(Div, div, BinaryOp::Div);

// Scalars on either side. Coherence rules out a blanket impl over `A: Scalar`
// with the scalar as `Self`, so each type is spelled out.
macro_rules! impl_scalar_ops {
    (@one $t:ty, $trt:ident, $mth:ident, $atrt:ident, $amth:ident, $op:expr) => {
        impl<E> $atrt<$t> for Matrix<E>
        where
            E: ElementMut<Scalar = $t>,
        {
            fn $amth(&mut self, rhs: $t) {
                self.apply_scalar(rhs, $op);
            }
        }

        impl<'a, E> $trt<$t> for &'a Matrix<E>
        where
            E: Element<Scalar = $t>,
        {
            type Output = Matrix<$t>;

            fn $mth(self, rhs: $t) -> Matrix<$t> {
                unwrap_op(combine(self, &rhs, $op))
            }
        }

        impl<E> $trt<$t> for Matrix<E>
        where
            E: Element<Scalar = $t>,
        {
            type Output = Matrix<$t>;

            fn $mth(self, rhs: $t) -> Matrix<$t> {
                unwrap_op(combine(&self, &rhs, $op))
            }
        }

        impl<'a, E> $trt<&'a Matrix<E>> for $t
        where
            E: Element<Scalar = $t>,
        {
            type Output = Matrix<$t>;

            fn $mth(self, rhs: &'a Matrix<E>) -> Matrix<$t> {
                unwrap_op(combine(&self, rhs, $op))
            }
        }

        impl<E> $trt<Matrix<E>> for $t
        where
            E: Element<Scalar = $t>,
        {
            type Output = Matrix<$t>;

            fn $mth(self, rhs: Matrix<E>) -> Matrix<$t> {
                unwrap_op(combine(&self, &rhs, $op))
            }
        }
    };
    ($($t:ty),*) => {
        $(
            impl_scalar_ops!(@one $t, Add, add, AddAssign, add_assign, BinaryOp::Add);
            impl_scalar_ops!(@one $t, Sub, sub, SubAssign, sub_assign, BinaryOp::Sub);
            impl_scalar_ops!(@one $t, Mul, mul, MulAssign, mul_assign, BinaryOp::Mul);
            impl_scalar_ops!(@one $t, Div, div, DivAssign, div_assign, BinaryOp::Div);
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(feature = "f16")]
impl_scalar_ops!(half::f16);

impl<'a, E: Element> Neg for &'a Matrix<E> {
    type Output = Matrix<E::Scalar>;

    /// `0 - m`. Unsigned matrices underflow like their scalars do.
    fn neg(self) -> Self::Output {
        unwrap_op(combine(&<E::Scalar as Zero>::zero(), self, BinaryOp::Sub))
    }
}

impl<E: Element> Neg for Matrix<E> {
    type Output = Matrix<E::Scalar>;

    fn neg(self) -> Self::Output {
        -&self
    }
}
