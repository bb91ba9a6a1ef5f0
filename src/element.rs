//! Element trait layer.
//!
//! A matrix stores either plain arithmetic values or aliases (`&A` / `&mut A`)
//! to values owned by another matrix. Every algorithm in the crate reads and
//! writes through [`Element::value`] and [`ElementMut::value_mut`], so owning
//! matrices and views share one implementation.
//!
//! ```text
//! Kind            IS_MATRIX  IS_ALIAS  Scalar
//!   i32, f64, ..    false      false    Self
//!   &A, &mut A      false      true     A
//!   Matrix<E>       true       false    E::Scalar
//! ```
//!
//! Only arithmetic types implement [`Scalar`], so a matrix of anything else
//! is rejected when the program is compiled:
//!
//! ```compile_fail
//! let m: matview::Matrix<String> = matview::Matrix::new();
//! ```

use core::fmt;

use num_traits::{Num, NumAssign, NumCast};

use crate::matrix::Matrix;

pub trait Scalar:
    ElementMut<Scalar = Self>
    + Num
    + NumAssign
    + NumCast
    + Copy
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + 'static
{
    const IS_INTEGER: bool;

    fn as_f64(self) -> f64;

    /// `as`-style conversion: integers saturate, NaN becomes zero.
    fn from_f64_lossy(v: f64) -> Self;

    /// Exact conversion when `v` is representable, otherwise the lossy path.
    #[inline]
    fn cast_from<B: Scalar>(v: B) -> Self {
        match <Self as NumCast>::from(v) {
            Some(x) => x,
            None => Self::from_f64_lossy(v.as_f64()),
        }
    }

    /// Modular for integers, plain IEEE arithmetic for floats.
    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;
}

/// Compile-time facts about an element or operand type.
pub trait Kind {
    type Scalar: Scalar;

    const IS_MATRIX: bool;

    const IS_ALIAS: bool;
}

pub trait Element: Kind {
    fn value(&self) -> &Self::Scalar;
}

pub trait ElementMut: Element {
    fn value_mut(&mut self) -> &mut Self::Scalar;
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(impl Kind for $t {
            type Scalar = $t;
            const IS_MATRIX: bool = false;
            const IS_ALIAS: bool = false;
        }

        impl Element for $t {
            #[inline(always)]
            fn value(&self) -> &$t {
                self
            }
        }

        impl ElementMut for $t {
            #[inline(always)]
            fn value_mut(&mut self) -> &mut $t {
                self
            }
        })*
    };
}

macro_rules! impl_scalar_as {
    (@int $($t:ident),*) => {
        $(impl Scalar for $t {
            const IS_INTEGER: bool = true;

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64_lossy(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                $t::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                $t::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                $t::wrapping_mul(self, rhs)
            }
        })*
    };
    (@float $($t:ident),*) => {
        $(impl Scalar for $t {
            const IS_INTEGER: bool = false;

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64_lossy(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }
        })*
    };
}

impl_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_scalar_as!(@int i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_as!(@float f32, f64);

#[cfg(feature = "f16")]
impl_element!(half::f16);

#[cfg(feature = "f16")]
impl Scalar for half::f16 {
    const IS_INTEGER: bool = false;

    #[inline]
    fn as_f64(self) -> f64 {
        half::f16::to_f64(self)
    }

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        half::f16::from_f64(v)
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl<'a, A: Scalar> Kind for &'a A {
    type Scalar = A;
    const IS_MATRIX: bool = false;
    const IS_ALIAS: bool = true;
}

impl<'a, A: Scalar> Element for &'a A {
    #[inline(always)]
    fn value(&self) -> &A {
        self
    }
}

impl<'a, A: Scalar> Kind for &'a mut A {
    type Scalar = A;
    const IS_MATRIX: bool = false;
    const IS_ALIAS: bool = true;
}

impl<'a, A: Scalar> Element for &'a mut A {
    #[inline(always)]
    fn value(&self) -> &A {
        self
    }
}

impl<'a, A: Scalar> ElementMut for &'a mut A {
    #[inline(always)]
    fn value_mut(&mut self) -> &mut A {
        self
    }
}

impl<E: Element> Kind for Matrix<E> {
    type Scalar = E::Scalar;
    const IS_MATRIX: bool = true;
    const IS_ALIAS: bool = false;
}

pub fn is_matrix<K: Kind>() -> bool {
    K::IS_MATRIX
}

pub fn is_alias<K: Kind>() -> bool {
    K::IS_ALIAS
}
