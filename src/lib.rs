//! Dense generic matrices with aliasing views.
//!
//! A [`Matrix<E>`] stores its values row-major. When `E` is an arithmetic type
//! the matrix owns them; when `E` is `&A` or `&mut A` it is a view whose
//! elements alias positions of another matrix. Views are produced by textual
//! slicing and behave like any other matrix: they iterate, take part in
//! arithmetic, and writes through a mutable view land in the source.
//!
//! ```
//! use matview::{matrix, Matrix};
//!
//! let mut m: Matrix<i32> = matrix![[1, 2, 4, 5], [6, 7, 9, -2], [-5, 6, -9, 3]];
//! {
//!     let mut v = m.slice_mut("0:2,1:3").unwrap();
//!     v += 10i32;
//! }
//! assert_eq!(m.to_rows()[0], vec![1, 12, 14, 5]);
//!
//! let col: Vec<i32> = m.column(2).unwrap().copied().collect();
//! assert_eq!(col, vec![14, 19, -9]);
//! ```

#[macro_use]
mod macros;

mod broadcast;
pub mod element;
mod error;
mod iter;
pub mod linalg;
mod matrix;
pub mod method;
pub mod op;
#[cfg(feature = "random")]
pub mod random;
mod shape;
pub mod slice;

pub use crate::broadcast::{broadcast, broadcast_shape};
pub use crate::element::{Element, ElementMut, Kind, Scalar};
pub use crate::error::{MatError, MatResult, SliceErrorKind};
pub use crate::iter::{Iter, IterMut};
pub use crate::linalg::concat;
pub use crate::matrix::{Matrix, MatrixView, MatrixViewMut};
pub use crate::op::{BinaryOp, Operand};
pub use crate::shape::{Axis, Shape};
pub use crate::slice::{AxisExpr, AxisRange, SliceExpr, Stop};
