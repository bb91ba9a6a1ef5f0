//! Random matrices. The caller owns the generator, so results are
//! reproducible with a seeded one:
//!
//! ```
//! use matview::{random, Matrix};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let m: Matrix<i32> = random::uniform(2, 3, -5..5, &mut rng).unwrap();
//! assert!(m.iter().all(|v| (-5..5).contains(v)));
//! ```

use std::ops::Range;

use rand::Rng;

use crate::element::Scalar;
use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;

/// Integers drawn uniformly from `range` (stop exclusive), converted to `A`.
pub fn uniform<A, R>(rows: usize, columns: usize, range: Range<i64>, rng: &mut R) -> MatResult<Matrix<A>>
where
    A: Scalar,
    R: Rng,
{
    if range.start >= range.end {
        return Err(MatError::InvalidRange {
            low: range.start,
            high: range.end,
        });
    }
    let data = (0..rows * columns)
        .map(|_| {
            let v: i64 = rng.gen_range(range.clone());
            A::from_f64_lossy(v as f64)
        })
        .collect();
    Matrix::from_shape_vec(rows, columns, data)
}
