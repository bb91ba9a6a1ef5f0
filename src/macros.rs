/// Matrix literal.
///
/// Nested brackets give one row each (short rows are padded with the
/// default value); a flat list gives a single row.
///
/// ```
/// use matview::{matrix, Shape};
///
/// let m = matrix![[1i32, 2, 3], [4]];
/// assert_eq!(m.to_rows(), vec![vec![1, 2, 3], vec![4, 0, 0]]);
///
/// let r = matrix![1.5f64, 2.5];
/// assert_eq!(r.shape(), Shape::new(1, 2));
/// ```
#[macro_export]
macro_rules! matrix {
    () => {{
        $crate::Matrix::new()
    }};
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Matrix::from_rows(vec![$(vec![$($x,)*],)*])
    }};
    ($($x:expr),+ $(,)*) => {{
        $crate::Matrix::from_row(vec![$($x,)*])
    }};
}
