use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceErrorKind {
    #[error("expected `<rows>,<columns>`")]
    MissingComma,
    #[error("unexpected token `{0}`")]
    BadAxis(String),
    #[error("range {start}:{stop} runs backwards")]
    Reversed { start: usize, stop: usize },
}

pub type MatResult<T> = Result<T, MatError>;

// Non-arithmetic element types are rejected by the `Element` bound on
// `Matrix<E>` and never reach a runtime error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("index ({row}, {column}) exceeds matrix dimensions {shape}")]
    OutOfRange {
        row: usize,
        column: usize,
        shape: Shape,
    },
    #[error("slice expression `{expr}` is incorrect: {kind}")]
    InvalidSlice { expr: String, kind: SliceErrorKind },
    #[error("{op}: matrix dimensions must agree, {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    #[error("matrix must be square, got {0}")]
    NotSquare(Shape),
    #[error("empty value range [{low}, {high})")]
    InvalidRange { low: i64, high: i64 },
}

impl MatError {
    pub(crate) fn out_of_range(row: usize, column: usize, shape: Shape) -> Self {
        MatError::OutOfRange { row, column, shape }
    }

    pub(crate) fn mismatch(op: &'static str, lhs: Shape, rhs: Shape) -> Self {
        MatError::DimensionMismatch { op, lhs, rhs }
    }

    pub(crate) fn slice(expr: &str, kind: SliceErrorKind) -> Self {
        MatError::InvalidSlice {
            expr: expr.to_string(),
            kind,
        }
    }
}

impl From<MatError> for String {
    fn from(e: MatError) -> Self {
        format!("{}", e)
    }
}
