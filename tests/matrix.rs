use matview::method::sqrt;
use matview::{matrix, MatError, Matrix, Shape};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample() -> Matrix<i32> {
    matrix![[1, 2, 4, 5], [6, 7, 9, -2], [-5, 6, -9, 3]]
}

fn other() -> Matrix<i32> {
    matrix![[3, 6, 7, 1], [4, 2, 5, 3], [2, 6, 7, 1]]
}

fn values<E: matview::Element>(m: &Matrix<E>) -> Vec<E::Scalar> {
    m.iter().copied().collect()
}

#[test]
fn init_default_matrix() {
    let m: Matrix<i32> = Matrix::default();
    assert_eq!(m.rows(), 0);
    assert_eq!(m.columns(), 0);
}

#[test]
fn init_matrix_value() {
    let m = Matrix::from_elem(3, 4, 7i32);
    assert_eq!(m.rows(), 3);
    assert_eq!(m.columns(), 4);
    assert_eq!(values(&m), vec![7; 12]);
}

#[test]
fn init_matrix_nested_rows() {
    let m = sample();
    let arr = [[1, 2, 4, 5], [6, 7, 9, -2], [-5, 6, -9, 3]];
    assert_eq!(m.shape(), Shape::new(3, 4));
    for (i, row) in arr.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            assert_eq!(m[(i, j)], *v);
        }
    }
}

#[test]
fn copy_and_move() {
    let m1: Matrix<i32> = matrix![[1, 2, 4], [6, 7, 9], [-5, 6, -9]];
    let m2 = m1.clone();
    assert_eq!(m1.shape(), m2.shape());
    assert_eq!(values(&m1), values(&m2));

    let m3 = m2;
    assert_eq!(m1, m3);
}

#[test]
fn init_matrix_other_type() {
    let m1: Matrix<f64> = matrix![[1., 2., 4.], [6., 7., 9.], [-5., 6., -9.]];
    let m2 = Matrix::<i32>::convert_from(&m1);
    assert_eq!(m1.shape(), m2.shape());
    let back: Vec<f64> = m2.iter().map(|&v| v as f64).collect();
    assert_eq!(values(&m1), back);
}

#[test]
fn row_iterators() {
    let m = sample();
    assert_eq!(m.row(0).unwrap().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
    assert_eq!(m.row(1).unwrap().copied().collect::<Vec<_>>(), vec![6, 7, 9, -2]);
    assert_eq!(m.row(2).unwrap().copied().collect::<Vec<_>>(), vec![-5, 6, -9, 3]);
}

#[test]
fn column_iterators() {
    let m = sample();
    assert_eq!(m.column(0).unwrap().copied().collect::<Vec<_>>(), vec![1, 6, -5]);
    assert_eq!(m.column(1).unwrap().copied().collect::<Vec<_>>(), vec![2, 7, 6]);
    assert_eq!(m.column(2).unwrap().copied().collect::<Vec<_>>(), vec![4, 9, -9]);
    assert_eq!(m.column(3).unwrap().copied().collect::<Vec<_>>(), vec![5, -2, 3]);
}

#[test]
fn iterators_sort_in_place() {
    let mut m1 = sample();
    let mut m2 = m1.clone();

    m1.row_mut(2).unwrap().sort();
    m2.column_mut(2).unwrap().sort();

    assert_eq!(m1.row(2).unwrap().copied().collect::<Vec<_>>(), vec![-9, -5, 3, 6]);
    assert_eq!(m2.column(2).unwrap().copied().collect::<Vec<_>>(), vec![-9, 4, 9]);

    // everything outside the sorted lane is untouched
    for i in 0..3 {
        for j in [0, 1, 3] {
            assert_eq!(m2[(i, j)], sample()[(i, j)]);
        }
    }
}

#[test]
fn out_of_range() {
    let m = sample();
    assert!(matches!(
        m.at(4, 1),
        Err(MatError::OutOfRange { row: 4, column: 1, .. })
    ));
    assert!(matches!(
        m.at(1, 5),
        Err(MatError::OutOfRange { row: 1, column: 5, .. })
    ));
}

#[test]
fn get_slice_matrix() {
    init_logger();
    let m = sample();
    let m_slice = m.slice("0:2,1:3").unwrap();
    let m1: Matrix<i32> = matrix![[2, 4], [7, 9]];
    assert!(m1 == m_slice);
    assert!(m_slice == m1);
}

#[test]
fn slice_assignment_writes_source() {
    let mut m = sample();
    {
        let mut m_slice = m.slice_mut("0:2,1:3").unwrap();
        m_slice[(0, 0)] = 99;
        m_slice[(0, 1)] = 77;
        m_slice[(1, 0)] = 88;
        m_slice[(1, 1)] = 33;
    }
    let m1: Matrix<i32> = matrix![[1, 99, 77, 5], [6, 88, 33, -2], [-5, 6, -9, 3]];
    assert_eq!(m, m1);
}

#[test]
fn slice_errors() {
    let m = sample();
    assert!(matches!(m.slice("0:2"), Err(MatError::InvalidSlice { .. })));
    assert!(matches!(m.slice("0:2,x"), Err(MatError::InvalidSlice { .. })));
    assert!(matches!(m.slice("0:5,1"), Err(MatError::OutOfRange { .. })));
}

#[test]
fn operation_with_scalar() {
    init_logger();
    let mut m = sample();
    let mut expected = values(&m);

    expected.iter_mut().for_each(|v| *v += 3);
    m += 3i32;
    assert_eq!(values(&m), expected);

    expected.iter_mut().for_each(|v| *v -= 5);
    m -= 5i32;
    assert_eq!(values(&m), expected);

    expected.iter_mut().for_each(|v| *v *= 6);
    m *= 6i32;
    assert_eq!(values(&m), expected);

    expected.iter_mut().for_each(|v| *v /= 2);
    m /= 2i32;
    assert_eq!(values(&m), expected);
}

#[test]
fn operation_with_matrix() {
    let mut m1 = sample();
    let m2 = other();
    let mut v1 = values(&m1);
    let v2 = values(&m2);

    v1.iter_mut().zip(&v2).for_each(|(a, b)| *a += b);
    m1 += &m2;
    assert_eq!(values(&m1), v1);

    v1.iter_mut().zip(&v2).for_each(|(a, b)| *a -= b);
    m1 -= &m2;
    assert_eq!(values(&m1), v1);
    assert_eq!(m1, sample());

    v1.iter_mut().zip(&v2).for_each(|(a, b)| *a *= b);
    m1 *= &m2;
    assert_eq!(values(&m1), v1);

    v1.iter_mut().zip(&v2).for_each(|(a, b)| *a /= b);
    m1 /= &m2;
    assert_eq!(values(&m1), v1);
}

#[test]
fn compound_expression() {
    let m1 = sample();
    let m2 = other();

    let m3 = 2i32 - (sqrt(&(&m1 * &m1)) + 3i32 * &m2 + &m2 / 5i32);

    let expected: Vec<i32> = values(&m1)
        .into_iter()
        .zip(values(&m2))
        .map(|(a, b)| (2.0 - (((a * a) as f64).sqrt() + (3 * b) as f64 + (b / 5) as f64)) as i32)
        .collect();

    assert_eq!(m3.shape(), Shape::new(3, 4));
    assert_eq!(values(&m3), expected);
}

#[test]
fn view_arithmetic_mixes_with_owned() {
    let mut m = sample();
    let top_left: Matrix<i32> = m.slice("0:2,0:2").unwrap().to_owned_matrix();
    {
        let mut bottom_right = m.slice_mut("1:end,2:end").unwrap();
        bottom_right += &top_left;
    }
    assert_eq!(m.to_rows()[1], vec![6, 7, 10, 0]);
    assert_eq!(m.to_rows()[2], vec![-5, 6, -3, 10]);
}

#[test]
fn det_and_dot() {
    let m: Matrix<i32> = matrix![[2, -3, 1], [2, 0, -1], [1, 4, 5]];
    assert_eq!(m.det(), Ok(49));
    assert!(matches!(sample().det(), Err(MatError::NotSquare(_))));

    let a = sample();
    assert!(matches!(
        a.dot(&a),
        Err(MatError::DimensionMismatch { op: "dot", .. })
    ));
    let mut t = a.clone();
    t.transpose();
    let g = a.dot(&t).unwrap();
    assert_eq!(g.shape(), Shape::new(3, 3));
    assert_eq!(g[(0, 0)], 1 + 4 + 16 + 25);
}

#[test]
#[should_panic(expected = "matrix dimensions must agree")]
fn compound_assign_mismatch_panics() {
    let mut m = sample();
    m += Matrix::<i32>::zeros(3, 3);
}

#[test]
fn display() {
    let m: Matrix<i32> = matrix![[1, -2], [30, 4]];
    assert_eq!(format!("{}", m), "    1   -2\n   30    4\n");
    let v = m.slice("end,:").unwrap();
    assert_eq!(v.to_string(), "   30    4\n");
}
