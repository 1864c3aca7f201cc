use approx::assert_abs_diff_eq;
use quickcheck::{quickcheck, TestResult};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use ndarray::prelude::*;
use ndarray_euler::{angle_count, to_flat, to_layered, AngleSet, ErrorKind};

use std::f64::consts::{FRAC_PI_2, PI};

fn assert_orthonormal(q: &Array2<f64>)
{
    let n = q.nrows();
    for column in q.columns() {
        assert_abs_diff_eq!(column.dot(&column).sqrt(), 1., epsilon = 1e-9);
    }
    for i in 0..n {
        for j in i + 1..n {
            assert_abs_diff_eq!(q.column(i).dot(&q.column(j)), 0., epsilon = 1e-9);
        }
    }
}

#[test]
fn layering_round_trip()
{
    for n in 1..40 {
        let len = angle_count(n);
        let flat = Array::from_iter((0..len).map(|x| x as f64));
        let layers = to_layered(flat.view()).unwrap();
        assert_eq!(layers.len(), n - 1);
        assert_eq!(to_flat(&layers), flat);
        assert_eq!(to_layered(to_flat(&layers).view()).unwrap(), layers);
        assert_eq!(AngleSet::from_array(flat).unwrap().dim(), n);
    }
}

#[test]
fn matrices_are_orthonormal()
{
    let mut rng = SmallRng::seed_from_u64(11);
    for n in 2..12 {
        for _ in 0..5 {
            let q = AngleSet::<f64>::random_using(n, &mut rng).unwrap().to_matrix();
            assert_eq!(q.dim(), (n, n));
            assert_orthonormal(&q);
        }
    }
}

#[test]
fn matrix_round_trip()
{
    let mut rng = SmallRng::seed_from_u64(29);
    for n in 2..12 {
        for _ in 0..5 {
            let q = AngleSet::<f64>::random_using(n, &mut rng).unwrap().to_matrix();
            let back = AngleSet::from_matrix(&q).unwrap().to_matrix();
            assert_abs_diff_eq!(q, back, epsilon = 1e-9);
        }
    }
}

#[test]
fn angles_round_trip_away_from_boundary()
{
    let mut rng = SmallRng::seed_from_u64(2);
    for n in 2..9 {
        let angles = AngleSet::<f64>::random_using(n, &mut rng).unwrap();
        let back = AngleSet::from_matrix(&angles.to_matrix()).unwrap();
        assert_abs_diff_eq!(angles.view(), back.view(), epsilon = 1e-7);
    }
}

#[test]
fn random_dimension_boundary()
{
    assert_eq!(AngleSet::<f64>::random(1).unwrap_err().kind(), ErrorKind::InvalidDimension);
    let angles = AngleSet::<f64>::random(2).unwrap();
    assert_eq!(angles.len(), 1);
    assert_eq!(angles.dim(), 2);
}

#[test]
fn invalid_flat_length()
{
    let err = AngleSet::from_vec(vec![0.5, 0.25]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDimension);
}

#[test]
fn identity_round_trip()
{
    for n in 1..10 {
        let eye = Array2::<f64>::eye(n);
        let angles = AngleSet::from_matrix(&eye).unwrap();
        assert_eq!(angles.len(), angle_count(n));
        assert!(angles.view().iter().all(|&a| a == 0.));
        assert_abs_diff_eq!(angles.to_matrix(), eye, epsilon = 1e-12);
    }
}

#[test]
fn non_unit_column_rejected()
{
    let mut rng = SmallRng::seed_from_u64(7);
    let mut q = AngleSet::<f64>::random_using(4, &mut rng).unwrap().to_matrix();
    q.column_mut(2).mapv_inplace(|x| x * 2.);
    let err = AngleSet::from_matrix(&q).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn degenerate_angles_still_reproduce_matrix()
{
    // layers [π/2, 0.3, -1.0], [0.2, 2.5], [-0.4]
    let flat = vec![FRAC_PI_2, 0.3, -1.0, 0.2, 2.5, -0.4];
    let angles = AngleSet::from_vec(flat).unwrap();
    let q = angles.to_matrix();
    assert_orthonormal(&q);

    let back = AngleSet::from_matrix(&q).unwrap();
    // 0.3 sits behind the degenerate angle and is not recoverable
    assert_eq!(back.view()[0], FRAC_PI_2);
    assert_eq!(back.view()[1], 0.);
    assert_abs_diff_eq!(back.to_matrix(), q, epsilon = 1e-9);
}

#[test]
fn transposed_views_are_accepted()
{
    let mut rng = SmallRng::seed_from_u64(41);
    let q = AngleSet::<f64>::random_using(5, &mut rng).unwrap().to_matrix();
    let qt = q.t();
    let back = AngleSet::from_matrix(&qt).unwrap().to_matrix();
    assert_abs_diff_eq!(back, qt, epsilon = 1e-9);
}

#[test]
fn half_turn_in_the_plane()
{
    let q = AngleSet::from_vec(vec![PI]).unwrap().to_matrix();
    assert_abs_diff_eq!(q, -Array2::<f64>::eye(2), epsilon = 1e-15);
    let back = AngleSet::from_matrix(&q).unwrap();
    assert_abs_diff_eq!(back.view()[0].abs(), PI, epsilon = 1e-15);
}

quickcheck! {
    fn random_matrices_round_trip(seed: u64, n: u8) -> TestResult {
        let n = 2 + (n % 10) as usize;
        let mut rng = SmallRng::seed_from_u64(seed);
        let q = AngleSet::<f64>::random_using(n, &mut rng).unwrap().to_matrix();
        let back = AngleSet::from_matrix(&q).unwrap().to_matrix();
        TestResult::from_bool(q.abs_diff_eq(&back, 1e-8))
    }

    fn flat_layered_flat_is_identity(values: Vec<i64>) -> bool {
        let mut n = 1;
        while angle_count(n + 1) <= values.len() {
            n += 1;
        }
        let flat = Array::from_iter(values.into_iter().take(angle_count(n)));
        let layers = to_layered(flat.view()).unwrap();
        layers.len() == n - 1 && to_flat(&layers) == flat
    }
}
