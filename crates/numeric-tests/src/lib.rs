//! Reference constructions for the accuracy tests of `ndarray-euler`.
#[cfg(feature = "test_blas")]
extern crate blas_src;

use ndarray::prelude::*;
use ndarray::{Data, LinalgScalar};
use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

pub fn kahan_sum<A>(iter: impl Iterator<Item = A>) -> A
where A: LinalgScalar
{
    let mut sum = A::zero();
    let mut compensation = A::zero();

    for elt in iter {
        let y = elt - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }

    sum
}

/// Largest absolute entry of `QᵀQ - I`, with compensated dot products.
pub fn orthonormal_defect<A, S>(q: &ArrayBase<S, Ix2>) -> A
where
    A: Float + LinalgScalar,
    S: Data<Elem = A>,
{
    let n = q.ncols();
    let mut defect = A::zero();
    for i in 0..n {
        for j in 0..n {
            let (ci, cj) = (q.column(i), q.column(j));
            let dot = kahan_sum((0..q.nrows()).map(|r| ci[r] * cj[r]));
            let expected = if i == j { A::one() } else { A::zero() };
            defect = defect.max((dot - expected).abs());
        }
    }
    defect
}

/// The rotation by `theta` in the plane of axes `i` and `j`.
pub fn givens<A>(n: usize, i: usize, j: usize, theta: f64) -> Array2<A>
where A: Float + LinalgScalar
{
    let (s, c) = theta.sin_cos();
    let (s, c) = (A::from(s).unwrap(), A::from(c).unwrap());
    let mut g = Array2::eye(n);
    g[[i, i]] = c;
    g[[j, j]] = c;
    g[[i, j]] = -s;
    g[[j, i]] = s;
    g
}

/// A rotation built independently of the Euler parameterization: the
/// product of one random Givens rotation for every coordinate plane.
pub fn random_givens_product<A, R>(n: usize, rng: &mut R) -> Array2<A>
where
    A: Float + LinalgScalar,
    R: Rng,
{
    let angle = Uniform::new(-std::f64::consts::PI, std::f64::consts::PI).unwrap();
    let mut q = Array2::eye(n);
    for i in 0..n {
        for j in i + 1..n {
            q = q.dot(&givens(n, i, j, angle.sample(rng)));
        }
    }
    q
}

/// The permutation matrix sending axis `i` to axis `i + 1 (mod n)`.
///
/// A rotation (determinant one) for odd `n`.
pub fn cyclic_shift<A>(n: usize) -> Array2<A>
where A: Float + LinalgScalar
{
    let mut p = Array2::zeros((n, n));
    for i in 0..n {
        p[[(i + 1) % n, i]] = A::one();
    }
    p
}
