// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{Array1, ArrayBase, Data, Ix2};
use num_traits::clamp;

use crate::EulerFloat;

/// Decompose the last column of the square matrix `m` into a chain of
/// spherical angles.
///
/// For a `k × k` matrix the chain has `k` angles `a[0..k]`, with
/// `a[k-1] = π/2` by convention. The last column `v` is read as the unit
/// vector
///
/// ```text
/// v[i] = sin(a[i]) · cos(a[0]) · … · cos(a[i-1])     for i < k - 1
/// v[k-1] = cos(a[0]) · … · cos(a[k-2])
/// ```
///
/// which is exactly the last column [`build_block`](crate::build_block)
/// produces for the chain.
///
/// All angles but `a[k-2]` lie in `[-π/2, π/2]`. `a[k-2]` is recovered with
/// `atan2` from the matrix entries `m[[k-2, k-1]]` and `m[[k-1, k-1]]`, so it
/// spans the full circle.
///
/// If an angle reaches `±π/2` the remaining components of `v` vanish and
/// cannot determine the following angles. The chain is returned at that
/// point with the following angles left at zero.
///
/// ```
/// use ndarray::array;
/// use ndarray_euler::decompose_last_column;
///
/// let chain = decompose_last_column(&array![[0., -1.], [1., 0.]]);
/// assert_eq!(chain[0], -std::f64::consts::FRAC_PI_2);
/// ```
///
/// **Panics** if `m` is not square or has no columns.
pub fn decompose_last_column<A, S>(m: &ArrayBase<S, Ix2>) -> Array1<A>
where
    A: EulerFloat,
    S: Data<Elem = A>,
{
    let (rows, k) = m.dim();
    assert!(rows == k && k > 0, "decompose_last_column: expected a square, non-empty matrix");

    let mut chain = Array1::zeros(k);
    chain[k - 1] = A::FRAC_PI_2();
    if k == 1 {
        return chain;
    }

    let v = m.column(k - 1);
    let one = A::one();
    let mut cos_prod = one;
    for j in 0..k - 1 {
        let a = clamp(v[j] / cos_prod, -one, one).asin();
        chain[j] = a;
        let cos = a.cos();
        if is_degenerate(cos) {
            return chain;
        }
        cos_prod = cos_prod * cos;
    }
    chain[k - 2] = m[[k - 2, k - 1]].atan2(m[[k - 1, k - 1]]);
    chain
}

/// A cosine this close to zero means the angle sits at `±π/2`.
#[inline]
fn is_degenerate<A: EulerFloat>(cos: A) -> bool
{
    cos.abs() <= A::epsilon()
}
