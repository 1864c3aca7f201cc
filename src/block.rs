// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{Array2, ArrayBase, Data, Ix1};

use crate::EulerFloat;

/// Build the `k × k` rotation block for a chain of `k` angles.
///
/// With `s[i] = sin(a[i])`, `c[i] = cos(a[i])` and `P(i, j)` the product of
/// `c[l]` for `i <= l < j` (empty product is one), the block `M` is
///
/// ```text
/// M[i, i]   =  c[i]                          i < k - 1
/// M[i, k-1] =  s[i] · P(0, i)                every row i
/// M[i, j]   = -s[i] · s[j] · P(j + 1, i)     j < i, j < k - 1
/// ```
///
/// and zero above the diagonal elsewhere. The last row and column are the
/// pivot of the block: the last column is the unit vector encoded by the
/// chain, the inverse of [`decompose_last_column`](crate::decompose_last_column).
///
/// The usual statement of these entries multiplies `tan(a[i])` by a product of
/// cosines that includes `c[i]`; that factor is evaluated here as `s[i]`,
/// which stays finite when `a[i] = ±π/2`.
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use ndarray::array;
/// use ndarray_euler::build_block;
///
/// let theta = 0.25_f64;
/// let block = build_block(&array![theta, FRAC_PI_2]);
/// let (s, c) = theta.sin_cos();
/// assert!((block[[0, 0]] - c).abs() < 1e-15);
/// assert!((block[[0, 1]] - s).abs() < 1e-15);
/// assert!((block[[1, 0]] + s).abs() < 1e-15);
/// assert!((block[[1, 1]] - c).abs() < 1e-15);
/// ```
pub fn build_block<A, S>(chain: &ArrayBase<S, Ix1>) -> Array2<A>
where
    A: EulerFloat,
    S: Data<Elem = A>,
{
    let k = chain.len();
    let sin = chain.mapv(A::sin);
    let cos = chain.mapv(A::cos);

    let mut block = Array2::eye(k);
    for i in 0..k {
        if i + 1 < k {
            block[[i, i]] = cos[i];
        }
        // walk left from the diagonal, accumulating the cosines passed over
        let mut cos_prod = A::one();
        for j in (0..i.min(k - 1)).rev() {
            block[[i, j]] = -sin[i] * sin[j] * cos_prod;
            cos_prod = cos_prod * cos[j];
        }
        block[[i, k - 1]] = sin[i] * cos_prod;
    }
    block
}
