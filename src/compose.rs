// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{s, Array1, Array2};

use crate::{build_block, AngleSet, EulerFloat};

/// Compose the `n × n` rotation matrix described by `angles`.
///
/// Layer `i` (of length `n - 1 - i`, counting from zero) is extended by `π/2`
/// and built into a block of size `n - i`. The result is the product of all
/// blocks, each padded with the identity to `n × n`, in layer order.
///
/// ```
/// use ndarray::Array2;
/// use ndarray_euler::{to_matrix, AngleSet};
///
/// let angles = AngleSet::from_vec(vec![0.; 6]).unwrap();
/// assert_eq!(to_matrix(&angles), Array2::<f64>::eye(4));
/// ```
pub fn to_matrix<A>(angles: &AngleSet<A>) -> Array2<A>
where A: EulerFloat
{
    let n = angles.dim();
    let mut acc = Array2::eye(n);
    for layer in angles.layers() {
        let k = layer.len() + 1;
        let mut chain = Array1::from_elem(k, A::FRAC_PI_2());
        chain.slice_mut(s![..k - 1]).assign(&layer);
        let block = build_block(&chain);

        // Right-multiplying by diag(block, I) changes only the leading k columns.
        let leading = acc.slice(s![.., ..k]).dot(&block);
        acc.slice_mut(s![.., ..k]).assign(&leading);
    }
    acc
}
