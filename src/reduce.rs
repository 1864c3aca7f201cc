// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{s, ArrayBase, Data, Ix2};

use crate::error::{from_kind, ErrorKind, EulerError};
use crate::layers::to_flat;
use crate::{build_block, decompose_last_column, AngleSet, EulerFloat};

/// Column norm tolerance used by [`angles_from_matrix`]: the square root of
/// the machine epsilon of `A`.
#[inline]
pub(crate) fn default_tolerance<A: EulerFloat>() -> A
{
    A::epsilon().sqrt()
}

/// Reduce the square matrix `m` to its generalized Euler angles.
///
/// Every column of `m` must have unit norm, to within the square root of the
/// machine epsilon. Orthogonality of the columns is not checked; the result is
/// only meaningful for orthonormal `m`, and `m` is reproduced by
/// [`to_matrix`](crate::to_matrix) only if its determinant is `+1`.
///
/// **Errors** with `InvalidDimension` if `m` is not square or is empty, and
/// with `PreconditionViolation` if a column does not have unit norm.
pub fn angles_from_matrix<A, S>(m: &ArrayBase<S, Ix2>) -> Result<AngleSet<A>, EulerError>
where
    A: EulerFloat,
    S: Data<Elem = A>,
{
    angles_from_matrix_with_tolerance(m, default_tolerance())
}

/// Reduce the square matrix `m` to its generalized Euler angles, accepting
/// column norms within `tol` of one.
///
/// See [`angles_from_matrix`].
pub fn angles_from_matrix_with_tolerance<A, S>(m: &ArrayBase<S, Ix2>, tol: A) -> Result<AngleSet<A>, EulerError>
where
    A: EulerFloat,
    S: Data<Elem = A>,
{
    let (rows, n) = m.dim();
    if rows != n || n == 0 {
        return Err(from_kind(ErrorKind::InvalidDimension));
    }
    for column in m.columns() {
        let norm = column.dot(&column).sqrt();
        let is_unit = (norm - A::one()).abs() <= tol;
        if !is_unit {
            return Err(from_kind(ErrorKind::PreconditionViolation));
        }
    }

    // Each step factors the working matrix W (size × size) as
    // W = B · diag(W', 1), with B the rotation block whose last column is the
    // last column of W; W' becomes the next working matrix.
    let mut working = m.to_owned();
    let mut layers = Vec::with_capacity(n - 1);
    for size in (2..=n).rev() {
        let chain = decompose_last_column(&working);
        let block = build_block(&chain);
        working = block
            .t()
            .dot(&working)
            .slice_move(s![..size - 1, ..size - 1]);
        // the trailing π/2 is implied
        layers.push(chain.slice_move(s![..size - 1]));
    }
    Ok(AngleSet::from_array_unchecked(to_flat(&layers)))
}
