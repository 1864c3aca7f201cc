// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reshaping between the flat angle vector and its layered form.
//!
//! For dimension `n` the flat vector holds `n(n-1)/2` angles. The layered
//! form splits it, in order, into `n - 1` layers of lengths
//! `n-1, n-2, …, 1`; layer `i` parameterizes the reduction step that peels
//! dimension `n - i` off the matrix.

use ndarray::{Array1, ArrayView1, Axis};
use num_integer::Roots;

use crate::error::{from_kind, ErrorKind, EulerError};

/// Number of angles describing a rotation of dimension `n`, `n(n-1)/2`.
///
/// ```
/// assert_eq!(ndarray_euler::angle_count(1), 0);
/// assert_eq!(ndarray_euler::angle_count(3), 3);
/// assert_eq!(ndarray_euler::angle_count(4), 6);
/// ```
#[inline]
pub fn angle_count(n: usize) -> usize
{
    triangular(n.saturating_sub(1))
}

/// `m(m+1)/2`, without overflowing in the intermediate product.
#[inline]
fn triangular(m: usize) -> usize
{
    if m % 2 == 0 {
        (m / 2) * (m + 1)
    } else {
        m * ((m + 1) / 2)
    }
}

/// Largest `m` with `m(m+1)/2 <= len`.
///
/// For any angle count produced by `angle_count(n)` this is `n - 1`.
pub(crate) fn triangular_root(len: usize) -> usize
{
    let disc = 8 * len as u128 + 1;
    ((disc.sqrt() - 1) / 2) as usize
}

/// Return the dimension `n >= 1` with `n(n-1)/2 == len`, if there is one.
///
/// ```
/// use ndarray_euler::dim_for_len;
///
/// assert_eq!(dim_for_len(0), Some(1));
/// assert_eq!(dim_for_len(1), Some(2));
/// assert_eq!(dim_for_len(2), None);
/// assert_eq!(dim_for_len(6), Some(4));
/// ```
pub fn dim_for_len(len: usize) -> Option<usize>
{
    let m = triangular_root(len);
    if triangular(m) == len {
        Some(m + 1)
    } else {
        None
    }
}

/// An iterator over the layers of a flat angle vector.
///
/// Yields `n - 1` views of lengths `n-1, n-2, …, 1`, borrowing from the flat
/// vector. Created by [`Layers::new`] or [`AngleSet::layers`](crate::AngleSet::layers).
#[derive(Clone, Debug)]
pub struct Layers<'a, A>
{
    rest: ArrayView1<'a, A>,
    next_len: usize,
}

impl<'a, A> Layers<'a, A>
{
    /// Split `flat` into its layers.
    ///
    /// **Errors** with `InvalidDimension` if the length of `flat` is not
    /// `n(n-1)/2` for any `n >= 1`.
    pub fn new(flat: ArrayView1<'a, A>) -> Result<Self, EulerError>
    {
        match dim_for_len(flat.len()) {
            Some(n) => Ok(Self::new_unchecked(flat, n)),
            None => Err(from_kind(ErrorKind::InvalidDimension)),
        }
    }

    /// `flat` must have length `angle_count(n)` and `n >= 1`.
    pub(crate) fn new_unchecked(flat: ArrayView1<'a, A>, n: usize) -> Self
    {
        debug_assert_eq!(flat.len(), angle_count(n));
        Layers {
            rest: flat,
            next_len: n - 1,
        }
    }
}

impl<'a, A> Iterator for Layers<'a, A>
{
    type Item = ArrayView1<'a, A>;

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.next_len == 0 {
            return None;
        }
        let (layer, rest) = self.rest.split_at(Axis(0), self.next_len);
        self.rest = rest;
        self.next_len -= 1;
        Some(layer)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.next_len, Some(self.next_len))
    }
}

impl<A> ExactSizeIterator for Layers<'_, A> {}

/// Split a flat angle vector into owned layers of lengths `n-1, …, 1`.
///
/// **Errors** with `InvalidDimension` if the length of `flat` is not
/// `n(n-1)/2` for any `n >= 1`.
///
/// ```
/// use ndarray::array;
/// use ndarray_euler::{to_flat, to_layered};
///
/// let flat = array![1., 2., 3., 4., 5., 6.];
/// let layers = to_layered(flat.view()).unwrap();
/// assert_eq!(layers, vec![array![1., 2., 3.], array![4., 5.], array![6.]]);
/// assert_eq!(to_flat(&layers), flat);
/// ```
pub fn to_layered<A>(flat: ArrayView1<'_, A>) -> Result<Vec<Array1<A>>, EulerError>
where A: Clone
{
    Ok(Layers::new(flat)?.map(|layer| layer.to_owned()).collect())
}

/// Concatenate layers, in order, into one flat vector.
pub fn to_flat<A>(layers: &[Array1<A>]) -> Array1<A>
where A: Clone
{
    layers.iter().flat_map(|layer| layer.iter().cloned()).collect()
}

/// Check that `layers` has lengths `n-1, n-2, …, 1` and return `n`.
pub(crate) fn layered_dim<A>(layers: &[Array1<A>]) -> Result<usize, EulerError>
{
    let n = layers.len() + 1;
    let well_formed = layers
        .iter()
        .zip((1..n).rev())
        .all(|(layer, len)| layer.len() == len);
    if well_formed {
        Ok(n)
    } else {
        Err(from_kind(ErrorKind::InvalidDimension))
    }
}
