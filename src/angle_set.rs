// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Data, Ix2};

use crate::error::{from_kind, ErrorKind, EulerError};
use crate::layers::{dim_for_len, layered_dim, to_flat, triangular_root, Layers};
use crate::{angles_from_matrix, angles_from_matrix_with_tolerance, to_matrix, EulerFloat};

/// The generalized Euler angles of an `n`-dimensional rotation.
///
/// An `AngleSet` holds `n(n-1)/2` angles in a flat vector. The length is
/// validated once, at construction, and the set is immutable afterwards; the
/// dimension `n` is recomputed from the length by [`.dim()`](AngleSet::dim).
///
/// The flat vector is ordered by layer: first the `n - 1` angles of the
/// outermost rotation block, then the `n - 2` angles of the next, and so on.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleSet<A = f64>
{
    angles: Array1<A>,
}

impl<A> AngleSet<A>
{
    /// Create an angle set from a flat vector of angles.
    ///
    /// **Errors** with `InvalidDimension` if the length is not `n(n-1)/2` for
    /// any `n >= 1`.
    ///
    /// ```
    /// use ndarray_euler::{AngleSet, ErrorKind};
    ///
    /// assert_eq!(AngleSet::from_vec(vec![0.1, 0.2, 0.3]).unwrap().dim(), 3);
    /// assert_eq!(
    ///     AngleSet::from_vec(vec![0.1, 0.2]).unwrap_err().kind(),
    ///     ErrorKind::InvalidDimension
    /// );
    /// ```
    pub fn from_vec(angles: Vec<A>) -> Result<Self, EulerError>
    {
        Self::from_array(Array1::from(angles))
    }

    /// Create an angle set from a one-dimensional array of angles.
    ///
    /// **Errors** with `InvalidDimension` if the length is not `n(n-1)/2` for
    /// any `n >= 1`.
    pub fn from_array(angles: Array1<A>) -> Result<Self, EulerError>
    {
        match dim_for_len(angles.len()) {
            Some(_) => Ok(Self::from_array_unchecked(angles)),
            None => Err(from_kind(ErrorKind::InvalidDimension)),
        }
    }

    /// Create an angle set from its layers, of lengths `n-1, n-2, …, 1`.
    ///
    /// **Errors** with `InvalidDimension` if the layer lengths are not
    /// `n-1, …, 1` for `n = layers.len() + 1`.
    pub fn from_layers(layers: &[Array1<A>]) -> Result<Self, EulerError>
    where A: Clone
    {
        layered_dim(layers)?;
        Ok(Self::from_array_unchecked(to_flat(layers)))
    }

    pub(crate) fn from_array_unchecked(angles: Array1<A>) -> Self
    {
        debug_assert!(dim_for_len(angles.len()).is_some());
        AngleSet { angles }
    }

    /// Return the dimension `n` of the rotations this set describes.
    #[inline]
    pub fn dim(&self) -> usize
    {
        triangular_root(self.angles.len()) + 1
    }

    /// Return the number of angles, `n(n-1)/2`.
    #[inline]
    pub fn len(&self) -> usize
    {
        self.angles.len()
    }

    /// Return `true` if the set has no angles, which is the case for `n = 1`.
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.angles.is_empty()
    }

    /// Return a read-only view of the flat angle vector.
    pub fn view(&self) -> ArrayView1<'_, A>
    {
        self.angles.view()
    }

    /// Return the flat angle vector as a slice.
    pub fn as_slice(&self) -> &[A]
    {
        // always in standard layout: built by `Array1::from` or collected
        self.angles.as_slice().unwrap_or(&[])
    }

    /// Consume the set and return the flat angle vector.
    pub fn into_inner(self) -> Array1<A>
    {
        self.angles
    }

    /// Return an iterator over the layers of the set, as views of lengths
    /// `n-1, n-2, …, 1`.
    ///
    /// ```
    /// use ndarray_euler::AngleSet;
    ///
    /// let angles = AngleSet::from_vec(vec![1., 2., 3., 4., 5., 6.]).unwrap();
    /// let lens: Vec<usize> = angles.layers().map(|layer| layer.len()).collect();
    /// assert_eq!(lens, [3, 2, 1]);
    /// ```
    pub fn layers(&self) -> Layers<'_, A>
    {
        Layers::new_unchecked(self.angles.view(), self.dim())
    }

    /// Return owned copies of the layers of the set.
    pub fn to_layered(&self) -> Vec<Array1<A>>
    where A: Clone
    {
        self.layers().map(|layer| layer.to_owned()).collect()
    }
}

impl<A> AngleSet<A>
where A: EulerFloat
{
    /// Compute the angles of the square matrix `m`.
    ///
    /// Every column of `m` must have unit norm. See
    /// [`angles_from_matrix`](crate::angles_from_matrix) for details.
    ///
    /// **Errors** with `InvalidDimension` if `m` is not square or is empty,
    /// and with `PreconditionViolation` if a column does not have unit norm.
    pub fn from_matrix<S>(m: &ArrayBase<S, Ix2>) -> Result<Self, EulerError>
    where S: Data<Elem = A>
    {
        angles_from_matrix(m)
    }

    /// Compute the angles of the square matrix `m`, accepting column norms
    /// within `tol` of one.
    pub fn from_matrix_with_tolerance<S>(m: &ArrayBase<S, Ix2>, tol: A) -> Result<Self, EulerError>
    where S: Data<Elem = A>
    {
        angles_from_matrix_with_tolerance(m, tol)
    }

    /// Compose the `n × n` rotation matrix described by the set.
    ///
    /// See [`to_matrix`](crate::to_matrix).
    pub fn to_matrix(&self) -> Array2<A>
    {
        to_matrix(self)
    }
}

impl<A> TryFrom<Vec<A>> for AngleSet<A>
{
    type Error = EulerError;

    fn try_from(angles: Vec<A>) -> Result<Self, EulerError>
    {
        Self::from_vec(angles)
    }
}

impl<A> TryFrom<Array1<A>> for AngleSet<A>
{
    type Error = EulerError;

    fn try_from(angles: Array1<A>) -> Result<Self, EulerError>
    {
        Self::from_array(angles)
    }
}

impl<A> From<AngleSet<A>> for Array1<A>
{
    fn from(angles: AngleSet<A>) -> Self
    {
        angles.into_inner()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use ndarray::array;

    #[test]
    fn dimension_follows_length()
    {
        assert_eq!(AngleSet::<f64>::from_vec(vec![]).unwrap().dim(), 1);
        assert_eq!(AngleSet::from_vec(vec![0.5]).unwrap().dim(), 2);
        assert_eq!(AngleSet::from_vec(vec![0.; 10]).unwrap().dim(), 5);
    }

    #[test]
    fn invalid_lengths_are_rejected()
    {
        for len in [2, 4, 5, 7, 9] {
            let err = AngleSet::from_vec(vec![0.; len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidDimension);
        }
    }

    #[test]
    fn layers_round_trip()
    {
        let layers = vec![array![1., 2., 3.], array![4., 5.], array![6.]];
        let angles = AngleSet::from_layers(&layers).unwrap();
        assert_eq!(angles.as_slice(), &[1., 2., 3., 4., 5., 6.]);
        assert_eq!(angles.to_layered(), layers);
    }

    #[test]
    fn malformed_layers_are_rejected()
    {
        let err = AngleSet::from_layers(&[array![1., 2.], array![3., 4.]]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDimension);
    }

    #[test]
    fn conversions()
    {
        let angles = AngleSet::try_from(vec![0.1, 0.2, 0.3]).unwrap();
        let flat: Array1<f64> = angles.clone().into();
        assert_eq!(flat, array![0.1, 0.2, 0.3]);
        assert_eq!(AngleSet::try_from(flat), Ok(angles));
        assert!(AngleSet::try_from(vec![0.1, 0.2]).is_err());
    }
}
