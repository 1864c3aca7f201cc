// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random angle sets.
use ndarray::{Array1, ArrayView1};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::{Distribution, Open01};

use crate::error::{from_kind, ErrorKind, EulerError};
use crate::layers::{angle_count, to_flat, Layers};
use crate::{AngleSet, EulerFloat};

/// The distribution of random angle sets of a fixed dimension `n >= 2`.
///
/// Each angle is drawn independently and uniformly. The last angle of every
/// layer lies in `(-π, π)`, all other angles in `(-π/2, π/2)`.
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use rand_distr::Distribution;
/// use ndarray_euler::{AngleSet, RandomAngles};
///
/// let mut rng = SmallRng::seed_from_u64(5);
/// let angles: AngleSet = RandomAngles::new(3).unwrap().sample(&mut rng);
/// assert_eq!(angles.dim(), 3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomAngles
{
    dim: usize,
}

impl RandomAngles
{
    /// Create the distribution of angle sets of dimension `dim`.
    ///
    /// **Errors** with `InvalidDimension` if `dim < 2`.
    pub fn new(dim: usize) -> Result<Self, EulerError>
    {
        if dim < 2 {
            return Err(from_kind(ErrorKind::InvalidDimension));
        }
        Ok(RandomAngles { dim })
    }

    /// Return the dimension of the sampled angle sets.
    pub fn dim(&self) -> usize
    {
        self.dim
    }
}

impl<A> Distribution<AngleSet<A>> for RandomAngles
where
    A: EulerFloat,
    Open01: Distribution<A>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AngleSet<A>
    {
        let half_pi = A::FRAC_PI_2();
        let flat = Array1::<A>::random_using(angle_count(self.dim), Open01, rng)
            .mapv(|u| (u + u - A::one()) * half_pi);
        let layers = Layers::new_unchecked(flat.view(), self.dim)
            .map(widen_last)
            .collect::<Vec<_>>();
        AngleSet::from_array_unchecked(to_flat(&layers))
    }
}

/// Map the last angle of `layer` from `(-π/2, π/2)` onto `(-π, π)`.
fn widen_last<A: EulerFloat>(layer: ArrayView1<'_, A>) -> Array1<A>
{
    let mut layer = layer.to_owned();
    let last = layer.len() - 1;
    layer[last] = layer[last] + layer[last];
    layer
}

impl<A> AngleSet<A>
where
    A: EulerFloat,
    Open01: Distribution<A>,
{
    /// Create a random angle set of dimension `n`, using the thread-local rng.
    ///
    /// See [`RandomAngles`] for the distribution of the angles.
    ///
    /// **Errors** with `InvalidDimension` if `n < 2`.
    pub fn random(n: usize) -> Result<Self, EulerError>
    {
        Self::random_using(n, &mut rand::rng())
    }

    /// Create a random angle set of dimension `n`, using `rng`.
    ///
    /// **Errors** with `InvalidDimension` if `n < 2`.
    pub fn random_using<R>(n: usize, rng: &mut R) -> Result<Self, EulerError>
    where R: Rng + ?Sized
    {
        Ok(RandomAngles::new(n)?.sample(rng))
    }
}
