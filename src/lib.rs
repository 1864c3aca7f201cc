// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/ndarray-euler/0.1/")]
#![warn(missing_docs)]

//! Generalized Euler angles for rotations in any dimension.
//!
//! An `n × n` rotation matrix is described by `n(n-1)/2` angles. This crate
//! converts between the two:
//!
//! - [`AngleSet`]: a validated, immutable flat vector of angles, which knows
//!   the dimension `n` it describes.
//! - [`AngleSet::from_matrix`]: reduce a matrix with unit-norm columns one
//!   dimension at a time into its angles.
//! - [`to_matrix`] / [`AngleSet::to_matrix`]: compose the rotation back from
//!   its angles.
//! - [`AngleSet::random`] and [`RandomAngles`]: random angle sets, using a
//!   thread-local or caller supplied `Rng`.
//!
//! The flat vector is grouped into `n - 1` *layers* of lengths
//! `n-1, n-2, …, 1` (see [`Layers`], [`to_layered`], [`to_flat`]). Each layer,
//! extended by a final `π/2`, is an angle chain describing one elementary
//! rotation block ([`build_block`]), and the last column of each block is the
//! unit vector the chain decomposes ([`decompose_last_column`]).
//!
//! ```
//! use ndarray_euler::AngleSet;
//!
//! let angles = AngleSet::<f64>::random(4).unwrap();
//! assert_eq!(angles.len(), 6);
//!
//! let q = angles.to_matrix();
//! let back = AngleSet::from_matrix(&q).unwrap().to_matrix();
//! for (x, y) in q.iter().zip(&back) {
//!     assert!((x - y).abs() < 1e-9);
//! }
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `blas`: forwards to `ndarray/blas`; the matrix products of the reduction
//!   and composition then use BLAS.
//! - `matrixmultiply-threading`: forwards to `ndarray/matrixmultiply-threading`.
//!
//! ## Degenerate configurations
//!
//! When an angle of a chain reaches `±π/2`, the components of the unit vector
//! after it vanish and the following angles of that chain cannot be
//! determined. The reduction then leaves them at zero. The matrix still round
//! trips; the angles do not.

use std::fmt::Debug;

use ndarray::LinalgScalar;
use num_traits::{Float, FloatConst};

mod angle_set;
mod block;
mod compose;
mod decompose;
mod error;
mod layers;
mod random;
mod reduce;

pub use crate::angle_set::AngleSet;
pub use crate::block::build_block;
pub use crate::compose::to_matrix;
pub use crate::decompose::decompose_last_column;
pub use crate::error::{ErrorKind, EulerError};
pub use crate::layers::{angle_count, dim_for_len, to_flat, to_layered, Layers};
pub use crate::random::RandomAngles;
pub use crate::reduce::{angles_from_matrix, angles_from_matrix_with_tolerance};

/// Floating point element types usable for angles and matrices.
///
/// This trait is implemented for every type with the required bounds, which
/// in practice means `f32` and `f64`.
pub trait EulerFloat: Float + FloatConst + LinalgScalar + Debug {}

impl<T> EulerFloat for T where T: Float + FloatConst + LinalgScalar + Debug {}
