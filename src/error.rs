// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error from constructing an angle set or converting a matrix.
#[derive(Clone, Debug)]
pub struct EulerError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl EulerError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `EulerError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }
}

/// Error code for an error from an angle set or matrix conversion.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
    /// the angle count or matrix shape does not belong to any dimension n ≥ 1,
    /// or a random angle set was requested for n < 2
    InvalidDimension,
    /// a matrix column does not have unit norm
    PreconditionViolation,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> EulerError
{
    EulerError { repr: k }
}

impl PartialEq for EulerError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Eq for EulerError {}

impl Error for EulerError {}

impl fmt::Display for EulerError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::InvalidDimension => "invalid dimension",
            ErrorKind::PreconditionViolation => "matrix column does not have unit norm",
        };
        write!(f, "EulerError/{:?}: {}", self.kind(), description)
    }
}
