/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::core::bravais::BravaisType;

/// Errors from lattice construction, mesh generation and k-point reduction.
///
/// None of these are produced for a symmetry operation that simply fails to
/// match a lattice; that is an ordinary `false`.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{} lattice requires parameter '{}'", bravais, key)]
    MissingParameter {
        bravais: BravaisType,
        key: &'static str,
    },

    #[fail(display = "unknown bravais lattice type: {:?}", name)]
    InvalidType {
        name: String,
    },

    #[fail(display = "mesh dimension along axis {} must be positive, got {}", axis, value)]
    InvalidDimension {
        axis: usize,
        value: i64,
    },

    #[fail(display = "point {} has {} coordinates; expected 3", index, len)]
    InvalidShape {
        index: usize,
        len: usize,
    },

    #[fail(display = "lattice angles are inconsistent (c^2 - cx^2 - cy^2 = {})", value)]
    NegativeDiscriminant {
        value: f64,
    },

    #[fail(display = "matrix is singular (det = {})", det)]
    SingularMatrix {
        det: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
