/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kred_array_types::{V3, M33, mat};

use crate::errors::{Error, Result};

/// Apply `basis` to each point, treating the points as column vectors.
///
/// Each point must have exactly three coordinates.
pub fn project_points<P: AsRef<[f64]>>(basis: &M33, points: &[P]) -> Result<Vec<V3>>
{
    points.iter().enumerate().map(|(index, point)| {
        match *point.as_ref() {
            [x, y, z] => Ok(basis * V3([x, y, z])),
            ref other => Err(Error::InvalidShape { index, len: other.len() }),
        }
    }).collect()
}

/// The reciprocal of a basis: its matrix inverse.
///
/// **There is no 2 PI factor.**  Used as a matrix on column vectors, this
/// takes crystal coordinates in reciprocal space to cartesian coordinates.
pub fn calc_reciprocal(basis: &M33) -> Result<M33>
{
    mat::try_inv(basis).ok_or_else(|| Error::SingularMatrix { det: basis.det() })
}
