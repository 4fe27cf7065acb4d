/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kred_array_types::V3;

use crate::errors::{Error, Result};

/// A uniform mesh over the unit cell, in crystal coordinates.
///
/// Point `i` along an axis with `n` points sits at `i/n`, or at
/// `i/n + 1/(2n)` if that axis is shifted.  The mesh starts at the origin
/// rather than being centered on it.
///
/// Points are ordered with the y index outermost, then x, then z.
pub fn make_mesh(dims: [i64; 3], shift: [bool; 3]) -> Result<Vec<V3>>
{Ok({
    for (axis, &value) in dims.iter().enumerate() {
        if value <= 0 {
            throw!(Error::InvalidDimension { axis, value });
        }
    }

    let coord = |axis: usize, i: i64| {
        let n = dims[axis] as f64;
        let offset = if shift[axis] { 0.5 / n } else { 0.0 };
        i as f64 / n + offset
    };

    let [nx, ny, nz] = dims;
    iproduct!(0..ny, 0..nx, 0..nz)
        .map(|(iy, ix, iz)| V3([coord(0, ix), coord(1, iy), coord(2, iz)]))
        .collect()
})}
