/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size linear algebra types.
//!
//! This library uses a row-based formalism; matrices are containers of row
//! vectors, and the product of a vector with a matrix is written `v * m`.
//! The column-vector product `m * v` is also provided since much of the
//! crystallographic literature is written that way.

#[cfg(test)]
#[macro_use]
extern crate kred_assert_close;

mod types;
mod ops;
mod methods_v;
mod methods_m;

pub use crate::types::{V3, M3, M33};

/// Functions on vectors.
pub mod vee {
    pub use crate::methods_v::{dot, from_fn};
}

/// Functions on matrices.
pub mod mat {
    pub use crate::methods_m::{from_array, from_fn, eye, zero, inv, try_inv};
}

pub use crate::methods_v::dot;
pub use crate::methods_m::{inv, try_inv};
