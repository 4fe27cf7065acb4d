/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Bravais lattices, their compatible point-group rotations, and the
//! reduction of uniform k-point meshes into symmetry-equivalent classes.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate itertools;
#[macro_use] extern crate lazy_static;
#[cfg(test)] #[macro_use] extern crate kred_assert_close;
#[cfg(test)] extern crate rand;

// FIXME copied from failure 1.0 prerelease; remove once actually released
macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e));
    }
}

mod errors;
mod core;
mod oper;
mod algo;
mod util;

//---------------------------
// public reexports; API

pub use crate::errors::{Error, Result};

pub use crate::core::lattice::Lattice;
pub use crate::core::bravais::{
    BravaisType,
    LatticeParams,
    calc_volume,
    make_lattice_general,
    make_lattice_bravais,
};
pub use crate::core::coords::{project_points, calc_reciprocal};

pub use crate::oper::rotations::{
    UnitaryRotation,
    possible_unitary_rotations,
    possible_unitary_rotation_names,
};

pub use crate::algo::compat::{
    SYMMETRY_TOL,
    calc_overlap_matrix,
    check_symmetry,
    compatible_operations,
};
pub use crate::algo::mesh::make_mesh;
pub use crate::algo::kpoints::{KPOINT_TOL, KpointReduction, reduce_kpts};
