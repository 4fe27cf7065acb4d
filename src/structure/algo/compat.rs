/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Testing rotations against a lattice.
//!
//! A rotation R is a symmetry of the lattice with row basis V when each
//! rotated lattice vector is an integer combination of the originals; i.e.
//! when `(V R) V^-1` is an integer matrix.  This is computed as
//! `O ((V R) V^T)^T`, where `O = (V V^T)^-1` is the overlap matrix, which
//! can be shared between all of the rotations tested against one lattice.

use kred_array_types::{M33, mat};

use crate::core::lattice::Lattice;
use crate::errors::{Error, Result};
use crate::oper::rotations::possible_unitary_rotations;
use crate::util::Tol;

/// Tolerance on the integrality of transformed lattice vectors.
pub const SYMMETRY_TOL: f64 = 1e-6;

/// `(V V^T)^-1` for a row basis `V`.
pub fn calc_overlap_matrix(basis: &M33) -> Result<M33>
{
    let gram = basis * basis.t();
    mat::try_inv(&gram).ok_or_else(|| Error::SingularMatrix { det: gram.det() })
}

/// Whether the cartesian rotation `op` maps the lattice onto itself.
///
/// `overlap` may be supplied to avoid recomputing it for every operation.
/// The only possible error comes from computing it.
pub fn check_symmetry(
    op: &M33,
    basis: &M33,
    overlap: Option<&M33>,
    tol: f64,
) -> Result<bool>
{Ok({
    let computed;
    let overlap = match overlap {
        Some(overlap) => overlap,
        None => {
            computed = calc_overlap_matrix(basis)?;
            &computed
        },
    };

    let rotated = basis * op;
    // rotated vectors, projected onto the original ones
    let projected = rotated * basis.t();
    let overlapped = overlap * projected.t();
    Tol(tol).is_integer_m33(&overlapped)
})}

/// Indices into `possible_unitary_rotations` of the operations that
/// preserve the lattice, in catalog order.
pub fn compatible_operations(lattice: &Lattice, tol: f64) -> Result<Vec<usize>>
{
    let basis = lattice.matrix();
    let overlap = calc_overlap_matrix(basis)?;

    let mut out = vec![];
    for (index, rot) in possible_unitary_rotations().iter().enumerate() {
        if check_symmetry(&rot.matrix, basis, Some(&overlap), tol)? {
            trace!("Compatible operation {:>2}: {}", index, rot.label);
            out.push(index);
        }
    }
    debug!("{} of {} rotations are compatible with the lattice", out.len(), possible_unitary_rotations().len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, FRAC_PI_2};
    use crate::core::bravais::{BravaisType, LatticeParams, make_lattice_bravais, make_lattice_general};

    fn deg(x: f64) -> f64 { x * PI / 180.0 }

    fn ops_of(bravais: BravaisType, params: LatticeParams) -> Vec<usize> {
        let (lattice, _) = make_lattice_bravais(bravais, &params).unwrap();
        compatible_operations(&lattice, SYMMETRY_TOL).unwrap()
    }

    #[test]
    fn overlap_of_orthogonal_basis() {
        let basis = mat::from_array([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 0.5]]);
        let overlap = calc_overlap_matrix(&basis).unwrap();
        assert_close!(overlap.into_array(), [[0.25, 0.0, 0.0], [0.0, 0.0625, 0.0], [0.0, 0.0, 4.0]]);

        let flat = mat::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
        assert!(calc_overlap_matrix(&flat).is_err());
    }

    #[test]
    fn supplied_overlap_matches_computed() {
        let (lattice, _) = make_lattice_general(1.0, 1.3, 0.8, deg(80.0), deg(100.0), deg(115.0)).unwrap();
        let basis = lattice.matrix();
        let overlap = calc_overlap_matrix(basis).unwrap();
        for rot in possible_unitary_rotations() {
            assert_eq!(
                check_symmetry(&rot.matrix, basis, None, SYMMETRY_TOL).unwrap(),
                check_symmetry(&rot.matrix, basis, Some(&overlap), SYMMETRY_TOL).unwrap(),
            );
        }
    }

    #[test]
    fn identity_and_inversion_always_pass() {
        for _ in 0..10 {
            let lattice = Lattice::random_uniform(3.0);
            let eye = M33::eye();
            assert!(check_symmetry(&eye, lattice.matrix(), None, SYMMETRY_TOL).unwrap());
            assert!(check_symmetry(&-eye, lattice.matrix(), None, SYMMETRY_TOL).unwrap());
        }
    }

    #[test]
    fn singular_basis_is_an_error() {
        let basis = mat::from_array([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(check_symmetry(&M33::eye(), &basis, None, SYMMETRY_TOL).is_err());
    }

    #[test]
    fn operations_by_family() {
        let cubic: Vec<_> = (0..24).collect();
        assert_eq!(ops_of(BravaisType::Cubic, LatticeParams::new().a(1.0)), cubic);
        assert_eq!(ops_of(BravaisType::FaceCenteredCubic, LatticeParams::new().a(1.0)), cubic);
        assert_eq!(ops_of(BravaisType::BodyCenteredCubic, LatticeParams::new().a(1.0)), cubic);

        assert_eq!(
            ops_of(BravaisType::Hexagonal, LatticeParams::new().a(1.0).c(2.0)),
            vec![0, 1, 2, 3, 24, 25, 26, 27, 28, 29, 30, 31],
        );
        assert_eq!(
            ops_of(BravaisType::Tetragonal, LatticeParams::new().a(1.0).c(2.0)),
            (0..8).collect::<Vec<_>>(),
        );
        assert_eq!(
            ops_of(BravaisType::Orthorhombic, LatticeParams::new().a(1.0).b(2.0).c(3.0)),
            vec![0, 1, 2, 3],
        );
        assert_eq!(
            ops_of(BravaisType::Monoclinic, LatticeParams::new().a(1.0).b(2.0).c(3.3).beta(deg(70.0))),
            vec![0, 2],
        );
        assert_eq!(
            ops_of(
                BravaisType::Triclinic,
                LatticeParams::new().a(1.0).b(2.0).c(3.0).alpha(deg(70.0)).beta(deg(80.0)).gamma(deg(95.0)),
            ),
            vec![0],
        );
    }

    #[test]
    fn scale_invariance() {
        for &a in &[0.1, 1.0, 7.5] {
            let (lattice, _) = make_lattice_general(a, 2.0 * a, 3.0 * a, FRAC_PI_2, FRAC_PI_2, FRAC_PI_2).unwrap();
            assert_eq!(compatible_operations(&lattice, SYMMETRY_TOL).unwrap(), vec![0, 1, 2, 3]);
        }
    }
}
