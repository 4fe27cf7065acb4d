/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The fixed catalog of candidate point-group rotations.
//!
//! By the crystallographic restriction theorem, a lattice can only be
//! invariant under 2-, 3-, 4- and 6-fold rotations.  The 24 rotations of the
//! cube, together with the 8 extra rotations of a hexagonal prism about the
//! z axis, cover every proper rotation that any Bravais lattice in standard
//! orientation can have.  Improper operations are the negations of these.

use kred_array_types::{M33, mat};

/// A rotation matrix together with a description of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitaryRotation {
    /// Cartesian rotation matrix.
    pub matrix: M33,
    pub label: &'static str,
}

impl UnitaryRotation {
    /// Proper rotations have a determinant of +1.
    pub fn is_proper(&self) -> bool
    { self.matrix.det() > 0.0 }
}

lazy_static! {
    static ref POSSIBLE_UNITARY_ROTATIONS: Vec<UnitaryRotation> = {
        let c = 0.5;
        let s = 0.5 * 3f64.sqrt();
        let matrices = [
            [[ 1.,  0.,  0.], [ 0.,  1.,  0.], [ 0.,  0.,  1.]],
            [[-1.,  0.,  0.], [ 0., -1.,  0.], [ 0.,  0.,  1.]],
            [[-1.,  0.,  0.], [ 0.,  1.,  0.], [ 0.,  0., -1.]],
            [[ 1.,  0.,  0.], [ 0., -1.,  0.], [ 0.,  0., -1.]],
            [[ 0.,  1.,  0.], [ 1.,  0.,  0.], [ 0.,  0., -1.]],
            [[ 0., -1.,  0.], [-1.,  0.,  0.], [ 0.,  0., -1.]],
            [[ 0., -1.,  0.], [ 1.,  0.,  0.], [ 0.,  0.,  1.]],
            [[ 0.,  1.,  0.], [-1.,  0.,  0.], [ 0.,  0.,  1.]],
            [[ 0.,  0.,  1.], [ 0., -1.,  0.], [ 1.,  0.,  0.]],
            [[ 0.,  0., -1.], [ 0., -1.,  0.], [-1.,  0.,  0.]],
            [[ 0.,  0., -1.], [ 0.,  1.,  0.], [ 1.,  0.,  0.]],
            [[ 0.,  0.,  1.], [ 0.,  1.,  0.], [-1.,  0.,  0.]],
            [[-1.,  0.,  0.], [ 0.,  0.,  1.], [ 0.,  1.,  0.]],
            [[-1.,  0.,  0.], [ 0.,  0., -1.], [ 0., -1.,  0.]],
            [[ 1.,  0.,  0.], [ 0.,  0., -1.], [ 0.,  1.,  0.]],
            [[ 1.,  0.,  0.], [ 0.,  0.,  1.], [ 0., -1.,  0.]],
            [[ 0.,  0.,  1.], [ 1.,  0.,  0.], [ 0.,  1.,  0.]],
            [[ 0.,  0., -1.], [-1.,  0.,  0.], [ 0.,  1.,  0.]],
            [[ 0.,  0., -1.], [ 1.,  0.,  0.], [ 0., -1.,  0.]],
            [[ 0.,  0.,  1.], [-1.,  0.,  0.], [ 0., -1.,  0.]],
            [[ 0.,  1.,  0.], [ 0.,  0.,  1.], [ 1.,  0.,  0.]],
            [[ 0., -1.,  0.], [ 0.,  0., -1.], [ 1.,  0.,  0.]],
            [[ 0., -1.,  0.], [ 0.,  0.,  1.], [-1.,  0.,  0.]],
            [[ 0.,  1.,  0.], [ 0.,  0., -1.], [-1.,  0.,  0.]],
            [[ c,  s,  0.], [-s,  c,  0.], [ 0.,  0.,  1.]],
            [[ c, -s,  0.], [ s,  c,  0.], [ 0.,  0.,  1.]],
            [[-c,  s,  0.], [-s, -c,  0.], [ 0.,  0.,  1.]],
            [[-c, -s,  0.], [ s, -c,  0.], [ 0.,  0.,  1.]],
            [[ c, -s,  0.], [-s, -c,  0.], [ 0.,  0., -1.]],
            [[ c,  s,  0.], [ s, -c,  0.], [ 0.,  0., -1.]],
            [[-c, -s,  0.], [-s,  c,  0.], [ 0.,  0., -1.]],
            [[-c,  s,  0.], [ s,  c,  0.], [ 0.,  0., -1.]],
        ];
        matrices.iter().zip(LABELS.iter())
            .map(|(&m, &label)| UnitaryRotation { matrix: mat::from_array(m), label })
            .collect()
    };
}

const LABELS: [&str; 32] = [
    "identity",
    "180 deg rotation - cart. axis [0,0,1]",
    "180 deg rotation - cart. axis [0,1,0]",
    "180 deg rotation - cart. axis [1,0,0]",
    "180 deg rotation - cart. axis [1,1,0]",
    "180 deg rotation - cart. axis [1,-1,0]",
    "90 deg rotation - cart. axis [0,0,-1]",
    "90 deg rotation - cart. axis [0,0,1]",
    "180 deg rotation - cart. axis [1,0,1]",
    "180 deg rotation - cart. axis [-1,0,1]",
    "90 deg rotation - cart. axis [0,1,0]",
    "90 deg rotation - cart. axis [0,-1,0]",
    "180 deg rotation - cart. axis [0,1,1]",
    "180 deg rotation - cart. axis [0,1,-1]",
    "90 deg rotation - cart. axis [-1,0,0]",
    "90 deg rotation - cart. axis [1,0,0]",
    "120 deg rotation - cart. axis [-1,-1,-1]",
    "120 deg rotation - cart. axis [-1,1,1]",
    "120 deg rotation - cart. axis [1,1,-1]",
    "120 deg rotation - cart. axis [1,-1,1]",
    "120 deg rotation - cart. axis [1,1,1]",
    "120 deg rotation - cart. axis [-1,1,-1]",
    "120 deg rotation - cart. axis [1,-1,-1]",
    "120 deg rotation - cart. axis [-1,-1,1]",
    "60 deg rotation - cryst. axis [0,0,1]",
    "60 deg rotation - cryst. axis [0,0,-1]",
    "120 deg rotation - cryst. axis [0,0,1]",
    "120 deg rotation - cryst. axis [0,0,-1]",
    "180 deg rotation - cryst. axis [1,-1,0]",
    "180 deg rotation - cryst. axis [2,1,0]",
    "180 deg rotation - cryst. axis [0,1,0]",
    "180 deg rotation - cryst. axis [1,1,0]",
];

/// The 32 candidate rotations, in a fixed order.
///
/// The first 24 have entries in {0, 1, -1}; the last 8 involve 60 degree
/// rotations about z.  Indices into this table are stable and are used to
/// report which operations a lattice supports.
pub fn possible_unitary_rotations() -> &'static [UnitaryRotation]
{ &POSSIBLE_UNITARY_ROTATIONS }

/// Labels of `possible_unitary_rotations`, in the same order.
pub fn possible_unitary_rotation_names() -> Vec<&'static str>
{ possible_unitary_rotations().iter().map(|r| r.label).collect() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape() {
        let rotations = possible_unitary_rotations();
        assert_eq!(rotations.len(), 32);
        assert_eq!(possible_unitary_rotation_names().len(), 32);
        assert_eq!(rotations[0].matrix, M33::eye());
        assert_eq!(rotations[0].label, "identity");
        assert_eq!(rotations[1].label, "180 deg rotation - cart. axis [0,0,1]");
        assert_eq!(rotations[31].label, "180 deg rotation - cryst. axis [1,1,0]");
    }

    #[test]
    fn all_orthogonal_and_proper() {
        for rot in possible_unitary_rotations() {
            let product = &rot.matrix * &rot.matrix.t();
            assert_close!(abs=1e-12, product.into_array(), M33::<f64>::eye().into_array(), "{}", rot.label);
            assert!(rot.is_proper(), "{}", rot.label);
            assert_close!(abs=1e-12, rot.matrix.det(), 1.0);
        }
    }

    #[test]
    fn all_distinct() {
        let rotations = possible_unitary_rotations();
        for i in 0..rotations.len() {
            for j in 0..i {
                let diff = rotations[i].matrix - rotations[j].matrix;
                let max = diff.iter().flat_map(|row| row.iter()).fold(0.0f64, |acc, x| acc.max(x.abs()));
                assert!(max > 0.1, "{} and {} coincide", i, j);
            }
        }
    }

    #[test]
    fn cubic_rotations_are_integral() {
        for rot in &possible_unitary_rotations()[..24] {
            assert!(rot.matrix.iter().flat_map(|row| row.iter()).all(|&x| x == 0.0 || x.abs() == 1.0));
        }
    }

    #[test]
    fn names_are_trimmed() {
        for name in possible_unitary_rotation_names() {
            assert_eq!(name, name.trim());
        }
    }
}
