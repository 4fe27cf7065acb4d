/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Reduction of a k-point mesh to its irreducible points.
//!
//! Two mesh points are equivalent when some compatible rotation, or its
//! negation, carries one onto the other modulo a reciprocal lattice vector.
//! The equivalence classes are the connected components of the graph with
//! an edge for each such image.

use std::collections::HashMap;

use petgraph::unionfind::UnionFind;
use rayon::prelude::*;

use kred_array_types::{V3, M33};

use crate::algo::compat::{SYMMETRY_TOL, calc_overlap_matrix, check_symmetry};
use crate::core::lattice::Lattice;
use crate::errors::Result;
use crate::oper::rotations::possible_unitary_rotations;
use crate::util::Tol;

/// Distance in crystal coordinates below which a rotated point is
/// identified with a mesh point.
pub const KPOINT_TOL: f64 = 1e-6;

/// Partition of a mesh into symmetry-equivalent classes.
#[derive(Debug, Clone, PartialEq)]
pub struct KpointReduction {
    /// Number of distinct classes.
    pub num_irreducible: usize,
    /// Class of each mesh point.  Classes are numbered from zero in order
    /// of their first appearance in the mesh.
    pub labels: Vec<usize>,
    /// Indices into `possible_unitary_rotations` of the rotations that
    /// were found to be compatible with the lattice.
    pub operations: Vec<usize>,
}

impl KpointReduction {
    /// Number of mesh points in each class.
    pub fn multiplicities(&self) -> Vec<usize>
    {
        let mut out = vec![0; self.num_irreducible];
        for &label in &self.labels {
            out[label] += 1;
        }
        out
    }

    /// Index of the first mesh point of each class.
    pub fn representatives(&self) -> Vec<usize>
    {
        // labels are assigned in order of first appearance,
        // so the first point of class k is the point where k first appears
        let mut out = Vec::with_capacity(self.num_irreducible);
        for (index, &label) in self.labels.iter().enumerate() {
            if label == out.len() {
                out.push(index);
            }
        }
        out
    }

    /// Fraction of the mesh belonging to each class.  These sum to 1.
    pub fn weights(&self) -> Vec<f64>
    {
        let total = self.labels.len() as f64;
        self.multiplicities().into_iter().map(|m| m as f64 / total).collect()
    }
}

/// Partition a mesh (in crystal coordinates) into classes of points related
/// by the rotations compatible with `lattice`.
pub fn reduce_kpts(kpts: &[V3], lattice: &Lattice) -> Result<KpointReduction>
{Ok({
    let basis = lattice.matrix();
    let overlap = calc_overlap_matrix(basis)?;

    let mut operations = vec![];
    let mut signed_ops: Vec<M33> = vec![];
    for (index, rot) in possible_unitary_rotations().iter().enumerate() {
        if check_symmetry(&rot.matrix, basis, Some(&overlap), SYMMETRY_TOL)? {
            trace!("Using operation {:>2}: {}", index, rot.label);
            operations.push(index);
            signed_ops.push(rot.matrix);
            signed_ops.push(-rot.matrix);
        }
    }
    debug!("Lattice has {} compatible rotations", operations.len());

    let reciprocal = lattice.inverse_matrix();

    // each search is independent; only the merging needs to be sequential
    let images: Vec<Vec<usize>> = kpts.par_iter().map(|kpt| {
        let kcart = reciprocal * kpt;
        let mut found = vec![];
        for op in &signed_ops {
            let folded = (basis * (op * kcart)).fract_floor();
            found.extend({
                kpts.iter().enumerate()
                    .filter(|&(_, other)| Tol(KPOINT_TOL).is_periodic_image(other, &folded))
                    .map(|(j, _)| j)
            });
        }
        found
    }).collect();

    let mut sets = UnionFind::new(kpts.len());
    for (i, found) in images.into_iter().enumerate() {
        for j in found {
            sets.union(i, j);
        }
    }

    let mut renumbering = HashMap::new();
    let labels: Vec<usize> = {
        sets.into_labeling().into_iter()
            .map(|root| {
                let next = renumbering.len();
                *renumbering.entry(root).or_insert(next)
            })
            .collect()
    };
    let num_irreducible = renumbering.len();
    debug!("Reduced {} k-points to {} irreducible points", kpts.len(), num_irreducible);

    KpointReduction { num_irreducible, labels, operations }
})}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, FRAC_PI_2};
    use crate::algo::mesh::make_mesh;
    use crate::core::bravais::{BravaisType, LatticeParams, make_lattice_bravais, make_lattice_general};

    fn mesh_444() -> Vec<V3>
    { make_mesh([4, 4, 4], [false; 3]).unwrap() }

    fn lattice(bravais: BravaisType, params: LatticeParams) -> Lattice
    { make_lattice_bravais(bravais, &params).unwrap().0 }

    const FCC_LABELS: [usize; 64] = [
        0, 1, 2, 1, 1, 3, 4, 5, 2, 4, 6, 4, 1, 5, 4, 3, 1, 3, 4, 5, 3, 1,
        5, 4, 4, 5, 4, 7, 5, 4, 7, 4, 2, 4, 6, 4, 4, 5, 4, 7, 6, 4, 2, 4,
        4, 7, 4, 5, 1, 5, 4, 3, 5, 4, 7, 4, 4, 7, 4, 5, 3, 4, 5, 1,
    ];

    const BCC_LABELS: [usize; 64] = [
        0, 1, 2, 1, 1, 1, 3, 3, 2, 3, 2, 3, 1, 3, 3, 1, 1, 3, 3, 1, 1, 4,
        5, 4, 3, 3, 5, 5, 3, 6, 3, 4, 2, 3, 2, 3, 3, 5, 5, 3, 2, 5, 7, 5,
        3, 3, 5, 5, 1, 1, 3, 3, 3, 4, 3, 6, 3, 5, 5, 3, 1, 4, 5, 4,
    ];

    const HCP_LABELS: [usize; 64] = [
        0,  1,  2,  1,  3,  4,  5,  4,  6,  7,  8,  7,  3,  4,  5,  4,  3,
        4,  5,  4,  9, 10, 11, 10,  9, 10, 11, 10,  3,  4,  5,  4,  6,  7,
        8,  7,  9, 10, 11, 10,  6,  7,  8,  7,  9, 10, 11, 10,  3,  4,  5,
        4,  3,  4,  5,  4,  9, 10, 11, 10,  9, 10, 11, 10,
    ];

    #[test]
    fn fcc_fixture() {
        let out = reduce_kpts(&mesh_444(), &lattice(BravaisType::FaceCenteredCubic, LatticeParams::new().a(1.0))).unwrap();
        assert_eq!(out.num_irreducible, 8);
        assert_eq!(out.labels, FCC_LABELS.to_vec());
        assert_eq!(out.operations, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn bcc_fixture() {
        let out = reduce_kpts(&mesh_444(), &lattice(BravaisType::BodyCenteredCubic, LatticeParams::new().a(1.0))).unwrap();
        assert_eq!(out.num_irreducible, 8);
        assert_eq!(out.labels, BCC_LABELS.to_vec());
    }

    #[test]
    fn hexagonal_fixture() {
        let out = reduce_kpts(&mesh_444(), &lattice(BravaisType::Hexagonal, LatticeParams::new().a(1.0).c(2.0))).unwrap();
        assert_eq!(out.num_irreducible, 12);
        assert_eq!(out.labels, HCP_LABELS.to_vec());
    }

    #[test]
    fn simple_cubic() {
        let out = reduce_kpts(&mesh_444(), &lattice(BravaisType::Cubic, LatticeParams::new().a(1.0))).unwrap();
        assert_eq!(out.num_irreducible, 10);
    }

    #[test]
    fn small_meshes() {
        let (fcc, _) = make_lattice_bravais(BravaisType::FaceCenteredCubic, &LatticeParams::new().a(1.0)).unwrap();
        let out = reduce_kpts(&make_mesh([2, 2, 2], [false; 3]).unwrap(), &fcc).unwrap();
        assert_eq!(out.num_irreducible, 3);
        assert_eq!(out.labels, vec![0, 1, 1, 2, 1, 2, 2, 1]);

        // only identity and inversion; every point of a 2x2x2 mesh is its own negation
        let (triclinic, _) = make_lattice_general(1.0, 2.0, 3.0, PI / 3.0, PI / 3.0 + 0.2, PI / 3.0 - 0.2).unwrap();
        let out = reduce_kpts(&make_mesh([2, 2, 2], [false; 3]).unwrap(), &triclinic).unwrap();
        assert_eq!(out.operations, vec![0]);
        assert_eq!(out.num_irreducible, 8);
        assert_eq!(out.labels, (0..8).collect::<Vec<_>>());

        let (ortho, _) = make_lattice_general(1.0, 2.0, 3.0, FRAC_PI_2, FRAC_PI_2, FRAC_PI_2).unwrap();
        let out = reduce_kpts(&make_mesh([2, 2, 2], [false; 3]).unwrap(), &ortho).unwrap();
        assert_eq!(out.num_irreducible, 8);
    }

    #[test]
    fn empty_and_single() {
        let lattice = Lattice::eye();
        let out = reduce_kpts(&[], &lattice).unwrap();
        assert_eq!(out.num_irreducible, 0);
        assert!(out.labels.is_empty());
        assert!(out.representatives().is_empty());

        let out = reduce_kpts(&[V3([0.0; 3])], &lattice).unwrap();
        assert_eq!(out.num_irreducible, 1);
        assert_eq!(out.labels, vec![0]);
    }

    #[test]
    fn labels_are_well_formed() {
        for &(bravais, params) in &[
            (BravaisType::FaceCenteredCubic, LatticeParams { a: Some(1.0), ..Default::default() }),
            (BravaisType::Hexagonal, LatticeParams { a: Some(1.0), c: Some(2.0), ..Default::default() }),
            (BravaisType::Tetragonal, LatticeParams { a: Some(1.0), c: Some(1.5), ..Default::default() }),
        ] {
            let mesh = make_mesh([4, 4, 3], [false, false, true]).unwrap();
            let out = reduce_kpts(&mesh, &lattice(bravais, params)).unwrap();
            assert_eq!(out.labels.len(), mesh.len());

            // contiguous, in order of first appearance
            let mut max_seen = None;
            for &label in &out.labels {
                match max_seen {
                    None => assert_eq!(label, 0),
                    Some(max) => assert!(label <= max + 1),
                }
                max_seen = Some(max_seen.map_or(label, |m: usize| m.max(label)));
            }
            assert_eq!(max_seen.map(|m| m + 1), Some(out.num_irreducible));

            let weights = out.weights();
            assert_close!(weights.iter().sum::<f64>(), 1.0);
            assert_eq!(out.multiplicities().iter().sum::<usize>(), mesh.len());
            for (label, &rep) in out.representatives().iter().enumerate() {
                assert_eq!(out.labels[rep], label);
                assert!(out.labels[..rep].iter().all(|&l| l != label));
            }
        }
    }

    #[test]
    fn invariant_under_scale() {
        let mesh = mesh_444();
        let small = lattice(BravaisType::Hexagonal, LatticeParams::new().a(1.0).c(2.0));
        let large = lattice(BravaisType::Hexagonal, LatticeParams::new().a(3.0).c(6.0));
        assert_eq!(reduce_kpts(&mesh, &small).unwrap(), reduce_kpts(&mesh, &large).unwrap());
    }

    #[test]
    fn repeatable() {
        let mesh = make_mesh([3, 3, 2], [true; 3]).unwrap();
        let hex = lattice(BravaisType::Hexagonal, LatticeParams::new().a(1.0).c(2.0));
        let first = reduce_kpts(&mesh, &hex).unwrap();
        for _ in 0..3 {
            assert_eq!(reduce_kpts(&mesh, &hex).unwrap(), first);
        }
        assert_eq!(first.labels.len(), 18);
    }

    #[test]
    fn helpers() {
        let out = KpointReduction {
            num_irreducible: 3,
            labels: vec![0, 1, 1, 2, 1, 2, 2, 1],
            operations: vec![0],
        };
        assert_eq!(out.multiplicities(), vec![1, 4, 3]);
        assert_eq!(out.representatives(), vec![0, 1, 3]);
        assert_close!(out.weights(), vec![0.125, 0.5, 0.375]);
    }
}
