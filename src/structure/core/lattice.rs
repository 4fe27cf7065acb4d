/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::sync::Arc;

use kred_array_types::{V3, M33, mat};

use crate::errors::{Error, Result};

/// A vector basis for a periodic crystal in three dimensions.
///
/// The rows of the matrix are the lattice vectors.  The inverse is
/// computed once on construction, which is also where a degenerate
/// basis is rejected.
#[derive(Debug, Clone)]
pub struct Lattice {
    matrix: Arc<M33>,
    inverse: Arc<M33>,
}

// Manual impl that doesn't compare the inverse.
impl PartialEq<Lattice> for Lattice {
    fn eq(&self, other: &Lattice) -> bool {
        // deconstruct to get errors when new fields are added
        let Lattice { ref matrix, inverse: _ } = *self;
        matrix == &other.matrix
    }
}

impl Lattice {
    /// Create a lattice from a matrix where the rows are lattice vectors.
    pub fn new(matrix: &M33) -> Result<Self>
    {Ok({
        let inverse = mat::try_inv(matrix).ok_or_else(|| Error::SingularMatrix { det: matrix.det() })?;
        Lattice {
            matrix: Arc::new(*matrix),
            inverse: Arc::new(inverse),
        }
    })}

    #[inline]
    pub fn from_array(m: [[f64; 3]; 3]) -> Result<Self>
    { Self::new(&mat::from_array(m)) }

    /// The identity lattice.
    pub fn eye() -> Self
    {
        let eye = M33::eye();
        Lattice { matrix: Arc::new(eye), inverse: Arc::new(eye) }
    }

    /// Matrix where lattice vectors are rows.
    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.matrix }

    /// Get the (precomputed) inverse of the matrix where lattice vectors are rows.
    ///
    /// Used as a matrix on column vectors, this maps crystal coordinates of
    /// a k-point to cartesian ones. (there is no 2 PI factor)
    #[inline]
    pub fn inverse_matrix(&self) -> &M33
    { &self.inverse }

    #[inline]
    pub fn vectors(&self) -> &[V3; 3]
    { &self.matrix().0 }

    pub fn norms(&self) -> [f64; 3]
    {
        let [a, b, c] = *self.vectors();
        [a.norm(), b.norm(), c.norm()]
    }

    /// Get the (positive) volume of the lattice cell.
    pub fn volume(&self) -> f64
    { self.matrix().det().abs() }

    // who needs quickcheck
    /// Generate a random lattice.
    ///
    /// Elements are pulled from a uniform distribution of [-max, max].
    #[cfg(test)]
    pub(crate) fn random_uniform(max: f64) -> Self {
        loop {
            let m = M33::from_fn(|_, _| (::rand::random::<f64>() - 0.5) * 2.0 * max);
            // astronomically unlikely to loop
            if let Ok(lattice) = Lattice::new(&m) {
                return lattice;
            }
        }
    }
}

/// Defaults to the identity matrix.
impl Default for Lattice {
    #[inline]
    fn default() -> Lattice { Lattice::eye() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_precomputed() {
        for _ in 0..10 {
            let lattice = Lattice::random_uniform(10.0);
            let product = lattice.matrix() * lattice.inverse_matrix();
            assert_close!(abs=1e-9, product.into_array(), M33::<f64>::eye().into_array());
        }
    }

    #[test]
    fn inverse_matches_reciprocal() {
        let lattice = Lattice::from_array([[0.5, 0.0, 0.5], [0.5, 0.5, 0.0], [0.0, 0.5, 0.5]]).unwrap();
        let recip = crate::core::coords::calc_reciprocal(lattice.matrix()).unwrap();
        assert_close!(abs=1e-12, lattice.inverse_matrix().into_array(), recip.into_array());
    }

    #[test]
    fn singular_is_rejected() {
        let err = Lattice::from_array([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap_err();
        match err {
            Error::SingularMatrix { det } => assert_eq!(det, 0.0),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn volume_and_norms() {
        let lattice = Lattice::from_array([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, -4.0]]).unwrap();
        assert_close!(lattice.volume(), 24.0);
        assert_close!(lattice.norms(), [2.0, 3.0, 4.0]);
        assert_eq!(Lattice::default(), Lattice::eye());
    }
}
