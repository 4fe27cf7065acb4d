/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kred_array_types::{V3, M33};

// these float tests are written on a silly little type
// simply to avoid having a function with a signature like 'fn f(x: f64, tol: f64)'
// where the arguments could be swapped
#[derive(Debug, Copy, Clone)]
pub(crate) struct Tol(pub(crate) f64);

impl Tol {
    /// Whether `x` lies strictly within the tolerance of an integer.
    ///
    /// NaN is never near an integer.
    pub(crate) fn is_integer(self, x: f64) -> bool
    { (x.round() - x).abs() < self.0 }

    pub(crate) fn is_integer_m33(self, m: &M33) -> bool
    { m.iter().flat_map(|row| row.iter()).all(|&x| self.is_integer(x)) }

    /// Whether two fractional points are the same point modulo the unit cell.
    pub(crate) fn is_periodic_image(self, a: &V3, b: &V3) -> bool
    {
        let diff = a - b;
        (diff - diff.round()).norm() < self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kred_array_types::mat;

    #[test]
    fn integers() {
        let tol = Tol(1e-6);
        assert!(tol.is_integer(3.0));
        assert!(tol.is_integer(-2.0 + 1e-9));
        assert!(tol.is_integer(0.9999999));
        assert!(!tol.is_integer(0.5));
        assert!(!tol.is_integer(1.0 + 2e-6));
        assert!(!tol.is_integer(std::f64::NAN));

        assert!(tol.is_integer_m33(&mat::from_array([[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [2.0, 0.0, 1e-8]])));
        assert!(!tol.is_integer_m33(&mat::from_array([[1.0, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 1.0]])));
    }

    #[test]
    fn periodic_images() {
        let tol = Tol(1e-6);
        assert!(tol.is_periodic_image(&V3([0.0, 0.25, 0.5]), &V3([0.0, 0.25, 0.5])));
        assert!(tol.is_periodic_image(&V3([1.0 - 1e-9, 0.25, 0.5]), &V3([0.0, 0.25, 0.5])));
        assert!(tol.is_periodic_image(&V3([0.0, 1.25, -0.5]), &V3([0.0, 0.25, 0.5])));
        assert!(!tol.is_periodic_image(&V3([0.5, 0.25, 0.5]), &V3([0.0, 0.25, 0.5])));
    }
}
