/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Methods on `M33`.
//!
//! Matrices are conceptually understood to be containers of row-vectors.

use crate::types::{V3, M3, M33};
use crate::methods_v::dot;

use num_traits::{Num, Float, Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices.
#[inline(always)]
pub fn from_fn<X, F>(mut f: F) -> M33<X>
where F: FnMut(usize, usize) -> X,
{ M3([
    V3([f(0, 0), f(0, 1), f(0, 2)]),
    V3([f(1, 0), f(1, 1), f(1, 2)]),
    V3([f(2, 0), f(2, 1), f(2, 2)]),
])}

/// Construct a matrix from a 2D array of rows.
#[inline(always)]
pub fn from_array<X>(arr: [[X; 3]; 3]) -> M33<X>
{
    let [a, b, c] = arr;
    M3([V3(a), V3(b), V3(c)])
}

/// Construct an identity matrix (using type inference).
#[inline(always)]
pub fn eye<X: Zero + One + Copy>() -> M33<X>
{ from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

/// Construct a zero matrix (using type inference).
#[inline(always)]
pub fn zero<X: Zero + Copy>() -> M33<X>
{ from_fn(|_, _| X::zero()) }

/// Matrix inverse.
///
/// A singular input produces non-finite elements rather than an error;
/// use `try_inv` when the input is not known to be invertible.
#[inline]
pub fn inv<X: Float>(m: &M33<X>) -> M33<X>
{
    let (cofactors, det) = cofactors_and_det(m);
    let rdet = X::one() / det;
    from_fn(|r, c| rdet * cofactors[c][r])
}

/// Matrix inverse, or `None` if the matrix is singular.
///
/// (a matrix is treated as singular when the determinant is exactly zero
///  or when any element of the result is not finite)
#[inline]
pub fn try_inv<X: Float>(m: &M33<X>) -> Option<M33<X>>
{
    let (_, det) = cofactors_and_det(m);
    if det.is_zero() || !det.is_finite() {
        return None;
    }
    let out = inv(m);
    match out.iter().all(|row| row.is_finite()) {
        true => Some(out),
        false => None,
    }
}

impl<X> M33<X> {
    /// Construct a matrix from a function on indices.
    ///
    /// This is also available as the free function `mat::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { from_fn(f) }

    /// Map each scalar element of a matrix.
    #[inline(always)]
    pub fn map<B, F>(self, mut f: F) -> M33<B>
    where F: FnMut(X) -> B,
    {
        let M3([a, b, c]) = self;
        M3([a.map(&mut f), b.map(&mut f), c.map(&mut f)])
    }

    /// Apply a fallible function to each scalar element, with short-circuiting.
    #[inline(always)]
    pub fn try_map<E, B, F>(self, mut f: F) -> Result<M33<B>, E>
    where F: FnMut(X) -> Result<B, E>,
    {
        let M3([a, b, c]) = self;
        Ok(M3([a.try_map(&mut f)?, b.try_map(&mut f)?, c.try_map(&mut f)?]))
    }

    /// Cast into a plain `[[T; 3]; 3]`.
    #[inline(always)]
    pub fn into_array(self) -> [[X; 3]; 3]
    {
        let M3([a, b, c]) = self;
        [a.0, b.0, c.0]
    }
}

impl<X: Copy> M33<X> {
    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> Self
    { from_fn(|r, c| self[c][r]) }

    /// Get a column as a vector.
    #[inline]
    pub fn col(&self, c: usize) -> V3<X>
    { V3::from_fn(|r| self[r][c]) }
}

impl<X: Zero + One + Copy> M33<X> {
    /// Construct the identity matrix.
    ///
    /// This is also available as the free function `mat::eye`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn eye() -> Self
    { eye() }

    /// Construct the zero matrix.
    #[inline(always)]
    pub fn zero() -> Self
    { zero() }
}

impl<X: Num + Copy> M33<X> {
    /// Matrix determinant.
    pub fn det(&self) -> X
    {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = self.into_array();

        X::zero()
        + a0 * b1 * c2
        + a1 * b2 * c0
        + a2 * b0 * c1
        - a0 * b2 * c1
        - a1 * b0 * c2
        - a2 * b1 * c0
    }
}

// -------------------------- END PUBLIC API ---------------------------------

fn cofactors_and_det<X: Float>(m: &M33<X>) -> (M33<X>, X)
{
    let cofactors: M33<X> = from_fn(|r, c|
        X::zero()
        + m[(r+1) % 3][(c+1) % 3] * m[(r+2) % 3][(c+2) % 3]
        - m[(r+1) % 3][(c+2) % 3] * m[(r+2) % 3][(c+1) % 3]
    );
    let det = dot(&m[0], &cofactors[0]);
    (cofactors, det)
}
