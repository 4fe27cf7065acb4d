/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::types::V3;

use num_traits::{Num, Float, Zero};

/// Construct a vector from a function on indices.
#[inline(always)]
pub fn from_fn<X, F>(mut f: F) -> V3<X>
where F: FnMut(usize) -> X,
{ V3([f(0), f(1), f(2)]) }

/// Inner product of two vectors.
#[inline(always)]
pub fn dot<X: Num + Copy>(a: &V3<X>, b: &V3<X>) -> X
{ a[0] * b[0] + a[1] * b[1] + a[2] * b[2] }

impl<X> V3<X> {
    /// Construct a vector from a function on indices.
    ///
    /// This is also available as the free function `vee::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { from_fn(f) }

    /// Map each scalar element of the vector.
    #[inline(always)]
    pub fn map<B, F>(self, mut f: F) -> V3<B>
    where F: FnMut(X) -> B,
    {
        let V3([x, y, z]) = self;
        V3([f(x), f(y), f(z)])
    }

    /// Apply a fallible function to each scalar element, with short-circuiting.
    #[inline(always)]
    pub fn try_map<E, B, F>(self, mut f: F) -> Result<V3<B>, E>
    where F: FnMut(X) -> Result<B, E>,
    {
        let V3([x, y, z]) = self;
        Ok(V3([f(x)?, f(y)?, f(z)?]))
    }
}

impl<X: Num + Copy> V3<X> {
    /// Get the zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    { V3([X::zero(); 3]) }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> X
    { dot(self, other) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> X
    { dot(self, self) }

    /// Perform elementwise multiplication.
    #[inline(always)]
    pub fn mul_diag(&self, other: &Self) -> Self
    { from_fn(|i| self[i] * other[i]) }
}

impl<X: Float> V3<X> {
    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> X
    { self.sqnorm().sqrt() }

    /// Elementwise floor.
    #[inline(always)]
    pub fn floor(&self) -> Self
    { self.map(Float::floor) }

    /// Elementwise rounding to the nearest integer.
    #[inline(always)]
    pub fn round(&self) -> Self
    { self.map(Float::round) }

    /// Reduce each coordinate into the half-open interval `[0, 1)`.
    ///
    /// Values of magnitude `~1e-17` below an integer can still round up to `1.0`
    /// after subtraction; callers comparing folded points should account for it.
    #[inline]
    pub fn fract_floor(&self) -> Self
    { *self - self.floor() }

    /// Whether all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool
    { self.iter().all(|x| x.is_finite()) }
}

impl<X: Zero + Copy> V3<X> {
    #[inline]
    pub fn is_zero(&self) -> bool
    { self.iter().all(|x| x.is_zero()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norms() {
        let v = V3([3.0, 4.0, 12.0]);
        assert_eq!(v.sqnorm(), 169.0);
        assert_eq!(v.norm(), 13.0);
        assert_eq!(V3::dot(&v, &V3([1.0, 0.0, -1.0])), -9.0);
        assert_eq!(V3([1, 2, 3]).mul_diag(&V3([2, 2, -1])), V3([2, 4, -3]));
    }

    #[test]
    fn fract_floor() {
        let v = V3([-0.25, 1.5, 3.0]).fract_floor();
        assert_close!(abs=1e-15, v.0, [0.75, 0.5, 0.0]);
        assert!(v.iter().all(|&x| 0.0 <= x && x < 1.0));
    }

    #[test]
    fn try_map() {
        let ok: Result<_, ()> = V3([1.0, 2.0, 3.0]).try_map(|x| Ok(x as i32));
        assert_eq!(ok, Ok(V3([1, 2, 3])));

        let err = V3([1.0, -2.0, 3.0]).try_map(|x| match x < 0.0 {
            true => Err(x),
            false => Ok(x),
        });
        assert_eq!(err, Err(-2.0));
    }
}
