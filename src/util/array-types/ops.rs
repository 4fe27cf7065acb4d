/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};

use num_traits::Num;

use crate::types::{V3, M3, M33};
use crate::methods_v::{dot, from_fn as vee_from_fn};
use crate::methods_m::from_fn as mat_from_fn;

// NOTE: Operator impls are deliberately between same-typed elements,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.
//
//       Each op is written once on values; the macro below fills in the
//       by-reference forms by copying.
macro_rules! forward_ref_binop {
    ($Trait:ident::$method:ident for $Lhs:ty, $Rhs:ty => $Out:ty) => {
        impl<'a, X: Num + Copy> $Trait<$Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $method(self, other: $Rhs) -> $Out
            { $Trait::$method(*self, other) }
        }

        impl<'b, X: Num + Copy> $Trait<&'b $Rhs> for $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $method(self, other: &'b $Rhs) -> $Out
            { $Trait::$method(self, *other) }
        }

        impl<'a, 'b, X: Num + Copy> $Trait<&'b $Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $method(self, other: &'b $Rhs) -> $Out
            { $Trait::$method(*self, *other) }
        }
    };
}

// vector-scalar and matrix-scalar ops only forward the left-hand reference
macro_rules! forward_ref_scalar_op {
    ($Trait:ident::$method:ident for $Lhs:ty) => {
        impl<'a, X: Num + Copy> $Trait<X> for &'a $Lhs {
            type Output = $Lhs;

            #[inline(always)]
            fn $method(self, scalar: X) -> $Lhs
            { $Trait::$method(*self, scalar) }
        }
    };
}

// ---------------------------------------------------------------------------
// vector-vector ops

impl<X: Num + Copy> Add<V3<X>> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn add(self, other: V3<X>) -> V3<X>
    { vee_from_fn(|k| self[k] + other[k]) }
}

impl<X: Num + Copy> Sub<V3<X>> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn sub(self, other: V3<X>) -> V3<X>
    { vee_from_fn(|k| self[k] - other[k]) }
}

forward_ref_binop!{ Add::add for V3<X>, V3<X> => V3<X> }
forward_ref_binop!{ Sub::sub for V3<X>, V3<X> => V3<X> }

impl<'b, X: Num + Copy> AddAssign<&'b V3<X>> for V3<X> {
    #[inline]
    fn add_assign(&mut self, other: &'b V3<X>)
    { *self = *self + *other }
}

impl<X: Num + Copy> AddAssign<V3<X>> for V3<X> {
    #[inline]
    fn add_assign(&mut self, other: V3<X>)
    { *self = *self + other }
}

impl<X: Num + Copy> SubAssign<V3<X>> for V3<X> {
    #[inline]
    fn sub_assign(&mut self, other: V3<X>)
    { *self = *self - other }
}

// ---------------------------------------------------------------------------
// unary ops

impl<X: Num + Copy + Neg<Output=X>> Neg for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn neg(self) -> V3<X>
    { self.map(|x| -x) }
}

impl<'a, X: Num + Copy + Neg<Output=X>> Neg for &'a V3<X> {
    type Output = V3<X>;

    #[inline]
    fn neg(self) -> V3<X>
    { -*self }
}

impl<X: Num + Copy + Neg<Output=X>> Neg for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn neg(self) -> M33<X>
    { self.map(|x| -x) }
}

impl<'a, X: Num + Copy + Neg<Output=X>> Neg for &'a M33<X> {
    type Output = M33<X>;

    #[inline]
    fn neg(self) -> M33<X>
    { -*self }
}

// ---------------------------------------------------------------------------
// scalar ops

impl<X: Num + Copy> Mul<X> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn mul(self, scalar: X) -> V3<X>
    { self.map(|x| x * scalar) }
}

impl<X: Num + Copy> Div<X> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn div(self, scalar: X) -> V3<X>
    { self.map(|x| x / scalar) }
}

impl<X: Num + Copy> Mul<X> for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn mul(self, scalar: X) -> M33<X>
    { self.map(|x| x * scalar) }
}

forward_ref_scalar_op!{ Mul::mul for V3<X> }
forward_ref_scalar_op!{ Div::div for V3<X> }
forward_ref_scalar_op!{ Mul::mul for M33<X> }

impl<X: Num + Copy> MulAssign<X> for V3<X> {
    #[inline]
    fn mul_assign(&mut self, scalar: X)
    { *self = *self * scalar }
}

// NOTE: the orphan rules prevent us from impl-ing `scalar * vector`
//       generically, so these are written for f64 only.
impl Mul<V3<f64>> for f64 {
    type Output = V3<f64>;

    #[inline(always)]
    fn mul(self, vector: V3<f64>) -> V3<f64>
    { vector * self }
}

impl Mul<M33<f64>> for f64 {
    type Output = M33<f64>;

    #[inline(always)]
    fn mul(self, matrix: M33<f64>) -> M33<f64>
    { matrix * self }
}

// ---------------------------------------------------------------------------
// matrix-matrix ops

impl<X: Num + Copy> Add<M33<X>> for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn add(self, other: M33<X>) -> M33<X>
    { M3([self[0] + other[0], self[1] + other[1], self[2] + other[2]]) }
}

impl<X: Num + Copy> Sub<M33<X>> for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn sub(self, other: M33<X>) -> M33<X>
    { M3([self[0] - other[0], self[1] - other[1], self[2] - other[2]]) }
}

impl<X: Num + Copy> Mul<M33<X>> for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn mul(self, other: M33<X>) -> M33<X>
    { mat_from_fn(|r, c| self[r][0] * other[0][c] + self[r][1] * other[1][c] + self[r][2] * other[2][c]) }
}

forward_ref_binop!{ Add::add for M33<X>, M33<X> => M33<X> }
forward_ref_binop!{ Sub::sub for M33<X>, M33<X> => M33<X> }
forward_ref_binop!{ Mul::mul for M33<X>, M33<X> => M33<X> }

// ---------------------------------------------------------------------------
// vector-matrix ops

/// Row-vector times matrix.
impl<X: Num + Copy> Mul<M33<X>> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn mul(self, m: M33<X>) -> V3<X>
    { vee_from_fn(|c| self[0] * m[0][c] + self[1] * m[1][c] + self[2] * m[2][c]) }
}

/// Matrix times column-vector.
impl<X: Num + Copy> Mul<V3<X>> for M33<X> {
    type Output = V3<X>;

    #[inline]
    fn mul(self, v: V3<X>) -> V3<X>
    { vee_from_fn(|r| dot(&self[r], &v)) }
}

forward_ref_binop!{ Mul::mul for V3<X>, M33<X> => V3<X> }
forward_ref_binop!{ Mul::mul for M33<X>, V3<X> => V3<X> }

#[cfg(test)]
mod tests {
    use crate::{V3, mat};

    #[test]
    fn multiplication_order() {
        // matrices that don't commute
        let a = mat::from_array([
            [2, 2, 0],
            [0, 4, 0],
            [0, 0, 2],
        ]);
        let b = mat::from_array([
            [0, 1, 0],
            [1, 0, 0],
            [0, 0, 1],
        ]);

        assert_eq!(&a * &b, mat::from_array([
            [2, 2, 0],
            [4, 0, 0],
            [0, 0, 2],
        ]));
        assert_eq!(&b * &a, mat::from_array([
            [0, 4, 0],
            [2, 2, 0],
            [0, 0, 2],
        ]));
    }

    #[test]
    fn row_vs_column_products() {
        let m = mat::from_array([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        let v = V3([1, 0, -1]);
        assert_eq!(v * m, V3([-6, -6, -6]));
        assert_eq!(m * v, V3([-2, -2, -2]));
        assert_eq!(&m * &v, m.t().t() * v);
        assert_eq!(v * m, m.t() * v);
    }

    #[test]
    fn arithmetic() {
        let v = V3([1.0, 2.0, 3.0]);
        assert_eq!(v + v, 2.0 * v);
        assert_eq!(&v - &v, V3::zero());
        assert_eq!(-v, v * -1.0);
        assert_eq!(v / 2.0, V3([0.5, 1.0, 1.5]));

        let mut w = v;
        w += &v;
        w -= v;
        assert_eq!(w, v);

        let m = mat::from_array([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]]);
        assert_eq!(-(&m) + m, mat::zero());
        assert_eq!(2.0 * m - m, m);
    }
}
