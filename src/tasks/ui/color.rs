/* ************************************************************************ **
** This file is part of kred, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::borrow::Borrow;

use ansi_term::Style;

/// Wrap a value so that it is displayed in the given style.
///
/// The two type parameters let `U` be displayed as a borrowed `T`, so that
/// owned values can be painted and returned from functions.
pub fn gpaint<U, T: ?Sized>(style: Style, value: U) -> Wrapper<U, T>
{ Wrapper { style, value, _target: Default::default() } }

// hack for type inference issues
pub fn paint<T>(style: Style, value: T) -> Wrapper<T, T>
{ gpaint(style, value) }

/// A wrapper for colorizing `Display` and `Debug` output.
pub struct Wrapper<U, T: ?Sized = U> {
    style: Style,
    value: U,
    _target: std::marker::PhantomData<*const T>,
}

macro_rules! derive_fmt_impl {
    ($($Trait:ident)*) => {$(
        impl<U, T> fmt::$Trait for Wrapper<U, T>
        where
            U: Borrow<T>,
            T: ?Sized + fmt::$Trait,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.style.prefix())?;
                T::fmt(self.value.borrow(), f)?;
                write!(f, "{}", self.style.suffix())
            }
        }
    )*};
}

derive_fmt_impl!{ Display Debug LowerExp }
