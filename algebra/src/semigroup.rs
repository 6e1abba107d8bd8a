/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Semigroup: associative binary operation, total or fallible.

/// A type with an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Example
///
/// ```rust
/// use algebra::Semigroup;
///
/// // Keeps the longer label; the left one wins a tie.
/// #[derive(Clone, Debug, PartialEq, Eq)]
/// struct Longest(String);
///
/// impl Semigroup for Longest {
///     fn combine(&self, other: &Self) -> Self {
///         if other.0.len() > self.0.len() {
///             other.clone()
///         } else {
///             self.clone()
///         }
///     }
/// }
///
/// let x = Longest("Orb".into());
/// let y = Longest("Chaos Orb".into());
/// let z = Longest("Divine Orb".into());
/// assert_eq!(x.combine(&y).combine(&z), Longest("Divine Orb".into()));
/// assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
/// ```
pub trait Semigroup: Sized {
    /// Combine two values associatively.
    fn combine(&self, other: &Self) -> Self;

    /// In-place variant of combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

/// A semigroup whose operation is only defined on some pairs of
/// values. Combining an undefined pair yields `Self::Error`.
///
/// Laws (not enforced by type system), over the pairs for which
/// `try_combine` succeeds:
///
/// - **Associative**:
///   `a.try_combine(b)?.try_combine(c)? == a.try_combine(&b.try_combine(c)?)?`
///
/// When one side of the equation fails, the other must fail too.
///
/// # Example
///
/// ```rust
/// use algebra::TrySemigroup;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Checked(u8);
///
/// impl TrySemigroup for Checked {
///     type Error = &'static str;
///
///     fn try_combine(&self, other: &Self) -> Result<Self, Self::Error> {
///         self.0.checked_add(other.0).map(Checked).ok_or("overflow")
///     }
/// }
///
/// assert_eq!(Checked(1).try_combine(&Checked(2)), Ok(Checked(3)));
/// assert_eq!(Checked(255).try_combine(&Checked(1)), Err("overflow"));
/// ```
pub trait TrySemigroup: Sized {
    /// Why two values could not be combined.
    type Error;

    /// Combine two values associatively, failing if they are
    /// incompatible.
    fn try_combine(&self, other: &Self) -> Result<Self, Self::Error>;
}
