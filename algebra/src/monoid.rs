/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Monoid: semigroup with identity element.

use super::Semigroup;
use super::TrySemigroup;

/// A semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Left identity**: `empty().combine(a) == a`
/// - **Right identity**: `a.combine(empty()) == a`
///
/// # Example
///
/// ```rust
/// use algebra::Monoid;
/// use algebra::Semigroup;
///
/// // Row count across table pages.
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Rows(usize);
///
/// impl Semigroup for Rows {
///     fn combine(&self, other: &Self) -> Self {
///         Rows(self.0 + other.0)
///     }
/// }
///
/// impl Monoid for Rows {
///     fn empty() -> Self {
///         Rows(0)
///     }
/// }
///
/// let pages = [Rows(50), Rows(50), Rows(7)];
/// assert_eq!(Rows::concat(pages), Rows(107));
/// assert_eq!(Rows::empty().combine(&Rows(7)), Rows(7));
/// assert_eq!(Rows(7).combine(&Rows::empty()), Rows(7));
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Fold an iterator using combine, starting from empty.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        crate::fold(iter)
    }
}

/// A monoid where the operation is commutative.
///
/// Additional law:
/// - **Commutative**: `a.combine(b) == b.combine(a)`
pub trait CommutativeMonoid: Monoid {}

/// A fallible semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Identity**: `empty().try_combine(a) == Ok(a)` and
///   `a.try_combine(empty()) == Ok(a)`. Combining with the identity
///   never fails.
/// - **Associative**: inherited from [`TrySemigroup`].
pub trait TryMonoid: TrySemigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Fold an iterator using `try_combine`, starting from empty and
    /// stopping at the first error.
    fn try_concat<I>(iter: I) -> Result<Self, Self::Error>
    where
        I: IntoIterator<Item = Self>,
    {
        crate::try_fold(iter)
    }
}
