/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Reductions over sequences of monoid values.
//!
//! All folds run left to right from the identity, so they are
//! correct for non-commutative monoids such as `Vec<T>`. Items may be
//! owned values or references: anything that borrows as the monoid
//! type is accepted, which lets callers fold without giving up their
//! inputs.

use std::borrow::Borrow;

use super::Monoid;
use super::TryMonoid;

/// Reduce `items` left to right, starting from `M::empty()`.
///
/// An empty input yields `M::empty()`.
///
/// ```
/// use algebra::fold;
///
/// let xs: Vec<i32> = fold([vec![1], vec![2, 3], vec![]]);
/// assert_eq!(xs, vec![1, 2, 3]);
/// ```
pub fn fold<M, I>(items: I) -> M
where
    M: Monoid,
    I: IntoIterator,
    I::Item: Borrow<M>,
{
    items
        .into_iter()
        .fold(M::empty(), |acc, x| acc.combine(x.borrow()))
}

/// Map every item into the monoid `M`, then [`fold`] the results.
///
/// ```
/// use algebra::fold_map;
///
/// let xs: Vec<String> = fold_map(|n: u32| vec![n.to_string()], [1, 2]);
/// assert_eq!(xs, vec!["1".to_string(), "2".to_string()]);
/// ```
pub fn fold_map<T, M, F, I>(mapper: F, items: I) -> M
where
    M: Monoid,
    F: FnMut(T) -> M,
    I: IntoIterator<Item = T>,
{
    fold(items.into_iter().map(mapper))
}

/// Reduce `items` left to right with `try_combine`, starting from
/// `M::empty()`. The first failure is returned and the remaining
/// items are not visited.
pub fn try_fold<M, I>(items: I) -> Result<M, M::Error>
where
    M: TryMonoid,
    I: IntoIterator,
    I::Item: Borrow<M>,
{
    items
        .into_iter()
        .try_fold(M::empty(), |acc, x| acc.try_combine(x.borrow()))
}

/// Map every item into the fallible monoid `M`, then [`try_fold`]
/// the results.
pub fn try_fold_map<T, M, F, I>(mapper: F, items: I) -> Result<M, M::Error>
where
    M: TryMonoid,
    F: FnMut(T) -> M,
    I: IntoIterator<Item = T>,
{
    try_fold(items.into_iter().map(mapper))
}
