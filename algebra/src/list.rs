/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The free monoid on sequences: `Vec<T>` under concatenation.
//!
//! - `combine = a ++ b` (order preserved, duplicates retained)
//! - `empty = []`
//!
//! This is not set union: `[x].combine([x]) == [x, x]`. It is not
//! commutative either, so there is no [`CommutativeMonoid`] instance.
//!
//! [`CommutativeMonoid`]: crate::CommutativeMonoid

use super::Monoid;
use super::Semigroup;

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(self);
        out.extend_from_slice(other);
        out
    }

    fn combine_assign(&mut self, other: &Self) {
        self.extend_from_slice(other);
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}
