/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Algebraic structures for associative combination and reduction.
//!
//! This crate provides the traits that describe how two values of a
//! type merge into one, and the folds that reduce whole sequences of
//! them. Instances are resolved statically: a type *is* a monoid by
//! implementing [`Monoid`], and folds pick the instance from the
//! result type.
//!
//! # Quick Start
//!
//! ```rust
//! use algebra::Monoid;
//! use algebra::Semigroup;
//! use algebra::fold;
//!
//! // Vec<T> is the free monoid: concatenation with [] as identity.
//! let a = vec![1, 2];
//! let b = vec![3];
//! assert_eq!(a.combine(&b), vec![1, 2, 3]);
//! assert_eq!(Vec::empty().combine(&a), a);
//!
//! let all: Vec<i32> = fold([vec![1], vec![2], vec![3]]);
//! assert_eq!(all, vec![1, 2, 3]);
//! ```
//!
//! # Core Concepts
//!
//! - **Semigroup**: A type with an associative binary operation
//!   (`combine`). Examples: addition, max, list concatenation.
//!
//! - **Monoid**: A semigroup with an identity element (`empty`).
//!   Examples: 0 for addition, the empty list for concatenation.
//!
//! - **CommutativeMonoid**: A monoid where combine is commutative.
//!
//! - **TrySemigroup** / **TryMonoid**: the same structures for
//!   operations that are only defined on compatible pairs. `try_combine`
//!   returns an error for incompatible operands; combining with the
//!   identity always succeeds. Folds over these stop at the first
//!   error rather than producing a partial result.
//!
//! # Folds
//!
//! - [`fold`] / [`try_fold`]: reduce a sequence left to right from the
//!   identity.
//! - [`fold_map`] / [`try_fold_map`]: map each item into the monoid,
//!   then fold.
//!
//! Folds accept owned values or references, so reducing a borrowed
//! slice leaves it untouched:
//!
//! ```
//! use algebra::fold;
//!
//! let parts = vec![vec!['a'], vec!['b']];
//! let joined: Vec<char> = fold(&parts);
//! assert_eq!(joined, vec!['a', 'b']);
//! assert_eq!(parts.len(), 2);
//! ```

mod fold;
mod list;
mod monoid;
mod semigroup;

pub use fold::fold;
pub use fold::fold_map;
pub use fold::try_fold;
pub use fold::try_fold_map;
pub use monoid::CommutativeMonoid;
pub use monoid::Monoid;
pub use monoid::TryMonoid;
pub use semigroup::Semigroup;
pub use semigroup::TrySemigroup;

// Tests
