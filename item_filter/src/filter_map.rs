/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Named filter maps: one [`Filter`] per column.
//!
//! Combining two maps works pointwise, the same way a pointwise map
//! lattice joins its values:
//!
//! - keys: union of the key sets
//! - values: [`Filter`]'s `try_combine` on overlapping keys, left
//!   operand first
//!
//! The empty map is the identity. Neither operand is modified.
//!
//! # Example
//!
//! ```
//! use algebra::TrySemigroup;
//! use item_filter::Filter;
//! use item_filter::FilterMap;
//!
//! let a = FilterMap::from([("name", Filter::string(["Divine Orb"]))]);
//! let b = FilterMap::from([
//!     ("name", Filter::string(["Chaos Orb"])),
//!     ("league", Filter::string(["Standard"])),
//! ]);
//!
//! let merged = a.try_combine(&b).unwrap();
//! assert_eq!(
//!     merged.get("name"),
//!     Some(&Filter::string(["Divine Orb", "Chaos Orb"]))
//! );
//! assert_eq!(merged.get("league"), Some(&Filter::string(["Standard"])));
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;

use algebra::TryMonoid;
use algebra::TrySemigroup;
use serde::Deserialize;
use serde::Serialize;

use crate::error::FilterError;
use crate::filter::Filter;

/// A mapping from column name to the filter applied to that column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterMap {
    inner: BTreeMap<String, Filter>,
}

impl FilterMap {
    /// An empty map.
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Set the filter for `column`, returning the one it replaces.
    pub fn insert(&mut self, column: impl Into<String>, filter: Filter) -> Option<Filter> {
        self.inner.insert(column.into(), filter)
    }

    /// The filter for `column`, if any.
    pub fn get(&self, column: &str) -> Option<&Filter> {
        self.inner.get(column)
    }

    /// Whether `column` has a filter.
    pub fn contains_key(&self, column: &str) -> bool {
        self.inner.contains_key(column)
    }

    /// Number of filtered columns.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if no column is filtered.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(column, filter)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn filters_mut(&mut self) -> impl Iterator<Item = &mut Filter> {
        self.inner.values_mut()
    }
}

impl TrySemigroup for FilterMap {
    type Error = FilterError;

    fn try_combine(&self, other: &Self) -> Result<Self, Self::Error> {
        let mut merged = other.clone();
        for (column, first) in &self.inner {
            let filter = match other.inner.get(column) {
                Some(second) => first.try_combine(second).map_err(|err| {
                    tracing::warn!(column = %column, error = %err, "incompatible filters");
                    err.in_column(column)
                })?,
                None => first.clone(),
            };
            merged.inner.insert(column.clone(), filter);
        }
        Ok(merged)
    }
}

impl TryMonoid for FilterMap {
    fn empty() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, Filter)> for FilterMap {
    fn from_iter<I: IntoIterator<Item = (K, Filter)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Filter); N]> for FilterMap {
    fn from(entries: [(K, Filter); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<BTreeMap<String, Filter>> for FilterMap {
    fn from(inner: BTreeMap<String, Filter>) -> Self {
        Self { inner }
    }
}

impl IntoIterator for FilterMap {
    type Item = (String, Filter);
    type IntoIter = btree_map::IntoIter<String, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use maplit::btreemap;
    use serde_json::json;

    use super::*;
    use crate::filter::CompareOp;
    use crate::filter::FilterKind;

    fn column(values: &[&str]) -> Filter {
        Filter::string(values.iter().copied())
    }

    #[test]
    fn disjoint_keys_are_unioned() {
        let a = FilterMap::from([("a", column(&["x"]))]);
        let b = FilterMap::from([("b", column(&["y"]))]);
        let merged = a.try_combine(&b).unwrap();
        assert_eq!(
            merged,
            FilterMap::from(btreemap! {
                "a".to_string() => column(&["x"]),
                "b".to_string() => column(&["y"]),
            })
        );
    }

    #[test]
    fn overlapping_keys_merge_left_first() {
        let a = FilterMap::from([("a", column(&["x"]))]);
        let b = FilterMap::from([("a", column(&["y"]))]);
        assert_eq!(a.try_combine(&b).unwrap().get("a"), Some(&column(&["x", "y"])));
        assert_eq!(b.try_combine(&a).unwrap().get("a"), Some(&column(&["y", "x"])));
    }

    #[test]
    fn empty_map_is_identity() {
        let a = FilterMap::from([
            ("a", column(&["x"])),
            ("price", Filter::number(CompareOp::Gt, 1.0)),
        ]);
        assert_eq!(FilterMap::empty().try_combine(&a).unwrap(), a);
        assert_eq!(a.try_combine(&FilterMap::empty()).unwrap(), a);
    }

    #[test]
    fn empty_filter_under_a_key_passes_through() {
        let a = FilterMap::from([("a", Filter::Empty)]);
        let b = FilterMap::from([("a", Filter::number(CompareOp::Lt, 3.0))]);
        assert_eq!(
            a.try_combine(&b).unwrap().get("a"),
            Some(&Filter::number(CompareOp::Lt, 3.0))
        );
    }

    #[test]
    fn failure_names_the_column() {
        let a = FilterMap::from([("ok", column(&["x"])), ("kind", column(&["x"]))]);
        let b = FilterMap::from([("kind", Filter::number(CompareOp::Eq, 1.0))]);
        let err = a.try_combine(&b).unwrap_err();
        assert_eq!(err.column(), Some("kind"));
        assert_eq!(
            err.root(),
            &FilterError::FilterKindMismatch {
                expected: FilterKind::String,
                found: FilterKind::Number,
            }
        );
    }

    #[test]
    fn inputs_are_not_modified() {
        let a = FilterMap::from([("a", column(&["x"])), ("b", column(&["y"]))]);
        let b = FilterMap::from([("a", column(&["z"]))]);
        let (a0, b0) = (a.clone(), b.clone());
        let _ = a.try_combine(&b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn serializes_as_object() {
        let a = FilterMap::from([("name", column(&["x"])), ("any", Filter::Empty)]);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            json!({"any": {}, "name": {"type": "string", "value": ["x"]}})
        );
        let back: FilterMap = serde_json::from_value(serde_json::to_value(&a).unwrap()).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn accessors() {
        let mut m = FilterMap::new();
        assert!(m.is_empty());
        assert_eq!(m.insert("a", column(&["x"])), None);
        assert_eq!(m.insert("a", column(&["y"])), Some(column(&["x"])));
        assert!(m.contains_key("a"));
        assert!(!m.contains_key("b"));
        assert_eq!(m.len(), 1);
        let pairs: Vec<_> = m.iter().collect();
        assert_eq!(pairs, vec![("a", &column(&["y"]))]);
        let owned: Vec<_> = m.into_iter().collect();
        assert_eq!(owned, vec![("a".to_string(), column(&["y"]))]);
    }
}
