/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Column filters for the item table, and the algebra that combines
//! them.
//!
//! Each active filter widget produces a [`FilterMap`] naming the
//! columns it constrains. [`combine_filters`] reduces any number of
//! those into the single map handed to the query stage:
//!
//! ```
//! use item_filter::Filter;
//! use item_filter::FilterMap;
//! use item_filter::combine_filters_with;
//! use item_filter::config::FilterConfig;
//!
//! let search = FilterMap::from([("name", Filter::string(["Chaos Orb"]))]);
//! let picker = FilterMap::from([
//!     ("name", Filter::string(["Divine Orb"])),
//!     ("type", Filter::string(["Currency"])),
//! ]);
//!
//! let merged = combine_filters_with(&FilterConfig::default(), [&search, &picker]).unwrap();
//! assert_eq!(
//!     merged.get("name"),
//!     Some(&Filter::string(["Chaos Orb", "Divine Orb"]))
//! );
//! assert_eq!(merged.get("type"), Some(&Filter::string(["Currency"])));
//! ```
//!
//! Combination is a fold under [`FilterMap`]'s monoid (see
//! [`algebra::TryMonoid`]): columns are unioned, filters sharing a
//! column are merged by kind, and merging incompatible filters fails
//! with a [`FilterError`] naming the column. Nothing is merged in
//! place; inputs stay valid after the call.

use std::borrow::Borrow;

use algebra::try_fold;

pub mod config;
mod error;
mod filter;
mod filter_map;

pub use error::FilterError;
pub use filter::CompareOp;
pub use filter::Filter;
pub use filter::FilterKind;
pub use filter::MergeRule;
pub use filter::NumberFilter;
pub use filter::StringFilter;
pub use filter_map::FilterMap;

use crate::config::FilterConfig;
use crate::config::StringValues;

/// Combine the filter maps of all active widgets into one.
///
/// This is a left fold under [`FilterMap`]'s monoid and nothing else:
/// the result depends only on `filters`. An empty input yields an
/// empty map; the first incompatible column stops the fold.
pub fn combine_filters<I>(filters: I) -> Result<FilterMap, FilterError>
where
    I: IntoIterator,
    I::Item: Borrow<FilterMap>,
{
    let mut count = 0usize;
    let merged = try_fold::<FilterMap, _>(filters.into_iter().inspect(|_| count += 1))?;
    tracing::debug!(
        maps = count,
        columns = merged.len(),
        "combined filter maps"
    );
    Ok(merged)
}

/// Like [`combine_filters`], then normalized according to `config`.
pub fn combine_filters_with<I>(config: &FilterConfig, filters: I) -> Result<FilterMap, FilterError>
where
    I: IntoIterator,
    I::Item: Borrow<FilterMap>,
{
    let mut merged = combine_filters(filters)?;
    if config.string_values == StringValues::Distinct {
        for filter in merged.filters_mut() {
            if let Filter::String(strings) = filter {
                *strings = strings.distinct();
            }
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    fn retain() -> FilterConfig {
        FilterConfig::default()
    }

    fn distinct() -> FilterConfig {
        FilterConfig {
            string_values: StringValues::Distinct,
        }
    }

    #[test]
    fn empty_input_is_empty_map() {
        let none: Vec<FilterMap> = vec![];
        assert_eq!(combine_filters_with(&retain(), none).unwrap(), FilterMap::new());
    }

    #[test]
    fn single_map_is_returned_unchanged() {
        let m = FilterMap::from([("a", Filter::string(["x", "x"]))]);
        assert_eq!(combine_filters_with(&retain(), [&m]).unwrap(), m);
    }

    #[test]
    fn retain_keeps_duplicates() {
        let a = FilterMap::from([("a", Filter::string(["x"]))]);
        let b = FilterMap::from([("a", Filter::string(["x", "y"]))]);
        let merged = combine_filters_with(&retain(), [&a, &b]).unwrap();
        assert_eq!(merged.get("a"), Some(&Filter::string(["x", "x", "y"])));
    }

    #[test]
    fn distinct_removes_duplicates_after_merge() {
        let a = FilterMap::from([("a", Filter::string(["x"]))]);
        let b = FilterMap::from([("a", Filter::string(["y", "x"]))]);
        let c = FilterMap::from([("b", Filter::number(CompareOp::Gt, 1.0))]);
        let merged = combine_filters_with(&distinct(), [&a, &b, &c]).unwrap();
        assert_eq!(merged.get("a"), Some(&Filter::string(["x", "y"])));
        assert_eq!(merged.get("b"), Some(&Filter::number(CompareOp::Gt, 1.0)));
    }

    #[test]
    fn errors_propagate() {
        let a = FilterMap::from([("p", Filter::number(CompareOp::Gt, 1.0))]);
        let b = FilterMap::from([("p", Filter::number(CompareOp::Lt, 9.0))]);
        let err = combine_filters_with(&retain(), [a, b]).unwrap_err();
        assert_eq!(err.column(), Some("p"));
        assert_eq!(
            err.root(),
            &FilterError::UnsupportedFilterKind {
                kind: FilterKind::Number
            }
        );
    }

    #[test]
    fn combine_filters_ignores_configuration() {
        // Whatever the environment says, the plain fold keeps
        // duplicates; only the explicit config removes them.
        let a = FilterMap::from([("a", Filter::string(["x"]))]);
        let plain = combine_filters([&a, &a]).unwrap();
        assert_eq!(plain.get("a"), Some(&Filter::string(["x", "x"])));
        assert_eq!(combine_filters_with(&retain(), [&a, &a]).unwrap(), plain);
        let deduped = combine_filters_with(&distinct(), [&a, &a]).unwrap();
        assert_eq!(deduped.get("a"), Some(&Filter::string(["x"])));
    }

    #[test]
    fn fold_stops_at_first_incompatible_map() {
        let maps = [
            FilterMap::from([("name", Filter::string(["Chaos Orb"]))]),
            FilterMap::from([("name", Filter::string(["Divine Orb"]))]),
            FilterMap::from([("name", Filter::number(CompareOp::Gt, 1.0))]),
            FilterMap::from([("league", Filter::string(["Standard"]))]),
        ];
        let mut visited = 0;
        let err = combine_filters(maps.iter().inspect(|_| visited += 1)).unwrap_err();
        assert_eq!(visited, 3);
        assert_eq!(err.column(), Some("name"));
        assert_eq!(
            err.root(),
            &FilterError::FilterKindMismatch {
                expected: FilterKind::String,
                found: FilterKind::Number,
            }
        );
    }

    #[traced_test]
    #[test]
    fn logs_merge_summary() {
        let a = FilterMap::from([("a", Filter::string(["x"]))]);
        let b = FilterMap::from([("b", Filter::string(["y"]))]);
        combine_filters_with(&retain(), [a, b]).unwrap();
        assert!(logs_contain("combined filter maps"));
        assert!(logs_contain("maps=2"));
        assert!(logs_contain("columns=2"));
    }

    #[traced_test]
    #[test]
    fn logs_incompatible_column() {
        let a = FilterMap::from([("kind", Filter::string(["x"]))]);
        let b = FilterMap::from([("kind", Filter::number(CompareOp::Eq, 2.0))]);
        assert!(combine_filters_with(&retain(), [a, b]).is_err());
        assert!(logs_contain("incompatible filters"));
        assert!(logs_contain("column=kind"));
    }
}
