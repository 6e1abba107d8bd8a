/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Errors raised while combining filters.

use crate::filter::FilterKind;

/// Errors raised while combining filters.
///
/// Both kinds are deterministic usage errors: retrying the same
/// combination fails the same way, and no partial result is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// Two non-empty filters of different kinds were merged.
    #[error("cannot merge a `{found}` filter into a `{expected}` filter")]
    FilterKindMismatch {
        expected: FilterKind,
        found: FilterKind,
    },

    /// Two filters of a kind that has no merge rule were merged.
    #[error("`{kind}` filters cannot be merged")]
    UnsupportedFilterKind { kind: FilterKind },

    /// Merging the filters of a named column failed.
    #[error("incompatible filters for column `{column}`: {source}")]
    Column {
        column: String,
        #[source]
        source: Box<FilterError>,
    },
}

impl FilterError {
    /// The underlying mismatch or unsupported-kind error, with any
    /// column context removed.
    pub fn root(&self) -> &FilterError {
        match self {
            FilterError::Column { source, .. } => source.root(),
            other => other,
        }
    }

    /// The column the failure occurred in, if known.
    pub fn column(&self) -> Option<&str> {
        match self {
            FilterError::Column { column, .. } => Some(column),
            _ => None,
        }
    }

    pub(crate) fn in_column(self, column: &str) -> Self {
        FilterError::Column {
            column: column.to_string(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_strips_column_context() {
        let err = FilterError::UnsupportedFilterKind {
            kind: FilterKind::Number,
        }
        .in_column("price");
        assert_eq!(err.column(), Some("price"));
        assert_eq!(
            err.root(),
            &FilterError::UnsupportedFilterKind {
                kind: FilterKind::Number
            }
        );
    }

    #[test]
    fn messages_name_the_kinds() {
        let err = FilterError::FilterKindMismatch {
            expected: FilterKind::String,
            found: FilterKind::Number,
        };
        assert_eq!(
            err.to_string(),
            "cannot merge a `number` filter into a `string` filter"
        );
        assert_eq!(
            err.in_column("name").to_string(),
            "incompatible filters for column `name`: cannot merge a `number` filter into a `string` filter"
        );
    }
}
