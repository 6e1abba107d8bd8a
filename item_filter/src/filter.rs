/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Single-column filters and the monoid that merges them.
//!
//! A [`Filter`] constrains one column of the item table. Filters of
//! the same kind merge through the rule registered for that kind (see
//! [`MergeRule`]); [`Filter::Empty`] is the identity, and merging two
//! different kinds is an error.
//!
//! On the wire a filter is a JSON object tagged by `type`:
//!
//! ```text
//! {}                                          Filter::Empty
//! {"type": "string", "value": ["a", "b"]}     Filter::String
//! {"type": "number", "op": "gt", "value": 5}  Filter::Number
//! ```

use std::collections::HashSet;
use std::fmt;

use algebra::Monoid;
use algebra::Semigroup;
use algebra::TryMonoid;
use algebra::TrySemigroup;
use enum_as_inner::EnumAsInner;
use serde::Deserialize;
use serde::Serialize;

use crate::error::FilterError;

/// The tag identifying each non-empty filter variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKind {
    /// See [`StringFilter`].
    String,
    /// See [`NumberFilter`].
    Number,
}

impl FilterKind {
    /// The `type` tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::String => "string",
            FilterKind::Number => "number",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a [`NumberFilter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareOp {
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `==`
    Eq,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
}

/// Per-kind merge rule.
///
/// Every filter payload type implements this next to its definition;
/// [`Filter`]'s dispatcher calls it when both operands carry that
/// kind. Kinds without a sound merge return
/// [`FilterError::UnsupportedFilterKind`] instead of picking a side.
pub trait MergeRule: Sized {
    /// The kind tag this rule is registered under.
    const KIND: FilterKind;

    /// Merge two filters of this kind, `self` first.
    fn merge(&self, other: &Self) -> Result<Self, FilterError>;
}

/// "The column value must be one of these strings."
///
/// Under merge the accepted values are concatenated in order;
/// duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringFilter {
    /// The accepted values, in the order they were contributed.
    pub value: Vec<String>,
}

impl StringFilter {
    /// A filter accepting exactly `values`.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted values.
    pub fn values(&self) -> &[String] {
        &self.value
    }

    /// A copy with repeated values removed, keeping the first
    /// occurrence of each.
    pub fn distinct(&self) -> Self {
        let mut seen = HashSet::new();
        Self {
            value: self
                .value
                .iter()
                .filter(|v| seen.insert(v.as_str()))
                .cloned()
                .collect(),
        }
    }
}

impl Semigroup for StringFilter {
    fn combine(&self, other: &Self) -> Self {
        Self {
            value: self.value.combine(&other.value),
        }
    }
}

impl Monoid for StringFilter {
    fn empty() -> Self {
        Self { value: Vec::empty() }
    }
}

impl MergeRule for StringFilter {
    const KIND: FilterKind = FilterKind::String;

    fn merge(&self, other: &Self) -> Result<Self, FilterError> {
        Ok(self.combine(other))
    }
}

/// "The column value must compare to `value` with `op`."
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberFilter {
    /// Comparison applied to the column value.
    pub op: CompareOp,
    /// Right-hand side of the comparison. Must be finite to survive
    /// the JSON wire format: NaN and infinities serialize as `null`,
    /// which is rejected on the way back in.
    pub value: f64,
}

impl MergeRule for NumberFilter {
    const KIND: FilterKind = FilterKind::Number;

    // Two comparisons on one column have no agreed meaning yet
    // (intersection, last-wins, ...), so they are refused.
    fn merge(&self, _other: &Self) -> Result<Self, FilterError> {
        Err(FilterError::UnsupportedFilterKind { kind: Self::KIND })
    }
}

/// A constraint on a single column.
#[derive(Clone, Debug, Default, PartialEq, EnumAsInner, Serialize, Deserialize)]
#[serde(try_from = "RawFilter", into = "RawFilter")]
pub enum Filter {
    /// No constraint. The identity for [`TrySemigroup::try_combine`].
    #[default]
    Empty,
    /// Set membership over strings.
    String(StringFilter),
    /// A single numeric comparison.
    Number(NumberFilter),
}

impl Filter {
    /// A string filter accepting exactly `values`.
    pub fn string<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::String(StringFilter::new(values))
    }

    /// A numeric comparison filter. See [`NumberFilter::value`] for
    /// the restriction on non-finite values.
    pub fn number(op: CompareOp, value: f64) -> Self {
        Filter::Number(NumberFilter { op, value })
    }

    /// The kind tag, or `None` for [`Filter::Empty`].
    pub fn kind(&self) -> Option<FilterKind> {
        match self {
            Filter::Empty => None,
            Filter::String(_) => Some(StringFilter::KIND),
            Filter::Number(_) => Some(NumberFilter::KIND),
        }
    }
}

/// Merge `first` with `second` when `second` is empty or of the same
/// kind as `first`.
fn merge_as<F>(
    first: &F,
    second: &Filter,
    project: fn(&Filter) -> Option<&F>,
) -> Result<F, FilterError>
where
    F: MergeRule + Clone,
{
    let Some(found) = second.kind() else {
        return Ok(first.clone());
    };
    match project(second) {
        Some(second) => first.merge(second),
        None => Err(FilterError::FilterKindMismatch {
            expected: F::KIND,
            found,
        }),
    }
}

impl TrySemigroup for Filter {
    type Error = FilterError;

    fn try_combine(&self, other: &Self) -> Result<Self, Self::Error> {
        match self {
            Filter::Empty => Ok(other.clone()),
            Filter::String(first) => merge_as(first, other, Filter::as_string).map(Filter::String),
            Filter::Number(first) => merge_as(first, other, Filter::as_number).map(Filter::Number),
        }
    }
}

impl TryMonoid for Filter {
    fn empty() -> Self {
        Filter::Empty
    }
}

impl From<StringFilter> for Filter {
    fn from(filter: StringFilter) -> Self {
        Filter::String(filter)
    }
}

impl From<NumberFilter> for Filter {
    fn from(filter: NumberFilter) -> Self {
        Filter::Number(filter)
    }
}

// Wire representation.

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFilter {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    op: Option<CompareOp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<RawValue>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Strings(Vec<String>),
    Number(f64),
}

impl TryFrom<RawFilter> for Filter {
    type Error = String;

    fn try_from(raw: RawFilter) -> Result<Self, Self::Error> {
        let RawFilter { kind, op, value } = raw;
        let Some(kind) = kind else {
            if op.is_some() || value.is_some() {
                return Err("filter has fields but no `type`".to_string());
            }
            return Ok(Filter::Empty);
        };
        match (kind.as_str(), op, value) {
            ("string", None, Some(RawValue::Strings(value))) => {
                Ok(Filter::String(StringFilter { value }))
            }
            ("string", Some(_), _) => Err("`string` filters take no `op`".to_string()),
            ("string", None, _) => {
                Err("`string` filters need a `value` array of strings".to_string())
            }
            ("number", Some(op), Some(RawValue::Number(value))) => {
                Ok(Filter::Number(NumberFilter { op, value }))
            }
            ("number", None, _) => Err("`number` filters need an `op`".to_string()),
            ("number", Some(_), _) => Err("`number` filters need a numeric `value`".to_string()),
            (other, _, _) => Err(format!("unknown filter type `{}`", other)),
        }
    }
}

impl From<Filter> for RawFilter {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Empty => RawFilter::default(),
            Filter::String(StringFilter { value }) => RawFilter {
                kind: Some(FilterKind::String.as_str().to_string()),
                op: None,
                value: Some(RawValue::Strings(value)),
            },
            Filter::Number(NumberFilter { op, value }) => RawFilter {
                kind: Some(FilterKind::Number.as_str().to_string()),
                op: Some(op),
                value: Some(RawValue::Number(value)),
            },
        }
    }
}
