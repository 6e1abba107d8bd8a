/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Configuration for filter combination.
//!
//! Values come from the environment ([`FilterConfig::from_env`]) or a
//! YAML file ([`FilterConfig::from_yaml`]). The caller owns the loaded
//! config and passes it to [`crate::combine_filters_with`]; plain
//! [`crate::combine_filters`] does not consult any configuration.
//!
//! Recognized environment variables:
//!
//! - `ITEM_FILTER_STRING_VALUES`: `retain` (default) or `distinct`.

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Environment variable consulted for [`FilterConfig::string_values`].
pub const STRING_VALUES_ENV: &str = "ITEM_FILTER_STRING_VALUES";

/// What happens to repeated values in merged string filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringValues {
    /// Keep every contributed value, duplicates included.
    #[default]
    Retain,
    /// Keep only the first occurrence of each value.
    Distinct,
}

impl FromStr for StringValues {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(StringValues::Retain),
            "distinct" => Ok(StringValues::Distinct),
            other => anyhow::bail!("expected `retain` or `distinct`, got `{}`", other),
        }
    }
}

/// Filter combination settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Duplicate handling for merged string filters.
    pub string_values: StringValues,
}

impl FilterConfig {
    /// Load from process environment variables. Unset variables keep
    /// their defaults; unparseable ones are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(val) = lookup(STRING_VALUES_ENV) {
            match val.parse() {
                Ok(parsed) => config.string_values = parsed,
                Err(e) => {
                    tracing::error!(
                        "failed to override config key string_values from value \"{}\" in ${}: {}",
                        val,
                        STRING_VALUES_ENV,
                        e
                    );
                }
            }
        }
        config
    }

    /// Load from a YAML file. Missing keys keep their defaults.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}
