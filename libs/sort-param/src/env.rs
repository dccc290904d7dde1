// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use sort_sql::{Function, LOWER_FUNCTION};

use crate::{EXO_SORT_CASE_FOLD_FUNCTION, EXO_SORT_ENABLED};

/// Raw configuration values keyed by name.
///
/// Implemented for any string map, so the process environment can be passed as
/// `std::env::vars().collect::<HashMap<_, _>>()`.
pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl<K, V> Environment for HashMap<K, V>
where
    K: Borrow<str> + Eq + Hash + Send + Sync,
    V: AsRef<str> + Send + Sync,
{
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|value| value.as_ref().to_string())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("{key} must be a boolean (true/false, 1/0, yes/no, on/off), got '{value}'")]
    InvalidBoolean { key: String, value: String },

    #[error("{key} must name a SQL function such as 'lower', got '{value}'")]
    InvalidIdentifier { key: String, value: String },
}

/// Typed reads of the `EXO_SORT_*` settings, each falling back to its default when unset.
pub(crate) struct SortSettings<'a> {
    env: &'a dyn Environment,
}

impl<'a> SortSettings<'a> {
    pub(crate) fn new(env: &'a dyn Environment) -> Self {
        Self { env }
    }

    pub(crate) fn enabled(&self) -> Result<bool, EnvError> {
        let Some(value) = self.env.get(EXO_SORT_ENABLED) else {
            return Ok(true);
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(EnvError::InvalidBoolean {
                key: EXO_SORT_ENABLED.to_string(),
                value,
            }),
        }
    }

    pub(crate) fn case_fold_function(&self) -> Result<String, EnvError> {
        match self.env.get(EXO_SORT_CASE_FOLD_FUNCTION) {
            None => Ok(LOWER_FUNCTION.to_string()),
            Some(value) if Function::is_valid_name(value.trim()) => Ok(value.trim().to_string()),
            Some(value) => Err(EnvError::InvalidIdentifier {
                key: EXO_SORT_CASE_FOLD_FUNCTION.to_string(),
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_flag() {
        for (value, expected) in [
            ("Yes", true),
            (" on ", true),
            ("1", true),
            ("OFF", false),
            ("0", false),
        ] {
            let env = HashMap::from([(EXO_SORT_ENABLED, value)]);
            assert_eq!(
                SortSettings::new(&env).enabled(),
                Ok(expected),
                "value '{value}'"
            );
        }

        let env = HashMap::from([(EXO_SORT_ENABLED, "enabled")]);
        assert_eq!(
            SortSettings::new(&env).enabled(),
            Err(EnvError::InvalidBoolean {
                key: EXO_SORT_ENABLED.to_string(),
                value: "enabled".to_string(),
            })
        );
    }

    #[test]
    fn unset_settings_use_defaults() {
        let env = HashMap::<String, String>::new();
        let settings = SortSettings::new(&env);

        assert_eq!(settings.enabled(), Ok(true));
        assert_eq!(settings.case_fold_function(), Ok("lower".to_string()));
    }

    #[test]
    fn case_fold_function_is_trimmed_and_checked() {
        let env = HashMap::from([(
            EXO_SORT_CASE_FOLD_FUNCTION.to_string(),
            " unaccent\n".to_string(),
        )]);
        assert_eq!(
            SortSettings::new(&env).case_fold_function(),
            Ok("unaccent".to_string())
        );

        let env = HashMap::from([(EXO_SORT_CASE_FOLD_FUNCTION, "lower(x)")]);
        assert_eq!(
            SortSettings::new(&env).case_fold_function(),
            Err(EnvError::InvalidIdentifier {
                key: EXO_SORT_CASE_FOLD_FUNCTION.to_string(),
                value: "lower(x)".to_string(),
            })
        );
    }
}
