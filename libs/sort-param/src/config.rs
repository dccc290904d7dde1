// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use sort_sql::{Database, LOWER_FUNCTION, QueryError, Select};
use tracing::debug;

use crate::{
    EnvError, Environment, ParamSort, SortParameter, SortTransformer, env::SortSettings,
};

pub const EXO_SORT_ENABLED: &str = "EXO_SORT_ENABLED";
pub const EXO_SORT_CASE_FOLD_FUNCTION: &str = "EXO_SORT_CASE_FOLD_FUNCTION";

/// A sort implementation that can stand in for [ParamSort]. It receives the config it was
/// installed in, so it can honor settings such as the case-folding function.
pub type SortFn = fn(
    Select,
    Option<&SortParameter>,
    &SortConfig,
    &Database,
) -> Result<Select, QueryError>;

fn param_sort(
    query: Select,
    param: Option<&SortParameter>,
    config: &SortConfig,
    database: &Database,
) -> Result<Select, QueryError> {
    ParamSort::new(&config.case_fold_function).transform(query, param, database)
}

/// The sort as configured for a deployment: whether sorting is honored at all, which function
/// folds case, and which implementation applies the parameter.
#[derive(Debug, Clone)]
pub struct SortConfig {
    pub enabled: bool,
    pub case_fold_function: String,
    transform: SortFn,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            case_fold_function: LOWER_FUNCTION.to_string(),
            transform: param_sort,
        }
    }
}

impl SortConfig {
    /// Read [EXO_SORT_ENABLED] and [EXO_SORT_CASE_FOLD_FUNCTION], defaulting whichever is unset.
    pub fn from_env(env: &dyn Environment) -> Result<Self, EnvError> {
        let settings = SortSettings::new(env);

        Ok(Self {
            enabled: settings.enabled()?,
            case_fold_function: settings.case_fold_function()?,
            ..Self::default()
        })
    }

    /// Replace the sort implementation
    pub fn with_transform(self, transform: SortFn) -> Self {
        Self { transform, ..self }
    }
}

impl SortTransformer for SortConfig {
    fn transform(
        &self,
        query: Select,
        param: Option<&SortParameter>,
        database: &Database,
    ) -> Result<Select, QueryError> {
        if !self.enabled {
            debug!("Sorting disabled, ignoring sort parameter");
            return Ok(query);
        }

        (self.transform)(query, param, self, database)
    }
}
