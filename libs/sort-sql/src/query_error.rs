// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

/// Failures while composing a [crate::Select]. Names are not validated until they are looked up
/// against the [crate::Database] or rendered into SQL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Table '{table}' has no relation named '{relation}'")]
    UnknownRelation { table: String, relation: String },

    #[error("Table '{table}' has no column named '{column}'")]
    UnknownColumn { table: String, column: String },

    #[error("Cannot apply '{function}' to non-text column '{table}.{column}' of type {typ}")]
    CaseFoldOnNonText {
        function: String,
        table: String,
        column: String,
        typ: String,
    },

    #[error("'{0}' is not a valid function name")]
    InvalidFunctionName(String),

    #[error("Binding {0} does not refer to a table in the query")]
    InvalidBinding(usize),
}
