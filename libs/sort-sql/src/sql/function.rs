// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;

use super::{ExpressionBuilder, SQLBuilder, column::ColumnRef};
use crate::{Database, QueryError};

pub const LOWER_FUNCTION: &str = "lower";

// Function names are rendered unquoted, so only plain identifiers are allowed
static FUNCTION_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// A function applied to a column such as `lower("parents"."field_1")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub function_name: String,
    pub column: ColumnRef,
}

impl Function {
    pub fn is_valid_name(function_name: &str) -> bool {
        FUNCTION_NAME_REGEX.is_match(function_name)
    }

    /// Wrap a text column in a case-folding function (such as `lower`). Case folding is only
    /// defined for text, so any other column type is rejected, as is a function name that is not
    /// a plain identifier.
    pub fn case_fold(
        function_name: impl Into<String>,
        column: ColumnRef,
        database: &Database,
    ) -> Result<Self, QueryError> {
        let function_name = function_name.into();
        if !Self::is_valid_name(&function_name) {
            return Err(QueryError::InvalidFunctionName(function_name));
        }

        let physical_column = column.column_id.get_column(database);

        if !physical_column.typ.is_text() {
            return Err(QueryError::CaseFoldOnNonText {
                function: function_name,
                table: database.get_table(column.column_id.table_id).name.clone(),
                column: physical_column.name.clone(),
                typ: physical_column.typ.type_string().to_string(),
            });
        }

        Ok(Self {
            function_name,
            column,
        })
    }

    pub fn lower(column: ColumnRef, database: &Database) -> Result<Self, QueryError> {
        Self::case_fold(LOWER_FUNCTION, column, database)
    }
}

impl ExpressionBuilder for Function {
    fn build(&self, database: &Database, builder: &mut SQLBuilder) {
        builder.push_str(&self.function_name);
        builder.push('(');
        self.column.build(database, builder);
        builder.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestSetup;

    #[test]
    fn lower_text_column() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_field_1_column,
                 ..
             }| {
                let lower =
                    Function::lower(ColumnRef::new(parents_field_1_column, None), &database)
                        .unwrap();

                assert_eq!(lower.to_sql(&database), r#"lower("parents"."field_1")"#);
            },
        )
    }

    #[test]
    fn lower_aliased_column() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_field_1_column,
                 ..
             }| {
                let column = ColumnRef::new(parents_field_1_column, Some("parents$2".to_string()));
                let lower = Function::case_fold("upper", column, &database).unwrap();

                assert_eq!(lower.to_sql(&database), r#"upper("parents$2"."field_1")"#);
            },
        )
    }

    #[test]
    fn lower_non_text_column() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_field_2_column,
                 ..
             }| {
                let err = Function::lower(ColumnRef::new(parents_field_2_column, None), &database)
                    .unwrap_err();

                assert_eq!(
                    err,
                    QueryError::CaseFoldOnNonText {
                        function: "lower".to_string(),
                        table: "parents".to_string(),
                        column: "field_2".to_string(),
                        typ: "INT".to_string(),
                    }
                );
            },
        )
    }

    #[test]
    fn non_identifier_function_name() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_field_1_column,
                 ..
             }| {
                for name in ["x\"; DROP TABLE parents; --", "lower(x)", "", "1lower", "un accent"] {
                    assert_eq!(
                        Function::case_fold(name, ColumnRef::new(parents_field_1_column, None), &database),
                        Err(QueryError::InvalidFunctionName(name.to_string())),
                        "name '{name}'"
                    );
                }

                assert!(Function::is_valid_name("_unaccent2"));
            },
        )
    }
}
