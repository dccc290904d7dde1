// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{ExpressionBuilder, SQLBuilder, physical_column::ColumnId};
use crate::Database;

/// A physical column as seen from a particular table occurrence in a query. The same column may
/// appear several times in one query (for example `parents.field_1` of the root table and of a
/// joined `parents`), so the alias of the occurrence is carried along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub column_id: ColumnId,
    /// `None` for the root table, which is referred to by its name
    pub table_alias: Option<String>,
}

impl ColumnRef {
    pub fn new(column_id: ColumnId, table_alias: Option<String>) -> Self {
        Self {
            column_id,
            table_alias,
        }
    }
}

impl ExpressionBuilder for ColumnRef {
    fn build(&self, database: &Database, builder: &mut SQLBuilder) {
        let column = self.column_id.get_column(database);
        match &self.table_alias {
            Some(table_alias) => builder.push_column(table_alias, &column.name),
            None => builder.push_column(
                &database.get_table(self.column_id.table_id).name,
                &column.name,
            ),
        }
    }
}
