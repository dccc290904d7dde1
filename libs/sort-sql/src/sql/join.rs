// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{ExpressionBuilder, SQLBuilder, column::ColumnRef, select::Binding};
use crate::{Database, TableId};

/// An inner join that brings in one table through a named relation of an already present table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerJoin {
    /// The name of the relation followed, such as `parent`.
    pub relation_name: String,
    /// The table occurrence the relation was resolved against.
    pub from: Binding,
    /// The joined table such as `parents`.
    pub table_id: TableId,
    /// The alias of the joined table such as `parents$1`.
    pub alias: String,
    /// The join predicate `<self_column> = <foreign_column>`.
    pub self_column: ColumnRef,
    pub foreign_column: ColumnRef,
}

impl ExpressionBuilder for InnerJoin {
    /// Build expression of the form `INNER JOIN <table> AS <alias> ON <self_column> = <foreign_column>`.
    fn build(&self, database: &Database, builder: &mut SQLBuilder) {
        builder.push_str("INNER JOIN ");
        database.get_table(self.table_id).build(database, builder);
        builder.push_str(" AS ");
        builder.push_identifier(&self.alias);
        builder.push_str(" ON ");
        self.self_column.build(database, builder);
        builder.push_str(" = ");
        self.foreign_column.build(database, builder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestSetup;

    #[test]
    fn basic_join() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 children_table,
                 parents_id_column,
                 children_parent_id_column,
                 ..
             }| {
                let join = InnerJoin {
                    relation_name: "children".to_string(),
                    from: Binding::ROOT,
                    table_id: children_table,
                    alias: "children$1".to_string(),
                    self_column: ColumnRef::new(parents_id_column, None),
                    foreign_column: ColumnRef::new(
                        children_parent_id_column,
                        Some("children$1".to_string()),
                    ),
                };

                assert_eq!(
                    join.to_sql(&database),
                    r#"INNER JOIN "children" AS "children$1" ON "parents"."id" = "children$1"."parent_id""#
                );
            },
        )
    }
}
