// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};
use typed_generational_arena::{Arena, IgnoreGeneration, Index};

use super::{
    physical_column::{ColumnId, PhysicalColumn},
    physical_table::PhysicalTable,
    relation::Relation,
};

pub type SerializableSlab<T> = Arena<T, usize, IgnoreGeneration>;
pub type TableId = Index<PhysicalTable, usize, IgnoreGeneration>;

/// The schema against which queries are composed: tables, their columns, and the named relations
/// between them.
#[derive(Serialize, Deserialize)]
pub struct Database {
    tables: SerializableSlab<PhysicalTable>,
}

impl Database {
    pub fn get_table(&self, id: TableId) -> &PhysicalTable {
        &self.tables[id]
    }

    pub fn insert_table(&mut self, table: PhysicalTable) -> TableId {
        self.tables.insert(table)
    }

    pub fn get_table_id(&self, table_name: &str) -> Option<TableId> {
        self.tables
            .iter()
            .find_map(|(id, table)| (table.name == table_name).then_some(id))
    }

    pub fn get_column_id(&self, table_id: TableId, column_name: &str) -> Option<ColumnId> {
        self.tables[table_id]
            .column_index(column_name)
            .map(|column_index| ColumnId {
                table_id,
                column_index,
            })
    }

    pub fn get_column(&self, column_id: ColumnId) -> &PhysicalColumn {
        &self.tables[column_id.table_id].columns[column_id.column_index]
    }

    /// Declare a relation named `name` on the table owning `self_column_id`. Joining through it
    /// matches `self_column_id` against `foreign_column_id` (whose table becomes the joined one).
    ///
    /// Both directions are expressed the same way: a many-to-one such as `parents.parent ->
    /// parents.id` uses the foreign key as `self_column_id`, while a one-to-many such as
    /// `parents.children` uses the primary key as `self_column_id` and the foreign key in the
    /// other table as `foreign_column_id`.
    pub fn add_relation(
        &mut self,
        name: impl Into<String>,
        self_column_id: ColumnId,
        foreign_column_id: ColumnId,
    ) {
        self.tables[self_column_id.table_id]
            .relations
            .push(Relation {
                name: name.into(),
                self_column_id,
                foreign_column_id,
            });
    }

    pub fn get_relation(&self, table_id: TableId, name: &str) -> Option<&Relation> {
        self.tables[table_id].get_relation(name)
    }
}

impl Default for Database {
    fn default() -> Self {
        Database {
            tables: SerializableSlab::new(),
        }
    }
}

impl Debug for Database {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (id, table) in self.tables.iter() {
            writeln!(f, "{}: {}", id.arr_idx(), table.name)?;
            writeln!(f, "  columns: ")?;
            for (column_index, column) in table.columns.iter().enumerate() {
                writeln!(f, "    {}: {:?}", column_index, column)?;
            }
            writeln!(f, "  relations: ")?;
            for relation in table.relations.iter() {
                writeln!(
                    f,
                    "    {}: {} -> {}",
                    relation.name,
                    self.get_column(relation.self_column_id).name,
                    self.get_table(relation.foreign_table_id()).name
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestSetup;

    #[test]
    fn lookup_by_name() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_table,
                 children_table,
                 parents_parent_id_column,
                 ..
             }| {
                assert_eq!(database.get_table_id("parents"), Some(parents_table));
                assert_eq!(database.get_table_id("children"), Some(children_table));
                assert_eq!(database.get_table_id("grandparents"), None);

                assert_eq!(
                    database.get_column_id(parents_table, "parent_id"),
                    Some(parents_parent_id_column)
                );
                assert_eq!(database.get_column_id(parents_table, "missing"), None);
            },
        )
    }

    #[test]
    fn relations_are_declared_on_the_owning_table() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_table,
                 children_table,
                 ..
             }| {
                let parent = database.get_relation(parents_table, "parent").unwrap();
                assert_eq!(parent.foreign_table_id(), parents_table);

                let children = database.get_relation(parents_table, "children").unwrap();
                assert_eq!(children.foreign_table_id(), children_table);

                assert!(database.get_relation(children_table, "children").is_none());
                assert!(database.get_relation(children_table, "parent").is_some());
            },
        )
    }
}
