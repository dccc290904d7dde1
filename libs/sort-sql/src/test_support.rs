// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! A small schema shared by tests in this crate and by crates that compose queries on top of it.
//!
//! ```text
//! parents(id, field_1: TEXT, field_2: INT, parent_id)
//!   parent   -> parents   (parents.parent_id = parents.id)
//!   children -> children  (parents.id = children.parent_id)
//! children(id, name: TEXT, parent_id)
//!   parent   -> parents   (children.parent_id = parents.id)
//! ```

use crate::{ColumnId, Database, PhysicalColumn, PhysicalColumnType, PhysicalTable, TableId};

pub fn int_column(name: impl Into<String>) -> PhysicalColumn {
    PhysicalColumn::new(name, PhysicalColumnType::Int)
}

pub fn string_column(name: impl Into<String>) -> PhysicalColumn {
    PhysicalColumn::new(name, PhysicalColumnType::String)
}

pub struct TestSetup {
    pub database: Database,

    pub parents_table: TableId,
    pub children_table: TableId,

    pub parents_id_column: ColumnId,
    pub parents_field_1_column: ColumnId,
    pub parents_field_2_column: ColumnId,
    pub parents_parent_id_column: ColumnId,

    pub children_name_column: ColumnId,
    pub children_parent_id_column: ColumnId,
}

impl TestSetup {
    pub fn with_setup(test_fn: impl Fn(TestSetup)) {
        let mut database = Database::default();

        let parents_table = database.insert_table(PhysicalTable::new(
            "parents",
            vec![
                int_column("id"),
                string_column("field_1"),
                int_column("field_2"),
                int_column("parent_id"),
            ],
        ));
        let children_table = database.insert_table(PhysicalTable::new(
            "children",
            vec![
                int_column("id"),
                string_column("name"),
                int_column("parent_id"),
            ],
        ));

        let parents_id_column = database.get_column_id(parents_table, "id").unwrap();
        let parents_field_1_column = database.get_column_id(parents_table, "field_1").unwrap();
        let parents_field_2_column = database.get_column_id(parents_table, "field_2").unwrap();
        let parents_parent_id_column = database.get_column_id(parents_table, "parent_id").unwrap();

        let children_name_column = database.get_column_id(children_table, "name").unwrap();
        let children_parent_id_column = database
            .get_column_id(children_table, "parent_id")
            .unwrap();

        database.add_relation("parent", parents_parent_id_column, parents_id_column);
        database.add_relation("children", parents_id_column, children_parent_id_column);
        database.add_relation("parent", children_parent_id_column, parents_id_column);

        test_fn(TestSetup {
            database,
            parents_table,
            children_table,
            parents_id_column,
            parents_field_1_column,
            parents_field_2_column,
            parents_parent_id_column,
            children_name_column,
            children_parent_id_column,
        })
    }
}
