// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{Database, TableId};

/// A column in a physical table
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct PhysicalColumn {
    /// The name of the column
    pub name: String,
    /// The type of the column
    pub typ: PhysicalColumnType,
}

/// Only prints the name and type; the derived version is noisy in query dumps.
impl std::fmt::Debug for PhysicalColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Column: {} ({})", self.name, self.typ.type_string())
    }
}

impl PhysicalColumn {
    pub fn new(name: impl Into<String>, typ: PhysicalColumnType) -> Self {
        Self {
            name: name.into(),
            typ,
        }
    }
}

/// The type of a column in a physical table. Only as precise as the query model needs: the
/// distinction that matters while composing queries is whether a column holds text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalColumnType {
    Int,
    String,
    Boolean,
    Float,
    Timestamp,
}

impl PhysicalColumnType {
    pub fn is_text(&self) -> bool {
        matches!(self, PhysicalColumnType::String)
    }

    pub fn type_string(&self) -> &'static str {
        match self {
            PhysicalColumnType::Int => "INT",
            PhysicalColumnType::String => "TEXT",
            PhysicalColumnType::Boolean => "BOOLEAN",
            PhysicalColumnType::Float => "REAL",
            PhysicalColumnType::Timestamp => "TIMESTAMP",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ColumnId {
    pub table_id: TableId,
    pub column_index: usize,
}

impl ColumnId {
    pub fn get_column<'a>(&self, database: &'a Database) -> &'a PhysicalColumn {
        database.get_column(*self)
    }
}
