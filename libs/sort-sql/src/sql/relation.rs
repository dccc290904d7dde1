// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use super::physical_column::ColumnId;
use crate::TableId;

/// A named link from one table to another. The link is directional: it is declared on the table
/// owning `self_column_id` and joining through it brings in the table owning `foreign_column_id`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Relation {
    pub name: String,
    pub self_column_id: ColumnId,
    pub foreign_column_id: ColumnId,
}

impl Relation {
    pub fn foreign_table_id(&self) -> TableId {
        self.foreign_column_id.table_id
    }
}
