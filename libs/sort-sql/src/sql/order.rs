// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use super::{ExpressionBuilder, SQLBuilder, column::ColumnRef, function::Function};
use crate::Database;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    Asc,
    Desc,
}

impl Ordering {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Ordering::Asc => "ASC",
            Ordering::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderByExpr {
    Column(ColumnRef),
    Function(Function),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByElement(pub OrderByExpr, pub Ordering);

/// The order-by clause. Elements take precedence in the order they appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderBy(pub Vec<OrderByElement>);

impl OrderBy {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ExpressionBuilder for OrderByExpr {
    fn build(&self, database: &Database, builder: &mut SQLBuilder) {
        match self {
            OrderByExpr::Column(column) => column.build(database, builder),
            OrderByExpr::Function(function) => function.build(database, builder),
        }
    }
}

impl ExpressionBuilder for OrderByElement {
    fn build(&self, database: &Database, builder: &mut SQLBuilder) {
        self.0.build(database, builder);
        builder.push_space();
        builder.push_str(self.1.as_sql());
    }
}

impl ExpressionBuilder for OrderBy {
    fn build(&self, database: &Database, builder: &mut SQLBuilder) {
        builder.push_str("ORDER BY ");
        builder.push_elems(database, &self.0, ", ");
    }
}
