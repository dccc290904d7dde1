// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! A small, immutable query model to be composed by higher-level components (such as the
//! sort-parameter transformer) without ever touching a database connection.
//!
//! The central type is [Select]. A [Select] starts from a root table and may be extended with
//! inner joins that follow named [Relation]s declared in the [Database], and with order-by
//! elements that refer to columns of any table reachable through those joins. Each composition
//! operation consumes the query and returns a new one, so a query handed to a function can never
//! be observed half-modified by its caller.
//!
//! Tables in a join chain are addressed through [Binding]s: [Binding::ROOT] is the root table
//! and every join produces the next binding. Name resolution (relations and columns) happens
//! while composing, and failures are reported as [QueryError]s.
//!
//! The model can be rendered to SQL through [ExpressionBuilder], which is how an executor (or a
//! test) observes the shape of a query.

mod sql;

pub mod query_error;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use query_error::QueryError;

pub use sql::{
    ExpressionBuilder, SQLBuilder,
    column::ColumnRef,
    database::{Database, TableId},
    function::{Function, LOWER_FUNCTION},
    join::InnerJoin,
    order::{OrderBy, OrderByElement, OrderByExpr, Ordering},
    physical_column::{ColumnId, PhysicalColumn, PhysicalColumnType},
    physical_table::PhysicalTable,
    relation::Relation,
    select::{Binding, Select},
};
