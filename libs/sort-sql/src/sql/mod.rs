// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod expression_builder;
mod sql_builder;

pub(crate) mod column;
pub(crate) mod database;
pub(crate) mod function;
pub(crate) mod join;
pub(crate) mod order;
pub(crate) mod physical_column;
pub(crate) mod physical_table;
pub(crate) mod relation;
pub(crate) mod select;

pub use expression_builder::ExpressionBuilder;
pub use sql_builder::SQLBuilder;
