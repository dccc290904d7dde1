// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::SQLBuilder;
use crate::Database;

/// A trait for types that can build themselves into an SQL expression.
///
/// Each constituent of a query (column reference, function, join, order-by, select) implements
/// this trait, which is then used to hierarchically build the SQL string. The [Database] is
/// needed to turn column and table ids back into names.
pub trait ExpressionBuilder {
    /// Build the SQL expression into the given SQL builder
    fn build(&self, database: &Database, builder: &mut SQLBuilder);

    /// Build the SQL expression into a string. Mostly useful for testing/debugging, where we
    /// want to assert on the generated SQL without managing an [SQLBuilder].
    fn to_sql(&self, database: &Database) -> String
    where
        Self: Sized,
    {
        let mut builder = SQLBuilder::new();
        self.build(database, &mut builder);
        builder.into_sql()
    }
}

impl<T> ExpressionBuilder for &T
where
    T: ExpressionBuilder,
{
    fn build(&self, database: &Database, builder: &mut SQLBuilder) {
        (**self).build(database, builder)
    }
}
