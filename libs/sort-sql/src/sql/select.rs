// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    ExpressionBuilder, SQLBuilder,
    column::ColumnRef,
    join::InnerJoin,
    order::{OrderBy, OrderByElement, OrderByExpr, Ordering},
};
use crate::{Database, QueryError, TableId};

/// A handle to one table occurrence in a [Select]: the root table or one of the joined tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding(usize);

impl Binding {
    pub const ROOT: Binding = Binding(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A select query of the form
///
/// ```sql
/// SELECT "root".* FROM "root" INNER JOIN ... ORDER BY ...
/// ```
///
/// The query is immutable: composition methods consume it and return a new query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    /// The root table to select from
    table_id: TableId,
    /// Joined tables, in the order they were added. The join at index `i` is bound to
    /// `Binding(i + 1)`.
    joins: Vec<InnerJoin>,
    /// The order by clause
    order_by: OrderBy,
}

impl Select {
    pub fn new(table_id: TableId) -> Self {
        Self {
            table_id,
            joins: vec![],
            order_by: OrderBy::default(),
        }
    }

    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    pub fn joins(&self) -> &[InnerJoin] {
        &self.joins
    }

    pub fn order_by_elements(&self) -> &[OrderByElement] {
        &self.order_by.0
    }

    /// The binding of the most recently joined table (the root table if nothing was joined)
    pub fn last_binding(&self) -> Binding {
        Binding(self.joins.len())
    }

    /// The table behind a binding along with the alias used to refer to it.
    fn bound_table(&self, binding: Binding) -> Result<(TableId, Option<&str>), QueryError> {
        match binding.0 {
            0 => Ok((self.table_id, None)),
            index => self
                .joins
                .get(index - 1)
                .map(|join| (join.table_id, Some(join.alias.as_str())))
                .ok_or(QueryError::InvalidBinding(index)),
        }
    }

    /// Inner join the table reached by following `relation_name` from the table at `from`.
    /// Returns the extended query and the binding of the newly joined table.
    pub fn join(
        mut self,
        from: Binding,
        relation_name: &str,
        database: &Database,
    ) -> Result<(Self, Binding), QueryError> {
        let (from_table_id, from_alias) = self.bound_table(from)?;
        let from_alias = from_alias.map(str::to_string);

        let from_table = database.get_table(from_table_id);
        let relation =
            from_table
                .get_relation(relation_name)
                .ok_or_else(|| QueryError::UnknownRelation {
                    table: from_table.name.clone(),
                    relation: relation_name.to_string(),
                })?;

        let binding = Binding(self.joins.len() + 1);
        let table_id = relation.foreign_table_id();
        let alias = format!("{}${}", database.get_table(table_id).name, binding.0);

        self.joins.push(InnerJoin {
            relation_name: relation_name.to_string(),
            from,
            table_id,
            alias: alias.clone(),
            self_column: ColumnRef::new(relation.self_column_id, from_alias),
            foreign_column: ColumnRef::new(relation.foreign_column_id, Some(alias)),
        });

        Ok((self, binding))
    }

    /// Resolve a column of the table at `binding`.
    pub fn field(
        &self,
        binding: Binding,
        column_name: &str,
        database: &Database,
    ) -> Result<ColumnRef, QueryError> {
        let (table_id, alias) = self.bound_table(binding)?;

        database
            .get_column_id(table_id, column_name)
            .map(|column_id| ColumnRef::new(column_id, alias.map(str::to_string)))
            .ok_or_else(|| QueryError::UnknownColumn {
                table: database.get_table(table_id).name.clone(),
                column: column_name.to_string(),
            })
    }

    /// Append an order-by element. Existing elements keep their precedence.
    pub fn order_by(mut self, expr: OrderByExpr, ordering: Ordering) -> Self {
        self.order_by.0.push(OrderByElement(expr, ordering));
        self
    }
}

impl ExpressionBuilder for Select {
    fn build(&self, database: &Database, builder: &mut SQLBuilder) {
        let table = database.get_table(self.table_id);

        builder.push_str("SELECT ");
        builder.push_identifier(&table.name);
        builder.push_str(".* FROM ");
        table.build(database, builder);

        for join in &self.joins {
            builder.push_space();
            join.build(database, builder);
        }

        // Avoid a dangling "ORDER BY "
        if !self.order_by.is_empty() {
            builder.push_space();
            self.order_by.build(database, builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, test_support::TestSetup};

    #[test]
    fn plain() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_table,
                 ..
             }| {
                let select = Select::new(parents_table);

                assert_eq!(select.last_binding(), Binding::ROOT);
                assert_eq!(select.to_sql(&database), r#"SELECT "parents".* FROM "parents""#);
            },
        )
    }

    #[test]
    fn self_join_chain() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_table,
                 ..
             }| {
                let select = Select::new(parents_table);
                let (select, first) = select.join(Binding::ROOT, "parent", &database).unwrap();
                let (select, second) = select.join(first, "parent", &database).unwrap();

                assert_eq!(first.index(), 1);
                assert_eq!(second, select.last_binding());

                let field = select.field(second, "field_1", &database).unwrap();
                let select = select.order_by(OrderByExpr::Column(field), Ordering::Asc);

                assert_eq!(
                    select.to_sql(&database),
                    r#"SELECT "parents".* FROM "parents" INNER JOIN "parents" AS "parents$1" ON "parents"."parent_id" = "parents$1"."id" INNER JOIN "parents" AS "parents$2" ON "parents$1"."parent_id" = "parents$2"."id" ORDER BY "parents$2"."field_1" ASC"#
                );
            },
        )
    }

    #[test]
    fn one_to_many_then_many_to_one() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_table,
                 ..
             }| {
                let (select, children) = Select::new(parents_table)
                    .join(Binding::ROOT, "children", &database)
                    .unwrap();
                let (select, parent) = select.join(children, "parent", &database).unwrap();

                let name = select.field(children, "name", &database).unwrap();
                let select = select.order_by(
                    OrderByExpr::Function(Function::lower(name, &database).unwrap()),
                    Ordering::Desc,
                );

                assert_eq!(select.joins()[1].from, children);
                assert_eq!(parent.index(), 2);
                assert_eq!(
                    select.to_sql(&database),
                    r#"SELECT "parents".* FROM "parents" INNER JOIN "children" AS "children$1" ON "parents"."id" = "children$1"."parent_id" INNER JOIN "parents" AS "parents$2" ON "children$1"."parent_id" = "parents$2"."id" ORDER BY lower("children$1"."name") DESC"#
                );
            },
        )
    }

    #[test]
    fn order_by_appends() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_table,
                 ..
             }| {
                let select = Select::new(parents_table);
                let field_1 = select.field(Binding::ROOT, "field_1", &database).unwrap();
                let field_2 = select.field(Binding::ROOT, "field_2", &database).unwrap();

                let select = select
                    .order_by(OrderByExpr::Column(field_2), Ordering::Desc)
                    .order_by(OrderByExpr::Column(field_1), Ordering::Asc);

                assert_eq!(select.order_by_elements().len(), 2);
                assert_eq!(
                    select.to_sql(&database),
                    r#"SELECT "parents".* FROM "parents" ORDER BY "parents"."field_2" DESC, "parents"."field_1" ASC"#
                );
            },
        )
    }

    #[test]
    fn unknown_names() {
        TestSetup::with_setup(
            |TestSetup {
                 database,
                 parents_table,
                 ..
             }| {
                let select = Select::new(parents_table);

                assert_eq!(
                    select.field(Binding::ROOT, "missing", &database),
                    Err(QueryError::UnknownColumn {
                        table: "parents".to_string(),
                        column: "missing".to_string(),
                    })
                );
                assert_eq!(
                    select.field(Binding(3), "field_1", &database),
                    Err(QueryError::InvalidBinding(3))
                );
                assert_eq!(
                    select.join(Binding::ROOT, "grandparent", &database),
                    Err(QueryError::UnknownRelation {
                        table: "parents".to_string(),
                        relation: "grandparent".to_string(),
                    })
                );
            },
        )
    }
}
