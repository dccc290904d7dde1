// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use sort_sql::{Binding, Database, Function, LOWER_FUNCTION, OrderByExpr, QueryError, Select};
use tracing::{debug, instrument};

use crate::{SortDirective, SortParameter};

/// Apply a sort parameter to a query
pub trait SortTransformer {
    fn transform(
        &self,
        query: Select,
        param: Option<&SortParameter>,
        database: &Database,
    ) -> Result<Select, QueryError>;
}

/// The standard transform: join along the directive's associations, then order by its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSort {
    /// Function used to order case-insensitively
    case_fold_function: String,
}

impl Default for ParamSort {
    fn default() -> Self {
        Self::new(LOWER_FUNCTION)
    }
}

impl ParamSort {
    pub fn new(case_fold_function: impl Into<String>) -> Self {
        Self {
            case_fold_function: case_fold_function.into(),
        }
    }

    /// Apply an already decoded directive. With no directive, the query is returned as is.
    ///
    /// For a directive such as `["parent", "parent"]` with `field_1.asc.ci`, this produces:
    ///
    /// ```sql
    /// SELECT "parents".* FROM "parents"
    ///   INNER JOIN "parents" AS "parents$1" ON "parents"."parent_id" = "parents$1"."id"
    ///   INNER JOIN "parents" AS "parents$2" ON "parents$1"."parent_id" = "parents$2"."id"
    ///   ORDER BY lower("parents$2"."field_1") ASC
    /// ```
    #[instrument(name = "ParamSort::apply", skip(self, query, database))]
    pub fn apply(
        &self,
        query: Select,
        directive: Option<&SortDirective>,
        database: &Database,
    ) -> Result<Select, QueryError> {
        let Some(directive) = directive else {
            return Ok(query);
        };

        let (query, binding) = directive.associations.iter().try_fold(
            (query, Binding::ROOT),
            |(query, from), association| {
                debug!(
                    association = association.as_str(),
                    from = from.index(),
                    "Joining association"
                );
                query.join(from, association, database)
            },
        )?;

        let Some(ordering) = directive.direction else {
            debug!(%directive, "No recognized sort direction, skipping order by");
            return Ok(query);
        };

        let column = query.field(binding, &directive.field, database)?;
        let expr = if directive.case_insensitive {
            OrderByExpr::Function(Function::case_fold(
                &self.case_fold_function,
                column,
                database,
            )?)
        } else {
            OrderByExpr::Column(column)
        };

        Ok(query.order_by(expr, ordering))
    }
}

impl SortTransformer for ParamSort {
    fn transform(
        &self,
        query: Select,
        param: Option<&SortParameter>,
        database: &Database,
    ) -> Result<Select, QueryError> {
        self.apply(query, SortDirective::decode(param).as_ref(), database)
    }
}
