// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::ExpressionBuilder;
use crate::Database;

/// Accumulates the SQL text for an expression tree. The query model never carries literal
/// values, so unlike a full statement builder there is no parameter list to track.
#[derive(Default)]
pub struct SQLBuilder {
    sql: String,
}

impl SQLBuilder {
    pub fn new() -> Self {
        Self { sql: String::new() }
    }

    /// Push a string
    pub fn push_str<T: AsRef<str>>(&mut self, s: T) {
        self.sql.push_str(s.as_ref());
    }

    /// Push a character
    pub fn push(&mut self, c: char) {
        self.sql.push(c);
    }

    /// Push a string surrounded by double quotes. Useful for identifiers such as table names,
    /// aliases, and column names. Without the quotes, an identifier with uppercase letters would be
    /// interpreted the same as the one with lowercase letters.
    pub fn push_identifier<T: AsRef<str>>(&mut self, s: T) {
        self.sql.push('"');
        self.sql.push_str(s.as_ref());
        self.sql.push('"');
    }

    /// Push `"<table_or_alias>"."<column_name>"`.
    pub fn push_column<T: AsRef<str>, U: AsRef<str>>(&mut self, table_or_alias: T, column_name: U) {
        self.push_identifier(table_or_alias);
        self.push('.');
        self.push_identifier(column_name);
    }

    pub fn push_space(&mut self) {
        self.sql.push(' ');
    }

    /// Push elements of an iterator, separated by `sep`. The `push_elem` function provides
    /// the flexibility to map the elements (compared to [`SQLBuilder::push_elems`], which assumes
    /// that the elements implement [`ExpressionBuilder`]).
    pub fn push_iter<T>(
        &mut self,
        iter: impl ExactSizeIterator<Item = T>,
        sep: &str,
        push_elem: impl Fn(&mut Self, T),
    ) {
        let len = iter.len();
        for (i, item) in iter.enumerate() {
            push_elem(self, item);

            if i < len - 1 {
                self.sql.push_str(sep);
            }
        }
    }

    /// Push elements of a slice, separated by `sep`.
    pub fn push_elems<T: ExpressionBuilder>(&mut self, database: &Database, elems: &[T], sep: &str) {
        self.push_iter(elems.iter(), sep, |builder, elem| {
            elem.build(database, builder);
        });
    }

    /// Get the SQL string. This should be the final step in building an SQL expression, and thus
    /// consumes the builder.
    pub fn into_sql(self) -> String {
        self.sql
    }
}
