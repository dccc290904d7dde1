// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Apply a sort requested through a serializable parameter (typically an HTTP query parameter)
//! to a [sort_sql::Select].
//!
//! A [SortParameter] pairs a list of association names with an encoded sort string of the form
//! `field[.asc|.desc][.ci]`. It is first decoded into a [SortDirective] and then applied by a
//! [SortTransformer]: one inner join per association (each from the table reached by the
//! previous one) followed by a single order-by element on the named field, wrapped in a
//! case-folding function when `.ci` is present.
//!
//! Decoding is permissive: an absent or empty sort string leaves the query untouched, and a
//! missing or unrecognized direction suppresses ordering while still performing the joins.
//! Name-resolution failures come from [sort_sql] and are returned as is.
//!
//! [SortConfig] bundles the transform with its settings and lets callers substitute their own
//! transform function.

mod config;
mod directive;
mod env;
mod sort_parameter;
mod transformer;

pub use config::{EXO_SORT_CASE_FOLD_FUNCTION, EXO_SORT_ENABLED, SortConfig, SortFn};
pub use directive::SortDirective;
pub use env::{EnvError, Environment};
pub use sort_parameter::SortParameter;
pub use transformer::{ParamSort, SortTransformer};
