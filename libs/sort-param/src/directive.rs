// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use sort_sql::Ordering;

use crate::SortParameter;

const CASE_INSENSITIVE_MARKER: &str = "ci";
const ASC_MARKER: &str = "asc";
const DESC_MARKER: &str = "desc";

/// A decoded sort request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    /// Relation names forming the join path from the root table. Hop `n` is joined from the
    /// table reached by hop `n - 1`.
    pub associations: Vec<String>,
    /// The column to order by on the last table of the join path. Never empty.
    pub field: String,
    /// `None` if the encoded string had no recognized direction, in which case no ordering is
    /// applied (the joins still are).
    pub direction: Option<Ordering>,
    pub case_insensitive: bool,
}

/// A recognized trailing `.<token>` segment of an encoded sort string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suffix {
    CaseInsensitive,
    Direction(Ordering),
}

impl Suffix {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            CASE_INSENSITIVE_MARKER => Some(Suffix::CaseInsensitive),
            ASC_MARKER => Some(Suffix::Direction(Ordering::Asc)),
            DESC_MARKER => Some(Suffix::Direction(Ordering::Desc)),
            _ => None,
        }
    }
}

/// Split `<rest>.<token>` when `token` is a recognized suffix. Only the `.`-delimited form
/// counts, so a field named `topci` keeps its name.
fn pop_suffix(encoded: &str) -> Option<(&str, Suffix)> {
    let (rest, token) = encoded.rsplit_once('.')?;
    Suffix::from_token(token).map(|suffix| (rest, suffix))
}

impl SortDirective {
    /// Decode an optional sort parameter. Returns `None` when there is nothing to sort by: the
    /// parameter is absent or its sort string is empty.
    pub fn decode(raw: Option<&SortParameter>) -> Option<Self> {
        let raw = raw?;
        Self::parse(raw.associations.clone(), &raw.sort)
    }

    /// Parse `field[.asc|.desc][.ci]`.
    ///
    /// The `.ci` marker is only recognized as the very last segment and the direction only right
    /// before it (or as the last segment without `.ci`). Anything else is part of the field name
    /// and leaves the directive without a direction.
    pub fn parse(associations: Vec<String>, encoded: &str) -> Option<Self> {
        let encoded = encoded.trim();

        let (remainder, case_insensitive) = match pop_suffix(encoded) {
            Some((rest, Suffix::CaseInsensitive)) => (rest, true),
            _ => (encoded, false),
        };

        let (field, direction) = match pop_suffix(remainder) {
            // A bare ".asc" has no field to apply the direction to
            Some((field, Suffix::Direction(ordering))) if !field.is_empty() => {
                (field, Some(ordering))
            }
            _ => (remainder, None),
        };

        if field.is_empty() {
            return None;
        }

        Some(Self {
            associations,
            field: field.to_string(),
            direction,
            case_insensitive,
        })
    }
}

/// Re-encodes the sort string, prefixed by the join path if any: `parent.parent:field_1.asc.ci`.
impl Display for SortDirective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.associations.is_empty() {
            write!(f, "{}:", self.associations.join("."))?;
        }
        f.write_str(&self.field)?;
        match self.direction {
            Some(Ordering::Asc) => write!(f, ".{ASC_MARKER}")?,
            Some(Ordering::Desc) => write!(f, ".{DESC_MARKER}")?,
            None => {}
        }
        if self.case_insensitive {
            write!(f, ".{CASE_INSENSITIVE_MARKER}")?;
        }
        Ok(())
    }
}
