// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The raw sort request as supplied by a caller, such as
/// `{"associations": ["parent"], "sort": "field_1.desc.ci"}`. Missing keys default to empty, so
/// `{}` is a valid (no-op) parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SortParameter {
    /// Relation names to follow from the root table, outermost first
    #[serde(default)]
    pub associations: Vec<String>,
    /// `field[.asc|.desc][.ci]`
    #[serde(default)]
    pub sort: String,
}

impl SortParameter {
    pub fn new<S: Into<String>>(
        associations: impl IntoIterator<Item = S>,
        sort: impl Into<String>,
    ) -> Self {
        Self {
            associations: associations.into_iter().map(Into::into).collect(),
            sort: sort.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_missing_keys() {
        let empty: SortParameter = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SortParameter::default());

        let sort_only: SortParameter = serde_json::from_str(r#"{"sort": "field_1.asc"}"#).unwrap();
        assert_eq!(sort_only, SortParameter::new(Vec::<String>::new(), "field_1.asc"));
    }

    #[test]
    fn deserialize_full() {
        let parameter: SortParameter = serde_json::from_str(
            r#"{"associations": ["parent", "parent"], "sort": "field_1.asc.ci"}"#,
        )
        .unwrap();

        assert_eq!(
            parameter,
            SortParameter::new(["parent", "parent"], "field_1.asc.ci")
        );
    }
}
