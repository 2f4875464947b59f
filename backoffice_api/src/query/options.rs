//! [`QueryOptions`]: pagination, projection, sort, filter, count and expansion.

use serde::Deserialize;

use super::encode::QueryPairs;
use super::{Query, Sort};

/// Options serialized into a request's query string. Entity-agnostic.
///
/// When deserialized, unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    /// Maximum number of rows to return.
    pub limit: Option<u64>,
    /// Row offset for pagination.
    pub offset: Option<u64>,
    /// Columns to project. `None` returns all columns.
    pub fields: Option<Vec<String>>,
    pub sort: Option<Sort>,
    /// Raw filter expression, usually produced by [`crate::translate`].
    pub q: Option<String>,
    /// Ask the backend for an authoritative `totalCount`.
    pub count: Option<bool>,
    /// Relation expansion depth, e.g. `full`.
    pub expand_level: Option<String>,
}

impl QueryOptions {
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_fields<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        self.fields = Some(fields.iter().map(|f| f.as_ref().to_string()).collect());
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_q(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    /// Sets `q` from a translated filter; `None` clears it.
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.q = filter;
        self
    }

    pub fn with_count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_expand_level(mut self, expand_level: &str) -> Self {
        self.expand_level = Some(expand_level.to_string());
        self
    }
}

impl Query for QueryOptions {
    /// Pairs are emitted in the fixed order `limit, offset, fields, sort, q,
    /// count, expandLevel`. Empty `fields` and `sort` lists are skipped.
    fn to_query_string(&self) -> String {
        let mut pairs = QueryPairs::default();
        pairs.push_opt("limit", self.limit);
        pairs.push_opt("offset", self.offset);
        if let Some(fields) = self.fields.as_ref().filter(|f| !f.is_empty()) {
            pairs.push("fields", fields.join(","));
        }
        if let Some(sort) = self.sort.as_ref().filter(|s| !s.is_empty()) {
            pairs.push("sort", sort);
        }
        pairs.push_opt("q", self.q.as_deref());
        pairs.push_opt("count", self.count);
        pairs.push_opt("expandLevel", self.expand_level.as_deref());
        pairs.finish()
    }
}

/// Serializes `options` into a query string without the leading `?`.
pub fn build(options: &QueryOptions) -> String {
    let query = options.to_query_string();
    tracing::trace!(query = %query, "built query string");
    query
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::query::SortDirection;

    #[test]
    fn empty_options_build_empty_string() {
        assert_eq!(build(&QueryOptions::default()), "");
    }

    #[test]
    fn pagination_and_sort() {
        let options = QueryOptions::default()
            .with_limit(10)
            .with_offset(0)
            .with_sort(Sort::by("ACTIVE"));
        insta::assert_snapshot!(build(&options), @"limit=10&offset=0&sort=ACTIVE");
        assert_eq!(build(&options), build(&options));
    }

    #[test]
    fn emission_order_is_fixed() {
        let options = QueryOptions::default()
            .with_expand_level("full")
            .with_count(true)
            .with_q("CODE eq 'A'")
            .with_sort(Sort::fields(["TITLE", "CODE"], SortDirection::Desc))
            .with_fields(&["ID", "CODE"])
            .with_offset(20)
            .with_limit(5);
        assert_eq!(
            build(&options),
            "limit=5&offset=20&fields=ID%2CCODE&sort=TITLE%20desc%2CCODE%20desc\
             &q=CODE%20eq%20'A'&count=true&expandLevel=full"
        );
    }

    #[test]
    fn raw_filter_is_component_encoded() {
        let options = QueryOptions::default().with_q("CODE like 'test*'");
        assert_eq!(build(&options), "q=CODE%20like%20'test*'");
    }

    #[test]
    fn empty_lists_are_skipped() {
        let options = QueryOptions::default()
            .with_fields::<&str>(&[])
            .with_sort(Sort::default())
            .with_count(false);
        assert_eq!(build(&options), "count=false");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let options: QueryOptions = serde_json::from_value(json!({
            "limit": 10,
            "offset": 0,
            "sort": ["ACTIVE"],
            "cursor": "abc",
            "expandLevel": "full"
        }))
        .unwrap();
        assert_eq!(build(&options), "limit=10&offset=0&sort=ACTIVE&expandLevel=full");
    }

    #[test]
    fn shared_direction_sort_from_json() {
        let options: QueryOptions =
            serde_json::from_value(json!({ "sort": [["TITLE", "CODE"], "desc"] })).unwrap();
        assert_eq!(build(&options), "sort=TITLE%20desc%2CCODE%20desc");
    }
}
