//! Ordered `key=value` pair assembly and URL component encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a URL component. Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
/// literal and percent-encodes everything else, space included (`%20`).
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a query value or path segment.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Appends `?query` to `path` when the query string is non-empty.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Collects pairs in emission order and serializes them once.
#[derive(Default)]
pub(crate) struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub(crate) fn push(&mut self, key: &'static str, value: impl ToString) {
        self.pairs.push((key, value.to_string()));
    }

    pub(crate) fn push_opt<V: ToString>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub(crate) fn finish(self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_encoding_matches_uri_component_rules() {
        assert_eq!(
            encode_component("CODE like 'test*'"),
            "CODE%20like%20'test*'"
        );
        assert_eq!(encode_component("a,b&c=d"), "a%2Cb%26c%3Dd");
        assert_eq!(encode_component("(x)!~_.-"), "(x)!~_.-");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn with_query_skips_empty() {
        assert_eq!(with_query("/customers", ""), "/customers");
        assert_eq!(with_query("/customers", "limit=1"), "/customers?limit=1");
    }

    #[test]
    fn pairs_keep_push_order() {
        let mut pairs = QueryPairs::default();
        pairs.push("b", 2);
        pairs.push_opt::<u8>("skip", None);
        pairs.push("a", "x y");
        assert_eq!(pairs.finish(), "b=2&a=x%20y");
    }
}
