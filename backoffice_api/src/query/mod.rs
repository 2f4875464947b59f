//! Query-string construction: the [`Query`] trait, [`QueryOptions`] and [`Sort`].

mod encode;
pub use self::encode::{encode_component, with_query, COMPONENT};

mod options;
pub use self::options::{build, QueryOptions};

mod sort;
pub use self::sort::{Sort, SortDirection, SortKey};

/// Anything that serializes into a request query string.
pub trait Query {
    /// The query string without a leading `?`; empty when nothing is set.
    fn to_query_string(&self) -> String;

    /// `path?query`, or `path` unchanged when the query string is empty.
    fn append_to_path(&self, path: &str) -> String {
        with_query(path, &self.to_query_string())
    }
}
