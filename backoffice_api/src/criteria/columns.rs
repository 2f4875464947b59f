//! Logical field name → backend column name resolution.

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Resolves a camelCase logical field name to the backend column name that
/// appears on the left-hand side of a filter clause.
pub trait ColumnMapping {
    /// Returns `None` when the field is not known to this mapping.
    fn column<'a>(&'a self, logical: &'a str) -> Option<Cow<'a, str>>;
}

/// A fixed logical → column table, one per entity.
#[derive(Clone, Copy, Debug)]
pub struct FieldMap {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldMap {
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// Looks up the column for a logical field name.
    pub fn get(&self, logical: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(name, _)| *name == logical)
            .map(|(_, column)| *column)
    }

    /// Logical field names in declaration order.
    pub fn logical_names(&self) -> impl Iterator<Item = &'static str> {
        self.pairs.iter().map(|(name, _)| *name)
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> {
        self.pairs.iter().map(|(_, column)| *column)
    }
}

impl ColumnMapping for FieldMap {
    fn column<'a>(&'a self, logical: &'a str) -> Option<Cow<'a, str>> {
        self.get(logical).map(Cow::Borrowed)
    }
}

impl<S: BuildHasher> ColumnMapping for HashMap<String, String, S> {
    fn column<'a>(&'a self, logical: &'a str) -> Option<Cow<'a, str>> {
        self.get(logical).map(|c| Cow::Borrowed(c.as_str()))
    }
}

/// Derives the column from the logical name (`arpCode` → `ARP_CODE`).
/// Accepts every field; useful for entities without a generated table.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpperSnakeCase;

impl ColumnMapping for UpperSnakeCase {
    fn column<'a>(&'a self, logical: &'a str) -> Option<Cow<'a, str>> {
        Some(Cow::Owned(to_upper_snake_case(logical)))
    }
}

/// `internalReference` → `INTERNAL_REFERENCE`, `httpURLValue` → `HTTP_URL_VALUE`.
pub fn to_upper_snake_case(logical: &str) -> String {
    let chars: Vec<char> = logical.chars().collect();
    let mut out = String::with_capacity(logical.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }
    out
}
