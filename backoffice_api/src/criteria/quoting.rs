//! How literal operands are written into a filter expression.

use std::borrow::Cow;

use super::Literal;

/// Renders literal operands. Strings are wrapped in single quotes after
/// [`Quoting::escape`]; numbers and booleans are written as bare tokens.
pub trait Quoting {
    /// Escapes the body of a string literal.
    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str>;

    fn render(&self, literal: &Literal) -> String {
        match literal {
            Literal::String(s) => format!("'{}'", self.escape(s)),
            other => other.to_string(),
        }
    }
}

/// Writes string bodies untouched. The backend dialect owns any escaping.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verbatim;

impl Quoting for Verbatim {
    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(raw)
    }
}

/// Doubles embedded single quotes (`O'Hara` → `'O''Hara'`), the OData convention.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubledQuotes;

impl Quoting for DoubledQuotes {
    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if raw.contains('\'') {
            Cow::Owned(raw.replace('\'', "''"))
        } else {
            Cow::Borrowed(raw)
        }
    }
}
