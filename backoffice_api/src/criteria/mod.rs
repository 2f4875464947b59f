//! Search criteria and their translation into filter expressions.
//!
//! A [`SearchCriteria`] maps logical field names to [`FieldValue`]s. The
//! [`CriteriaTranslator`] resolves each name through a [`ColumnMapping`] and
//! renders one clause per field:
//!
//! | value                         | clause                               |
//! |-------------------------------|--------------------------------------|
//! | `"ABC"`                       | `CODE eq 'ABC'`                      |
//! | `["A", "B"]` / `{in: [..]}`   | `(TAGS eq 'A' or TAGS eq 'B')`       |
//! | `{like: "AB*"}`               | `CODE like 'AB*'`                    |
//! | `{gte: 100, lte: 500}`        | `(PRICE gte 100 and PRICE lte 500)`  |
//!
//! Clauses are joined with ` and ` in insertion order.

mod columns;
pub use self::columns::{to_upper_snake_case, ColumnMapping, FieldMap, UpperSnakeCase};

mod field_value;
pub use self::field_value::{Comparison, Condition, FieldValue, Literal};

mod quoting;
pub use self::quoting::{DoubledQuotes, Quoting, Verbatim};

mod search;
pub use self::search::SearchCriteria;

mod translate;
pub use self::translate::{translate, CriteriaTranslator};
