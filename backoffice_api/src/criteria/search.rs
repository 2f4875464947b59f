//! [`SearchCriteria`]: an ordered record of logical field → constraint.

use serde_json::Value;

use super::FieldValue;
use crate::errors::InvalidCriteriaError;

/// Constraints keyed by logical (camelCase) field name.
///
/// Entries keep insertion order and are not deduplicated. An entry set to
/// `None` means "no constraint" and contributes nothing to the filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchCriteria {
    entries: Vec<(String, Option<FieldValue>)>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint on `field`.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.entries.push((field.to_string(), Some(value.into())));
        self
    }

    /// Adds `field` only when `value` is present; `None` is kept as an unset entry.
    pub fn with_optional<V: Into<FieldValue>>(mut self, field: &str, value: Option<V>) -> Self {
        self.entries
            .push((field.to_string(), value.map(Into::into)));
        self
    }

    pub fn push(&mut self, field: &str, value: Option<FieldValue>) {
        self.entries.push((field.to_string(), value));
    }

    /// Entries with a constraint, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .filter_map(|(field, value)| value.as_ref().map(|v| (field.as_str(), v)))
    }

    /// True when no entry carries a constraint.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Reads criteria from a JSON object, keeping key order. `null` values
    /// are unset entries.
    pub fn from_json(value: &Value) -> Result<Self, InvalidCriteriaError> {
        let Value::Object(fields) = value else {
            return Err(InvalidCriteriaError::Malformed(format!(
                "expected an object, found {}",
                value
            )));
        };
        let mut criteria = Self::new();
        for (field, value) in fields {
            criteria.push(field, FieldValue::from_json(field, value)?);
        }
        Ok(criteria)
    }

    pub fn from_json_str(json: &str) -> Result<Self, InvalidCriteriaError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| InvalidCriteriaError::Malformed(e.to_string()))?;
        Self::from_json(&value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::criteria::Literal;

    #[test]
    fn unset_entries_are_inactive() {
        let criteria = SearchCriteria::new().with_optional::<&str>("code", None);
        assert!(criteria.is_empty());
        assert!(SearchCriteria::new().is_empty());
    }

    #[test]
    fn json_keeps_document_order() {
        let criteria =
            SearchCriteria::from_json_str(r#"{"status": 1, "code": "ABC", "name": null}"#)
                .unwrap();
        let fields: Vec<&str> = criteria.active().map(|(f, _)| f).collect();
        assert_eq!(fields, ["status", "code"]);
    }

    #[test]
    fn json_must_be_an_object() {
        assert!(matches!(
            SearchCriteria::from_json(&json!(["code"])),
            Err(InvalidCriteriaError::Malformed(_))
        ));
        assert!(matches!(
            SearchCriteria::from_json_str("{not json"),
            Err(InvalidCriteriaError::Malformed(_))
        ));
    }

    #[test]
    fn duplicates_are_kept() {
        let criteria = SearchCriteria::new().with("code", "A").with("code", "B");
        let values: Vec<&FieldValue> = criteria.active().map(|(_, v)| v).collect();
        assert_eq!(
            values,
            [
                &FieldValue::Literal(Literal::from("A")),
                &FieldValue::Literal(Literal::from("B"))
            ]
        );
    }
}
