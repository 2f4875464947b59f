//! The constraint a caller attaches to one logical field.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::errors::InvalidCriteriaError;

/// A scalar operand: string, number or boolean.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Literal {
    /// Classifies a JSON scalar. Objects, arrays and `null` are rejected.
    pub(crate) fn from_json(field: &str, value: &Value) -> Result<Self, InvalidCriteriaError> {
        match value {
            Value::String(s) => Ok(Literal::String(s.clone())),
            Value::Bool(b) => Ok(Literal::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Literal::Int(i)),
                None => n.as_f64().map(Literal::Float).ok_or_else(|| {
                    InvalidCriteriaError::NotALiteral {
                        field: field.to_string(),
                        found: "an unrepresentable number",
                    }
                }),
            },
            other => Err(InvalidCriteriaError::NotALiteral {
                field: field.to_string(),
                found: json_kind(other),
            }),
        }
    }
}

/// Renders the bare token. Strings are not quoted here; see [`super::Quoting`].
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => write!(f, "{}", x),
            Literal::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}
impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}
impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}
impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value.into())
    }
}
impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Int(value.into())
    }
}
impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}
impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

/// Single-operand comparison operators. `in` is modelled separately by
/// [`Condition::In`] because it takes a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Pattern match; `*` wildcards are passed to the backend verbatim.
    Like,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Comparison::Eq => "eq",
                Comparison::Ne => "ne",
                Comparison::Gt => "gt",
                Comparison::Gte => "gte",
                Comparison::Lt => "lt",
                Comparison::Lte => "lte",
                Comparison::Like => "like",
            }
        )?;
        Ok(())
    }
}
impl FromStr for Comparison {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Comparison::Eq),
            "ne" => Ok(Comparison::Ne),
            "gt" => Ok(Comparison::Gt),
            "gte" => Ok(Comparison::Gte),
            "lt" => Ok(Comparison::Lt),
            "lte" => Ok(Comparison::Lte),
            "like" => Ok(Comparison::Like),
            _ => Err(()),
        }
    }
}

/// One entry of an operator object.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Compare(Comparison, Literal),
    /// Equality against any of the listed values.
    In(Vec<Literal>),
}

impl Condition {
    pub fn eq(value: impl Into<Literal>) -> Self {
        Condition::Compare(Comparison::Eq, value.into())
    }
    pub fn ne(value: impl Into<Literal>) -> Self {
        Condition::Compare(Comparison::Ne, value.into())
    }
    pub fn gt(value: impl Into<Literal>) -> Self {
        Condition::Compare(Comparison::Gt, value.into())
    }
    pub fn gte(value: impl Into<Literal>) -> Self {
        Condition::Compare(Comparison::Gte, value.into())
    }
    pub fn lt(value: impl Into<Literal>) -> Self {
        Condition::Compare(Comparison::Lt, value.into())
    }
    pub fn lte(value: impl Into<Literal>) -> Self {
        Condition::Compare(Comparison::Lte, value.into())
    }
    pub fn like(pattern: impl Into<Literal>) -> Self {
        Condition::Compare(Comparison::Like, pattern.into())
    }
    pub fn is_in<I, L>(values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        Condition::In(values.into_iter().map(Into::into).collect())
    }
}

/// The constraint on one field: a literal (equality), an operator object
/// (AND of its conditions) or a list of literals (OR of equalities).
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Literal(Literal),
    Operators(Vec<Condition>),
    List(Vec<Literal>),
}

impl FieldValue {
    /// An operator object. Conditions render in the given order.
    pub fn all<I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = Condition>,
    {
        FieldValue::Operators(conditions.into_iter().collect())
    }

    /// A list of literals, matched with OR.
    pub fn any_of<I, L>(values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Classifies a JSON value. `null` means "no constraint" and yields `None`.
    ///
    /// Objects become operator objects (keys in document order), arrays become
    /// literal lists, and scalars become literals.
    pub fn from_json(field: &str, value: &Value) -> Result<Option<Self>, InvalidCriteriaError> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let values = items
                    .iter()
                    .map(|item| Literal::from_json(field, item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(FieldValue::List(values)))
            }
            Value::Object(entries) => {
                let mut conditions = Vec::with_capacity(entries.len());
                for (operator, operand) in entries {
                    conditions.push(condition_from_json(field, operator, operand)?);
                }
                Ok(Some(FieldValue::Operators(conditions)))
            }
            scalar => Literal::from_json(field, scalar).map(|l| Some(FieldValue::Literal(l))),
        }
    }
}

fn condition_from_json(
    field: &str,
    operator: &str,
    operand: &Value,
) -> Result<Condition, InvalidCriteriaError> {
    if operator == "in" {
        let Value::Array(items) = operand else {
            return Err(InvalidCriteriaError::MalformedOperand {
                field: field.to_string(),
                operator: operator.to_string(),
                reason: "expected a list of values",
            });
        };
        let values = items
            .iter()
            .map(|item| Literal::from_json(field, item))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Condition::In(values));
    }

    let comparison =
        Comparison::from_str(operator).map_err(|_| InvalidCriteriaError::UnsupportedOperator {
            field: field.to_string(),
            operator: operator.to_string(),
        })?;
    if operand.is_array() {
        return Err(InvalidCriteriaError::MalformedOperand {
            field: field.to_string(),
            operator: operator.to_string(),
            reason: "expected a single value",
        });
    }
    Ok(Condition::Compare(
        comparison,
        Literal::from_json(field, operand)?,
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

macro_rules! literal_field_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Literal(value.into())
                }
            }
        )*
    };
}
literal_field_value!(&str, String, i64, i32, u32, f64, bool);

impl From<Literal> for FieldValue {
    fn from(value: Literal) -> Self {
        FieldValue::Literal(value)
    }
}

impl From<Condition> for FieldValue {
    fn from(condition: Condition) -> Self {
        FieldValue::Operators(vec![condition])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_become_literals() {
        assert_eq!(
            FieldValue::from_json("code", &json!("ABC")).unwrap(),
            Some(FieldValue::Literal(Literal::String("ABC".into())))
        );
        assert_eq!(
            FieldValue::from_json("status", &json!(1)).unwrap(),
            Some(FieldValue::Literal(Literal::Int(1)))
        );
        assert_eq!(
            FieldValue::from_json("active", &json!(true)).unwrap(),
            Some(FieldValue::Literal(Literal::Bool(true)))
        );
        assert_eq!(
            FieldValue::from_json("price", &json!(9.5)).unwrap(),
            Some(FieldValue::Literal(Literal::Float(9.5)))
        );
    }

    #[test]
    fn null_is_no_constraint() {
        assert_eq!(FieldValue::from_json("code", &Value::Null).unwrap(), None);
    }

    #[test]
    fn operator_object_keeps_key_order() {
        let value = FieldValue::from_json("price", &json!({ "lte": 500, "gte": 100 }))
            .unwrap()
            .unwrap();
        assert_eq!(
            value,
            FieldValue::all([Condition::lte(500), Condition::gte(100)])
        );
    }

    #[test]
    fn in_requires_a_list() {
        let err = FieldValue::from_json("status", &json!({ "in": 3 })).unwrap_err();
        assert!(matches!(
            err,
            InvalidCriteriaError::MalformedOperand { ref operator, .. } if operator == "in"
        ));
    }

    #[test]
    fn list_operand_rejected_for_single_value_operators() {
        let err = FieldValue::from_json("status", &json!({ "eq": [1, 2] })).unwrap_err();
        assert!(matches!(err, InvalidCriteriaError::MalformedOperand { .. }));
    }

    #[test]
    fn unknown_operator_rejected() {
        let err = FieldValue::from_json("code", &json!({ "startsWith": "A" })).unwrap_err();
        assert_eq!(
            err,
            InvalidCriteriaError::UnsupportedOperator {
                field: "code".into(),
                operator: "startsWith".into(),
            }
        );
    }

    #[test]
    fn nested_objects_are_not_literals() {
        let err = FieldValue::from_json("tags", &json!([{ "eq": 1 }])).unwrap_err();
        assert_eq!(
            err,
            InvalidCriteriaError::NotALiteral {
                field: "tags".into(),
                found: "an object",
            }
        );
    }

    #[test]
    fn null_and_object_operands_are_not_literals() {
        let cases = [
            ("code", json!({ "eq": null }), "null"),
            ("price", json!({ "gte": { "x": 1 } }), "an object"),
            ("status", json!({ "in": [1, null] }), "null"),
            ("tags", json!(["A", null]), "null"),
        ];
        for (field, value, found) in cases {
            assert_eq!(
                FieldValue::from_json(field, &value).unwrap_err(),
                InvalidCriteriaError::NotALiteral {
                    field: field.into(),
                    found,
                },
                "{value}"
            );
        }
    }

    #[test]
    fn float_literal_display_drops_trailing_zero() {
        assert_eq!(Literal::Float(100.0).to_string(), "100");
        assert_eq!(Literal::Float(2.75).to_string(), "2.75");
    }
}
