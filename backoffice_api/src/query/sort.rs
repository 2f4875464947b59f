//! Sort specifications and their `FIELD[ desc]` token form.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

/// Sort order for a field. Ascending is the default and is omitted from tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}
impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Asc => write!(f, "{}", self.field),
            SortDirection::Desc => write!(f, "{} desc", self.field),
        }
    }
}

/// An ordered list of sort keys.
///
/// Deserializes from the array shapes `["F"]`, `["F", "desc"]`,
/// `[["F1", "F2"], "desc"]` and `[["F1", "F2"]]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Sort {
    keys: Vec<SortKey>,
}

impl Sort {
    /// Ascending on one field.
    pub fn by(field: &str) -> Self {
        Self::by_direction(field, SortDirection::Asc)
    }

    pub fn by_direction(field: &str, direction: SortDirection) -> Self {
        Self::default().then(field, direction)
    }

    /// Several fields sharing one direction.
    pub fn fields<I, S>(fields: I, direction: SortDirection) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        fields
            .into_iter()
            .fold(Self::default(), |sort, f| sort.then(f.as_ref(), direction))
    }

    /// Appends a further key.
    pub fn then(mut self, field: &str, direction: SortDirection) -> Self {
        self.keys.push(SortKey {
            field: field.to_string(),
            direction,
        });
        self
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Comma-joined tokens: `TITLE desc,CODE desc`.
impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.keys.iter().map(ToString::to_string).collect();
        f.write_str(&tokens.join(","))
    }
}

impl TryFrom<Value> for Sort {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(field) => Ok(Sort::by(&field)),
            Value::Array(items) => match items.as_slice() {
                [fields] => Ok(Sort::fields(field_list(fields)?, SortDirection::Asc)),
                [fields, Value::String(direction)] => {
                    let direction = direction.parse::<SortDirection>().map_err(|_| {
                        format!("sort direction must be 'asc' or 'desc', got '{}'", direction)
                    })?;
                    Ok(Sort::fields(field_list(fields)?, direction))
                }
                _ => Err("sort must be [field], [field, dir], [[fields], dir] or [[fields]]".into()),
            },
            other => Err(format!("unsupported sort specification: {}", other)),
        }
    }
}

fn field_list(value: &Value) -> Result<Vec<String>, String> {
    match value {
        Value::String(field) => Ok(vec![field.clone()]),
        Value::Array(fields) => fields
            .iter()
            .map(|f| {
                f.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| format!("sort field must be a string, got {}", f))
            })
            .collect(),
        other => Err(format!("sort field must be a string, got {}", other)),
    }
}
