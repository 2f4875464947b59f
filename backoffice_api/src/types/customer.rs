use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::criteria::FieldMap;

/// Searchable customer fields: logical name → column.
pub const CUSTOMER_FIELDS: FieldMap = FieldMap::new(&[
    ("id", "ID"),
    ("code", "CODE"),
    ("name", "NAME"),
    ("title", "TITLE"),
    ("email", "EMAIL"),
    ("active", "ACTIVE"),
    ("status", "STATUS"),
    ("tags", "TAGS"),
    ("internalReference", "INTERNAL_REFERENCE"),
    ("createdAt", "CREATED_AT"),
]);

/// A customer record. Fields the client does not model land in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<i64>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    pub status: Option<i64>,
    /// Absent and `null` both read as no tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub internal_reference: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
