use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::criteria::FieldMap;

/// Searchable collateral roll fields: logical name → column.
pub const COLLATERAL_ROLL_FIELDS: FieldMap = FieldMap::new(&[
    ("id", "ID"),
    ("code", "CODE"),
    ("arpCode", "ARP_CODE"),
    ("title", "TITLE"),
    ("customerCode", "CUSTOMER_CODE"),
    ("internalReference", "INTERNAL_REFERENCE"),
    ("amount", "AMOUNT"),
    ("price", "PRICE"),
    ("currency", "CURRENCY"),
    ("status", "STATUS"),
    ("active", "ACTIVE"),
    ("maturityDate", "MATURITY_DATE"),
]);

/// A collateral roll record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollateralRoll {
    pub id: Option<i64>,
    pub code: Option<String>,
    pub arp_code: Option<String>,
    pub title: Option<String>,
    pub customer_code: Option<String>,
    pub internal_reference: Option<String>,
    pub amount: Option<f64>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<i64>,
    pub active: Option<bool>,
    pub maturity_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
