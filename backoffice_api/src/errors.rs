//! Error types for the API client and the criteria translator.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The search criteria could not be rendered; no request was sent.
    #[error("Invalid search criteria: {0}")]
    InvalidCriteria(#[from] InvalidCriteriaError),
}

/// Caller errors raised while turning search criteria into a filter expression.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidCriteriaError {
    /// An operator object used a key outside `eq ne gt gte lt lte like in`.
    #[error("unsupported operator `{operator}` on field `{field}`")]
    UnsupportedOperator { field: String, operator: String },
    /// The operand does not fit the operator (`in` without a list, a list for `eq`, ...).
    #[error("malformed operand for `{operator}` on field `{field}`: {reason}")]
    MalformedOperand {
        field: String,
        operator: String,
        reason: &'static str,
    },
    /// A list element or operand was not a string, number or boolean.
    #[error("field `{field}` expects a string, number or boolean, found {found}")]
    NotALiteral { field: String, found: &'static str },
    /// An empty list, empty `in` list or empty operator object.
    #[error("field `{0}` has an empty constraint")]
    EmptyConstraint(String),
    /// The logical field name has no column in the entity's field map.
    #[error("unknown field `{0}`")]
    UnknownField(String),
    /// The criteria document itself was not a JSON object.
    #[error("search criteria must be a JSON object: {0}")]
    Malformed(String),
}
