//! Client for the backoffice REST API.
//!
//! The interesting part is the query construction layer: [`SearchCriteria`]
//! is rendered into an OData-style filter expression by [`translate`], and
//! [`QueryOptions`] is serialized into a URL query string by [`build`]. The
//! entity [`Resource`] handles are thin forwards onto [`Client::request`].

mod client;
mod config;
pub mod criteria;
mod errors;
pub mod query;
mod resource;
pub mod types;
pub use self::client::{Client, Method};
pub use self::config::ClientConfig;
pub use self::criteria::{
    translate, Comparison, Condition, CriteriaTranslator, FieldValue, Literal, SearchCriteria,
};
pub use self::errors::{Error, InvalidCriteriaError};
pub use self::query::{build, with_query, Query, QueryOptions, Sort, SortDirection, SortKey};
pub use self::resource::{
    descriptor_by_name, search_query_string, EntityDescriptor, Resource, COLLATERAL_ROLLS,
    CUSTOMERS, ENTITIES,
};
