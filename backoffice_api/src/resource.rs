//! Entity descriptors and the generic per-entity [`Resource`] handle.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{
    client::{Client, Method},
    criteria::{translate, FieldMap, SearchCriteria},
    query::{encode_component, Query, QueryOptions},
    types::{ApiResponse, COLLATERAL_ROLL_FIELDS, CUSTOMER_FIELDS},
    Error,
};

/// Static facts about one backend entity: its resource path and the
/// logical → column table its search criteria are translated against.
#[derive(Clone, Copy, Debug)]
pub struct EntityDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub columns: FieldMap,
}

pub static CUSTOMERS: EntityDescriptor = EntityDescriptor {
    name: "customers",
    path: "/customers",
    columns: CUSTOMER_FIELDS,
};

pub static COLLATERAL_ROLLS: EntityDescriptor = EntityDescriptor {
    name: "collateral-rolls",
    path: "/collateral-rolls",
    columns: COLLATERAL_ROLL_FIELDS,
};

/// Every entity the client knows about.
pub static ENTITIES: [&EntityDescriptor; 2] = [&CUSTOMERS, &COLLATERAL_ROLLS];

/// Finds a descriptor by name. `collateral_rolls` and `collateral-rolls` are equivalent.
pub fn descriptor_by_name(name: &str) -> Option<&'static EntityDescriptor> {
    let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
    ENTITIES.iter().copied().find(|e| e.name == wanted)
}

/// Endpoints of one entity, returning records of type `T`.
///
/// Use `serde_json::Value` as `T` for untyped access.
pub struct Resource<'c, T> {
    client: &'c Client,
    entity: &'static EntityDescriptor,
    _record: PhantomData<fn() -> T>,
}

impl<'c, T> Resource<'c, T> {
    pub(crate) fn new(client: &'c Client, entity: &'static EntityDescriptor) -> Self {
        Self {
            client,
            entity,
            _record: PhantomData,
        }
    }

    pub fn entity(&self) -> &'static EntityDescriptor {
        self.entity
    }

    /// Renders `criteria` against this entity's field map.
    pub fn filter(&self, criteria: &SearchCriteria) -> Result<Option<String>, Error> {
        Ok(translate(criteria, &self.entity.columns)?)
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.entity.path, encode_component(id))
    }
}

impl<'c, T: DeserializeOwned> Resource<'c, T> {
    /// `GET /{entity}?{options}`
    pub async fn list(&self, options: &QueryOptions) -> Result<ApiResponse<T>, Error> {
        self.client
            .get::<ApiResponse<T>, QueryOptions>(self.entity.path, Some(options))
            .await
    }

    /// Translates `criteria` into `q` and lists. When the criteria carry no
    /// constraint the options' own `q`, if any, is kept.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        options: QueryOptions,
    ) -> Result<ApiResponse<T>, Error> {
        let mut options = options;
        if let Some(filter) = self.filter(criteria)? {
            options.q = Some(filter);
        }
        self.list(&options).await
    }

    /// `GET /{entity}/{id}`
    pub async fn get(&self, id: &str) -> Result<T, Error> {
        self.client
            .request::<T, ()>(Method::GET, &self.item_path(id), None)
            .await
    }

    /// `POST /{entity}`
    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<T, Error> {
        self.client
            .request(Method::POST, self.entity.path, Some(body))
            .await
    }

    /// `PUT /{entity}/{id}`
    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<T, Error> {
        self.client
            .request(Method::PUT, &self.item_path(id), Some(body))
            .await
    }

    /// `PATCH /{entity}/{id}`
    pub async fn patch<B: Serialize + ?Sized>(&self, id: &str, body: &B) -> Result<T, Error> {
        self.client
            .request(Method::PATCH, &self.item_path(id), Some(body))
            .await
    }

    /// `DELETE /{entity}/{id}`; the response body is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.client
            .request_empty::<()>(Method::DELETE, &self.item_path(id), None)
            .await
    }

    /// Total number of records matching `criteria` (all records when `None`).
    ///
    /// Requests `count=true` without a `limit`. A response without
    /// `totalCount` counts as zero.
    pub async fn count(&self, criteria: Option<&SearchCriteria>) -> Result<u64, Error> {
        let filter = match criteria {
            Some(criteria) => self.filter(criteria)?,
            None => None,
        };
        let options = QueryOptions::default()
            .with_count(true)
            .with_filter(filter);
        let resp: ApiResponse<Value> = self
            .client
            .get(self.entity.path, Some(&options))
            .await?;
        Ok(resp.total_or_zero())
    }

    /// RPC-style action: `POST /{entity}/{id}/{action}`.
    pub async fn invoke<B: Serialize + ?Sized>(
        &self,
        id: &str,
        action: &str,
        body: &B,
    ) -> Result<Value, Error> {
        let path = format!("{}/{}", self.item_path(id), encode_component(action));
        tracing::debug!(entity = self.entity.name, action, "invoking entity action");
        self.client.request(Method::POST, &path, Some(body)).await
    }
}

/// Query string for a search without sending it, e.g. for logging or caching keys.
pub fn search_query_string(
    entity: &EntityDescriptor,
    criteria: &SearchCriteria,
    options: QueryOptions,
) -> Result<String, Error> {
    let filter = translate(criteria, &entity.columns)?;
    let options = match filter {
        Some(filter) => options.with_filter(Some(filter)),
        None => options,
    };
    Ok(options.append_to_path(entity.path))
}
