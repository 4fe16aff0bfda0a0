//! Shared CRUD behavior for resource objects.
//!
//! Every resource object embeds a [`ResourceBase`], which owns the endpoint,
//! the envelope key for write bodies, the optional ID and a mutable borrow of
//! the [`Client`]. The [`Restful`] trait gives each resource `all()`,
//! `find()`, `create()`, `update()`, `replace()`, `delete()` and `related()`
//! on top of it.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use talentcards_api::rest::{ResourceBase, Restful};
//! use talentcards_api::Client;
//!
//! pub struct Badge<'a> {
//!     base: ResourceBase<'a>,
//! }
//!
//! impl<'a> Badge<'a> {
//!     pub fn new(client: &'a mut Client, id: Option<u64>) -> Self {
//!         Self {
//!             base: ResourceBase::new(client, Self::NAME, "/badges", id),
//!         }
//!     }
//! }
//!
//! impl<'a> Restful<'a> for Badge<'a> {
//!     const NAME: &'static str = "Badge";
//!
//!     fn base(&self) -> &ResourceBase<'a> {
//!         &self.base
//!     }
//!
//!     fn base_mut(&mut self) -> &mut ResourceBase<'a> {
//!         &mut self.base
//!     }
//! }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{Client, HttpError};
use crate::rest::ResourceError;

/// The envelope key write payloads are nested under unless overridden.
pub const DEFAULT_WRAPPER: &str = "data";

/// State shared by every resource object.
#[derive(Debug)]
pub struct ResourceBase<'a> {
    client: &'a mut Client,
    name: &'static str,
    endpoint: String,
    wrapper: &'static str,
    id: Option<u64>,
}

impl<'a> ResourceBase<'a> {
    /// Creates the base for a resource named `name` rooted at `endpoint`.
    #[must_use]
    pub fn new(
        client: &'a mut Client,
        name: &'static str,
        endpoint: impl Into<String>,
        id: Option<u64>,
    ) -> Self {
        Self {
            client,
            name,
            endpoint: endpoint.into(),
            wrapper: DEFAULT_WRAPPER,
            id,
        }
    }

    /// Overrides the envelope key used for write bodies.
    #[must_use]
    pub fn with_wrapper(mut self, wrapper: &'static str) -> Self {
        self.wrapper = wrapper;
        self
    }

    /// Returns the ID the resource was constructed with.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns the resource type name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the current endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Points subsequent operations at `endpoint`.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    /// Returns the envelope key for write bodies.
    #[must_use]
    pub fn wrapper(&self) -> &'static str {
        self.wrapper
    }

    /// Returns the client this resource sends requests through.
    pub fn client(&mut self) -> &mut Client {
        self.client
    }

    /// Nests `data` under the envelope key: `{"data": data}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialize`] if `data` cannot be represented as JSON.
    pub fn envelope<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value, ResourceError> {
        let data = serde_json::to_value(data).map_err(HttpError::Serialize)?;
        let mut body = Map::new();
        body.insert(self.wrapper.to_string(), data);
        Ok(Value::Object(body))
    }

    fn own_id(&self, operation: &'static str) -> Result<u64, ResourceError> {
        self.id.ok_or(ResourceError::MissingId {
            resource: self.name,
            operation,
        })
    }

    /// GET the current endpoint with query `parameters`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub fn all(&mut self, parameters: &Value) -> Result<Value, ResourceError> {
        let endpoint = self.endpoint.clone();
        self.fetch(&endpoint, parameters)
    }

    /// GET `endpoint/id` with query `parameters`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub fn find(&mut self, id: u64, parameters: &Value) -> Result<Value, ResourceError> {
        let endpoint = format!("{}/{id}", self.endpoint);
        self.fetch(&endpoint, parameters)
    }

    /// POST `{wrapper: data}` to the current endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the body cannot be serialized or
    /// the request fails.
    pub fn create<T: Serialize + ?Sized>(&mut self, data: &T) -> Result<Value, ResourceError> {
        let body = self.envelope(data)?;
        Ok(self.client.post(&self.endpoint, &body)?.response()?)
    }

    /// PATCH `{wrapper: data}` to `endpoint/id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the body cannot be serialized or
    /// the request fails.
    pub fn update<T: Serialize + ?Sized>(
        &mut self,
        id: u64,
        data: &T,
    ) -> Result<Value, ResourceError> {
        let body = self.envelope(data)?;
        let endpoint = format!("{}/{id}", self.endpoint);
        Ok(self.client.patch(&endpoint, &body)?.response()?)
    }

    /// PUT `{wrapper: data}` to the resource's own URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no ID, and
    /// [`ResourceError::Http`] if the request fails.
    pub fn replace<T: Serialize + ?Sized>(&mut self, data: &T) -> Result<Value, ResourceError> {
        let id = self.own_id("replace")?;
        let body = self.envelope(data)?;
        let endpoint = format!("{}/{id}", self.endpoint);
        Ok(self.client.put(&endpoint, &body)?.response()?)
    }

    /// DELETE the resource's own URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no ID, and
    /// [`ResourceError::Http`] if the request fails.
    pub fn delete(&mut self) -> Result<Value, ResourceError> {
        let id = self.own_id("delete")?;
        let endpoint = format!("{}/{id}", self.endpoint);
        Ok(self.client.delete(&endpoint, &Value::Null)?.response()?)
    }

    /// GET `endpoint/id/relationships/kind` with query `parameters`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub fn related(
        &mut self,
        kind: &str,
        id: u64,
        parameters: &Value,
    ) -> Result<Value, ResourceError> {
        let endpoint = format!("{}/{id}/relationships/{kind}", self.endpoint);
        self.fetch(&endpoint, parameters)
    }

    fn fetch(&mut self, endpoint: &str, parameters: &Value) -> Result<Value, ResourceError> {
        Ok(self.client.get(endpoint, parameters)?.response()?)
    }
}

/// CRUD operations available on every resource object.
///
/// Implementors only provide access to their [`ResourceBase`]; every
/// operation has a default implementation that targets the base's current
/// endpoint.
pub trait Restful<'a> {
    /// The resource type name (e.g., "Group").
    const NAME: &'static str;

    /// Returns the embedded base.
    fn base(&self) -> &ResourceBase<'a>;

    /// Returns the embedded base mutably.
    fn base_mut(&mut self) -> &mut ResourceBase<'a>;

    /// Returns the ID the resource was constructed with.
    fn id(&self) -> Option<u64> {
        self.base().id()
    }

    /// Returns the current endpoint.
    fn endpoint<'s>(&'s self) -> &'s str
    where
        'a: 's,
    {
        self.base().endpoint()
    }

    /// Lists the collection at the current endpoint.
    ///
    /// # Errors
    ///
    /// See [`ResourceBase::all`].
    fn all(&mut self, parameters: &Value) -> Result<Value, ResourceError> {
        self.base_mut().all(parameters)
    }

    /// Fetches a single item of the collection.
    ///
    /// # Errors
    ///
    /// See [`ResourceBase::find`].
    fn find(&mut self, id: u64, parameters: &Value) -> Result<Value, ResourceError> {
        self.base_mut().find(id, parameters)
    }

    /// Creates an item in the collection.
    ///
    /// # Errors
    ///
    /// See [`ResourceBase::create`].
    fn create<T: Serialize + ?Sized>(&mut self, data: &T) -> Result<Value, ResourceError> {
        self.base_mut().create(data)
    }

    /// Partially updates item `id`.
    ///
    /// # Errors
    ///
    /// See [`ResourceBase::update`].
    fn update<T: Serialize + ?Sized>(&mut self, id: u64, data: &T) -> Result<Value, ResourceError> {
        self.base_mut().update(id, data)
    }

    /// Replaces this resource.
    ///
    /// # Errors
    ///
    /// See [`ResourceBase::replace`].
    fn replace<T: Serialize + ?Sized>(&mut self, data: &T) -> Result<Value, ResourceError> {
        self.base_mut().replace(data)
    }

    /// Deletes this resource.
    ///
    /// # Errors
    ///
    /// See [`ResourceBase::delete`].
    fn delete(&mut self) -> Result<Value, ResourceError> {
        self.base_mut().delete()
    }

    /// Lists the `kind` relationship of item `id`.
    ///
    /// # Errors
    ///
    /// See [`ResourceBase::related`].
    fn related(&mut self, kind: &str, id: u64, parameters: &Value) -> Result<Value, ResourceError> {
        self.base_mut().related(kind, id, parameters)
    }
}
