//! Group resource implementation.

use serde::Serialize;
use serde_json::Value;

use crate::rest::{ResourceBase, ResourceError, Restful};
use crate::Client;

const ROOT: &str = "/groups";

/// A single group of the company, addressed by its ID.
///
/// The scope selectors (`users()`, `sets()`, `sequences()`) repoint the group
/// at one of its member collections; the user-specific calls execute
/// immediately and leave the group pointed at the path they called.
///
/// ```rust,ignore
/// use serde_json::json;
/// use talentcards_api::rest::resources::Group;
/// use talentcards_api::Restful;
///
/// let mut group = Group::new(&mut client, 12);
/// let members = group.users().all(&json!({}))?;
/// let reports = group.reports_for(34)?;
/// ```
#[derive(Debug)]
pub struct Group<'a> {
    base: ResourceBase<'a>,
    group_id: u64,
}

impl<'a> Group<'a> {
    /// Creates the group with ID `id` bound to `client`.
    #[must_use]
    pub fn new(client: &'a mut Client, id: u64) -> Self {
        Self {
            base: ResourceBase::new(client, Self::NAME, ROOT, Some(id)),
            group_id: id,
        }
    }

    fn scoped(&self, suffix: &str) -> String {
        format!("{ROOT}/{}/{suffix}", self.group_id)
    }

    /// Targets the group's users.
    pub fn users(&mut self) -> &mut Self {
        let endpoint = self.scoped("users");
        self.base.set_endpoint(endpoint);
        self
    }

    /// Targets the group's sets.
    pub fn sets(&mut self) -> &mut Self {
        let endpoint = self.scoped("sets");
        self.base.set_endpoint(endpoint);
        self
    }

    /// Targets the group's sequences.
    pub fn sequences(&mut self) -> &mut Self {
        let endpoint = self.scoped("sequences");
        self.base.set_endpoint(endpoint);
        self
    }

    /// Fetches the learning reports of `user_id` within this group.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub fn reports_for(&mut self, user_id: u64) -> Result<Value, ResourceError> {
        let endpoint = self.scoped(&format!("users/{user_id}/reports"));
        self.base.set_endpoint(endpoint.as_str());
        Ok(self.base.client().get(&endpoint, &Value::Null)?.response()?)
    }

    /// Enrolls `user_id` into the sets described by `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the body cannot be serialized or
    /// the request fails.
    pub fn enroll_to_sets<T: Serialize + ?Sized>(
        &mut self,
        user_id: u64,
        data: &T,
    ) -> Result<Value, ResourceError> {
        let endpoint = self.set_relationships(user_id);
        self.base.set_endpoint(endpoint.as_str());
        let body = self.base.envelope(data)?;
        Ok(self.base.client().post(&endpoint, &body)?.response()?)
    }

    /// Removes `user_id` from the sets described by `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the body cannot be serialized or
    /// the request fails.
    pub fn disenroll_from_sets<T: Serialize + ?Sized>(
        &mut self,
        user_id: u64,
        data: &T,
    ) -> Result<Value, ResourceError> {
        let endpoint = self.set_relationships(user_id);
        self.base.set_endpoint(endpoint.as_str());
        let body = self.base.envelope(data)?;
        Ok(self.base.client().delete(&endpoint, &body)?.response()?)
    }

    fn set_relationships(&self, user_id: u64) -> String {
        self.scoped(&format!("users/{user_id}/relationships/sets"))
    }
}

impl<'a> Restful<'a> for Group<'a> {
    const NAME: &'static str = "Group";

    fn base(&self) -> &ResourceBase<'a> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase<'a> {
        &mut self.base
    }
}
