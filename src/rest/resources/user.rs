//! User resource implementation.

use crate::rest::{ResourceBase, Restful};
use crate::Client;

/// The company's users (`/users`).
///
/// ```rust,ignore
/// use serde_json::json;
/// use talentcards_api::rest::resources::User;
/// use talentcards_api::Restful;
///
/// let mut users = User::new(&mut client, None);
/// let page = users.all(&json!({"filter": {"email": "jane@example.com"}}))?;
/// let groups = users.related("groups", 42, &json!({}))?;
/// ```
#[derive(Debug)]
pub struct User<'a> {
    base: ResourceBase<'a>,
}

impl<'a> User<'a> {
    /// Creates the users resource, optionally bound to user `id`.
    #[must_use]
    pub fn new(client: &'a mut Client, id: Option<u64>) -> Self {
        Self {
            base: ResourceBase::new(client, Self::NAME, "/users", id),
        }
    }
}

impl<'a> Restful<'a> for User<'a> {
    const NAME: &'static str = "User";

    fn base(&self) -> &ResourceBase<'a> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase<'a> {
        &mut self.base
    }
}
