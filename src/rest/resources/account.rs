//! Account resource implementation.
//!
//! The account is the company behind the API key. It is rooted at the base
//! URL itself and acts as the entry point to the company-wide collections.

use serde_json::Value;

use crate::rest::{ResourceBase, ResourceError, Restful};
use crate::Client;

/// The company account.
///
/// The collection selectors (`users()`, `groups()`, `sets()`, `sequences()`)
/// repoint the account at a collection so the [`Restful`] operations act on
/// it:
///
/// ```rust,ignore
/// use serde_json::json;
/// use talentcards_api::rest::resources::Account;
/// use talentcards_api::Restful;
///
/// let mut account = Account::new(&mut client, None);
/// let users = account.users().all(&json!({"sort": ["-email"]}))?;
/// ```
#[derive(Debug)]
pub struct Account<'a> {
    base: ResourceBase<'a>,
}

impl<'a> Account<'a> {
    /// Creates an account bound to `client`.
    #[must_use]
    pub fn new(client: &'a mut Client, id: Option<u64>) -> Self {
        Self {
            base: ResourceBase::new(client, Self::NAME, "", id),
        }
    }

    /// Targets the company's users.
    pub fn users(&mut self) -> &mut Self {
        self.base.set_endpoint("/users");
        self
    }

    /// Targets the company's groups.
    pub fn groups(&mut self) -> &mut Self {
        self.base.set_endpoint("/groups");
        self
    }

    /// Targets the company's sets.
    pub fn sets(&mut self) -> &mut Self {
        self.base.set_endpoint("/sets");
        self
    }

    /// Targets the company's sequences.
    pub fn sequences(&mut self) -> &mut Self {
        self.base.set_endpoint("/sequences");
        self
    }

    /// Fetches the company information.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub fn info(&mut self) -> Result<Value, ResourceError> {
        Ok(self.base.client().get("/", &Value::Null)?.response()?)
    }

    /// Fetches the profile of the API key's owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub fn me(&mut self) -> Result<Value, ResourceError> {
        Ok(self.base.client().get("/me", &Value::Null)?.response()?)
    }
}

impl<'a> Restful<'a> for Account<'a> {
    const NAME: &'static str = "Account";

    fn base(&self) -> &ResourceBase<'a> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase<'a> {
        &mut self.base
    }
}
