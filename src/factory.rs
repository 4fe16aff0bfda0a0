//! Name-based construction of resource objects.
//!
//! The [`Factory`] resolves a resource name such as `"account"` or `"group"`
//! to a concrete resource type and constructs it on top of a borrowed
//! [`Client`]. Names are matched after capitalizing their first character,
//! so `"account"` and `"Account"` both resolve to
//! [`Account`](crate::rest::resources::Account).
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use talentcards_api::{Factory, Restful};
//!
//! let mut factory = Factory::new(&mut client);
//!
//! let mut resource = factory.produce("group", Some("12"))?;
//! let group = resource.as_group_mut().unwrap();
//! let reports = group.reports_for(34)?;
//! ```

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::rest::resources::{Account, Group, Sequence, Set, User};
use crate::rest::Restful;
use crate::Client;

/// Error type for resource construction.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// No resource type is registered under the resolved name.
    #[error("Class {name} could not be created.")]
    ClassNotCreated {
        /// The capitalized name that was looked up.
        name: String,
    },

    /// The supplied ID is not a number.
    #[error("This is not a valid ID")]
    InvalidArgument {
        /// The rejected ID text.
        value: String,
    },

    /// The resource type cannot be constructed without an ID.
    #[error("A {resource} cannot be created without an id.")]
    MissingId {
        /// The resource type name.
        resource: &'static str,
    },
}

/// A resource object produced by the [`Factory`].
#[derive(Debug)]
pub enum Resource<'r> {
    /// See [`Account`].
    Account(Account<'r>),
    /// See [`Group`].
    Group(Group<'r>),
    /// See [`User`].
    User(User<'r>),
    /// See [`Set`].
    Set(Set<'r>),
    /// See [`Sequence`].
    Sequence(Sequence<'r>),
}

macro_rules! accessors {
    ($($variant:ident: $ty:ident, $as_ref:ident, $as_mut:ident, $into:ident;)*) => {
        $(
            #[doc = concat!("Returns the inner [`", stringify!($ty), "`], if this is one.")]
            #[must_use]
            pub fn $as_ref(&self) -> Option<&$ty<'r>> {
                match self {
                    Self::$variant(resource) => Some(resource),
                    _ => None,
                }
            }

            #[doc = concat!("Returns the inner [`", stringify!($ty), "`] mutably, if this is one.")]
            pub fn $as_mut(&mut self) -> Option<&mut $ty<'r>> {
                match self {
                    Self::$variant(resource) => Some(resource),
                    _ => None,
                }
            }

            #[doc = concat!("Unwraps the inner [`", stringify!($ty), "`], if this is one.")]
            #[must_use]
            pub fn $into(self) -> Option<$ty<'r>> {
                match self {
                    Self::$variant(resource) => Some(resource),
                    _ => None,
                }
            }
        )*
    };
}

impl<'r> Resource<'r> {
    /// Returns the resource type name (e.g., "Group").
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Account(_) => Account::NAME,
            Self::Group(_) => Group::NAME,
            Self::User(_) => User::NAME,
            Self::Set(_) => Set::NAME,
            Self::Sequence(_) => Sequence::NAME,
        }
    }

    accessors! {
        Account: Account, as_account, as_account_mut, into_account;
        Group: Group, as_group, as_group_mut, into_group;
        User: User, as_user, as_user_mut, into_user;
        Set: Set, as_set, as_set_mut, into_set;
        Sequence: Sequence, as_sequence, as_sequence_mut, into_sequence;
    }
}

type Constructor = for<'r> fn(&'r mut Client, Option<u64>) -> Result<Resource<'r>, FactoryError>;

fn registry() -> HashMap<&'static str, Constructor> {
    let mut registry: HashMap<&'static str, Constructor> = HashMap::new();
    registry.insert(Account::NAME, |client, id| {
        Ok(Resource::Account(Account::new(client, id)))
    });
    registry.insert(Group::NAME, |client, id| {
        let id = id.ok_or(FactoryError::MissingId {
            resource: Group::NAME,
        })?;
        Ok(Resource::Group(Group::new(client, id)))
    });
    registry.insert(User::NAME, |client, id| Ok(Resource::User(User::new(client, id))));
    registry.insert(Set::NAME, |client, id| Ok(Resource::Set(Set::new(client, id))));
    registry.insert(Sequence::NAME, |client, id| {
        Ok(Resource::Sequence(Sequence::new(client, id)))
    });
    registry
}

/// Produces resource objects by name.
pub struct Factory<'a> {
    client: &'a mut Client,
    registry: HashMap<&'static str, Constructor>,
}

impl fmt::Debug for Factory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("client", &self.client)
            .field("registry", &self.names())
            .finish()
    }
}

impl<'a> Factory<'a> {
    /// Creates a factory whose resources send through `client`.
    #[must_use]
    pub fn new(client: &'a mut Client) -> Self {
        Self {
            client,
            registry: registry(),
        }
    }

    /// Resolves `name` and constructs the resource, bound to `id` if given.
    ///
    /// The type is resolved before the ID is validated.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::ClassNotCreated`] if no resource type matches `name`
    /// - [`FactoryError::InvalidArgument`] if `id` is not a number
    /// - [`FactoryError::MissingId`] if the resource type needs an ID and
    ///   none was given
    pub fn produce(&mut self, name: &str, id: Option<&str>) -> Result<Resource<'_>, FactoryError> {
        let name = capitalize(name);
        let Some(constructor) = self.registry.get(name.as_str()).copied() else {
            return Err(FactoryError::ClassNotCreated { name });
        };

        let id = id.map(parse_id).transpose()?;
        tracing::debug!(resource = %name, ?id, "Producing resource");
        constructor(self.client, id)
    }

    /// Constructs the company [`Account`].
    pub fn account(&mut self) -> Account<'_> {
        Account::new(self.client, None)
    }

    /// Constructs the [`Group`] with ID `id`.
    pub fn group(&mut self, id: u64) -> Group<'_> {
        Group::new(self.client, id)
    }

    /// Lists the registered resource type names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.registry.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn parse_id(value: &str) -> Result<u64, FactoryError> {
    value
        .parse::<u64>()
        .map_err(|_| FactoryError::InvalidArgument {
            value: value.to_string(),
        })
}
