//! TalentCards resource objects.
//!
//! Each resource binds an endpoint and gets the shared CRUD operations from
//! [`Restful`](crate::rest::Restful):
//!
//! | Resource     | Endpoint            | Extra operations                                   |
//! |--------------|---------------------|----------------------------------------------------|
//! | [`Account`]  | company root        | `users`, `groups`, `sets`, `sequences`, `info`, `me` |
//! | [`Group`]    | `/groups/{id}`      | `users`, `sets`, `sequences`, `reports_for`, `enroll_to_sets`, `disenroll_from_sets` |
//! | [`User`]     | `/users`            |                                                    |
//! | [`Set`]      | `/sets`             |                                                    |
//! | [`Sequence`] | `/sequences`        |                                                    |
//!
//! Resources are usually obtained through the [`Factory`](crate::Factory).

mod account;
mod group;
mod sequence;
mod set;
mod user;

pub use account::Account;
pub use group::Group;
pub use sequence::Sequence;
pub use set::Set;
pub use user::User;
