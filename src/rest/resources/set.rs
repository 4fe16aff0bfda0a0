//! Set resource implementation.

use crate::rest::{ResourceBase, Restful};
use crate::Client;

/// The company's card sets (`/sets`).
#[derive(Debug)]
pub struct Set<'a> {
    base: ResourceBase<'a>,
}

impl<'a> Set<'a> {
    /// Creates the sets resource, optionally bound to set `id`.
    #[must_use]
    pub fn new(client: &'a mut Client, id: Option<u64>) -> Self {
        Self {
            base: ResourceBase::new(client, Self::NAME, "/sets", id),
        }
    }
}

impl<'a> Restful<'a> for Set<'a> {
    const NAME: &'static str = "Set";

    fn base(&self) -> &ResourceBase<'a> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase<'a> {
        &mut self.base
    }
}
