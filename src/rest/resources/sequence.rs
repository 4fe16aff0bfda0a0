//! Sequence resource implementation.

use crate::rest::{ResourceBase, Restful};
use crate::Client;

/// The company's sequences (`/sequences`).
#[derive(Debug)]
pub struct Sequence<'a> {
    base: ResourceBase<'a>,
}

impl<'a> Sequence<'a> {
    /// Creates the sequences resource, optionally bound to sequence `id`.
    #[must_use]
    pub fn new(client: &'a mut Client, id: Option<u64>) -> Self {
        Self {
            base: ResourceBase::new(client, Self::NAME, "/sequences", id),
        }
    }
}

impl<'a> Restful<'a> for Sequence<'a> {
    const NAME: &'static str = "Sequence";

    fn base(&self) -> &ResourceBase<'a> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ResourceBase<'a> {
        &mut self.base
    }
}
