//! Data-access layer for links.
//!
//! Every mutation is a single statement on the store side. In particular the
//! click counter is bumped with one atomic update keyed by the link id, so
//! concurrent redirects of the same code never lose an increment.

#[cfg(test)]
pub mod memory_store;
pub mod mongo_store;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::StoreError;
use crate::models::link::Link;

pub use mongo_store::MongoLinkStore;

#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a fresh link and returns it with its assigned id.
    /// Fails with [`StoreError::DuplicateCode`] if the code is taken.
    async fn insert(&self, link: Link) -> Result<Link, StoreError>;

    /// All links, newest first.
    async fn list(&self) -> Result<Vec<Link>, StoreError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Removes the link and returns what was deleted, `None` if absent.
    async fn delete_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Adds one click and stamps `last_clicked`, in a single atomic update.
    async fn record_click(&self, id: &ObjectId) -> Result<(), StoreError>;
}
