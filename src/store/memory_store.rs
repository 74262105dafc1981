//! In-memory [`LinkStore`] used by the route tests.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::link::Link;
use crate::store::LinkStore;

#[derive(Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert(&self, mut link: Link) -> Result<Link, StoreError> {
        let mut links = self.links.write().await;
        if links.contains_key(&link.code) {
            return Err(StoreError::DuplicateCode(link.code));
        }
        link.id = Some(ObjectId::new());
        links.insert(link.code.clone(), link.clone());
        Ok(link)
    }

    async fn list(&self) -> Result<Vec<Link>, StoreError> {
        let mut links: Vec<Link> = self.links.read().await.values().cloned().collect();
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.map(|id| id.bytes()).cmp(&a.id.map(|id| id.bytes())))
        });
        Ok(links)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn delete_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.write().await.remove(code))
    }

    async fn record_click(&self, id: &ObjectId) -> Result<(), StoreError> {
        let mut links = self.links.write().await;
        if let Some(link) = links.values_mut().find(|l| l.id.as_ref() == Some(id)) {
            link.clicks += 1;
            link.last_clicked = Some(chrono::Utc::now().timestamp_millis());
        }
        Ok(())
    }
}
