use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::errors::StoreError;
use crate::models::link::Link;
use crate::store::LinkStore;

const LINKS_COLLECTION: &str = "links";
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone, Debug)]
pub struct MongoLinkStore {
    db: Database,
    links: Collection<Link>,
}

impl MongoLinkStore {
    pub fn new(db: Database) -> Self {
        let links = db.collection::<Link>(LINKS_COLLECTION);
        Self { db, links }
    }

    /// Creates the unique index on `code`. Safe to call on every startup.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(
                IndexOptions::builder()
                    .name("links_code_unique".to_string())
                    .unique(true)
                    .build(),
            )
            .build();
        self.links.create_index(index).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl LinkStore for MongoLinkStore {
    async fn insert(&self, mut link: Link) -> Result<Link, StoreError> {
        let result = self.links.insert_one(&link).await.map_err(|e| {
            if is_duplicate_key(&e) {
                StoreError::DuplicateCode(link.code.clone())
            } else {
                StoreError::Database(e)
            }
        })?;

        match result.inserted_id {
            Bson::ObjectId(id) => link.id = Some(id),
            other => {
                return Err(StoreError::Corrupt(format!(
                    "unexpected inserted id {} for code {}",
                    other, link.code
                )));
            }
        }

        Ok(link)
    }

    async fn list(&self) -> Result<Vec<Link>, StoreError> {
        let links = self
            .links
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?
            .try_collect::<Vec<Link>>()
            .await?;
        Ok(links)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.find_one(doc! { "code": code }).await?)
    }

    async fn delete_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.find_one_and_delete(doc! { "code": code }).await?)
    }

    async fn record_click(&self, id: &ObjectId) -> Result<(), StoreError> {
        let now = chrono::Utc::now().timestamp_millis();
        self.links
            .update_one(
                doc! { "_id": *id },
                doc! {
                    "$inc": { "clicks": 1_i64 },
                    "$set": { "last_clicked": now },
                },
            )
            .await?;
        Ok(())
    }
}
