pub mod mem;

use async_trait::async_trait;
use bson::oid::ObjectId;
use serde_json::Value as Json;

use super::ast::{FindOptions, Predicate};
use super::error::StoreError;

pub use mem::InMemoryDocumentStore;

/// Document store that executes compiled predicates.
///
/// Documents are JSON objects whose primary key lives under `_id` as a
/// 24-char hex string. `find` and `count` are independent calls and need
/// not observe the same snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, predicate: &Predicate, options: &FindOptions) -> Result<Vec<Json>, StoreError>;

    async fn count(&self, predicate: &Predicate) -> Result<u64, StoreError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Json>, StoreError>;

    /// Insert a document and return its primary key. A missing `_id` is
    /// generated.
    async fn insert(&self, doc: Json) -> Result<ObjectId, StoreError>;
}
