//! In-memory storage implementation for document stores.
//!
//! This module provides a simple in-memory backend that stores documents as BSON
//! documents in per-collection vectors behind async-safe read-write locks. Vectors keep
//! insertion order, which is the natural order listings are returned in.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;
use bson::{Bson, Document, oid::ObjectId};

use usergraph_core::{
    backend::{DeleteOutcome, StoreBackend, StoreBackendBuilder},
    error::{DocumentStoreError, DocumentStoreResult},
    query::Query,
};

type CollectionRows = Vec<Document>;
type StoreMap = HashMap<String, CollectionRows>;


/// Thread-safe in-memory document storage backend.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, allowing
/// it to be safely shared across async tasks. Multiple clones of the same instance
/// share the same underlying data.
///
/// # Performance
///
/// Lookups by id scan the collection. This backend is meant for development and
/// tests; use the MongoDB backend for real data.
///
/// # Example
///
/// ```ignore
/// use usergraph_memory::InMemoryStore;
/// use usergraph_core::backend::StoreBackend;
/// use bson::doc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     let id = store.insert_document(doc! { "name": "Alice" }, "users").await?;
///     let found = store.find_document(id, "users").await?;
///     assert!(found.is_some());
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// collection_name -> documents in insertion order
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(stored)) if stored == id)
}


#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn find_documents(&self, query: Query, collection: &str) -> DocumentStoreResult<Vec<Document>> {
        let store = self.store.read().await;
        let rows = match store.get(collection) {
            Some(rows) => rows,
            None => return Ok(vec![]),
        };

        Ok(
            rows
                .iter()
                .skip(query.offset.unwrap_or(0))
                .take(query.limit.unwrap_or(usize::MAX))
                .cloned()
                .collect()
        )
    }

    async fn find_document(&self, id: ObjectId, collection: &str) -> DocumentStoreResult<Option<Document>> {
        let store = self.store.read().await;

        Ok(
            store
                .get(collection)
                .and_then(|rows| rows.iter().find(|doc| has_id(doc, &id)))
                .cloned()
        )
    }

    async fn insert_document(&self, document: Document, collection: &str) -> DocumentStoreResult<ObjectId> {
        let id = match document.get("_id") {
            Some(Bson::ObjectId(id)) => *id,
            Some(_) => return Err(DocumentStoreError::InvalidDocument("_id must be an object id".into())),
            None => ObjectId::new(),
        };

        let mut store = self.store.write().await;
        let rows = store
            .entry(collection.to_string())
            .or_default();

        if rows.iter().any(|doc| has_id(doc, &id)) {
            return Err(DocumentStoreError::Backend(format!("duplicate _id {id} in collection {collection}")));
        }

        // _id leads, as it does in documents the driver assigns ids to
        let mut row = Document::new();
        row.insert("_id", id);
        for (key, value) in document {
            if key != "_id" {
                row.insert(key, value);
            }
        }
        rows.push(row);

        tracing::debug!(%id, collection, "inserted document");

        Ok(id)
    }

    async fn update_document(&self, id: ObjectId, set: Document, collection: &str) -> DocumentStoreResult<Option<Document>> {
        if set.contains_key("_id") {
            return Err(DocumentStoreError::InvalidDocument("_id cannot be updated".into()));
        }

        let mut store = self.store.write().await;
        let row = match store
            .get_mut(collection)
            .and_then(|rows| rows.iter_mut().find(|doc| has_id(doc, &id)))
        {
            Some(row) => row,
            None => return Ok(None),
        };

        for (key, value) in set {
            row.insert(key, value);
        }

        Ok(Some(row.clone()))
    }

    async fn delete_document(&self, id: ObjectId, collection: &str) -> DocumentStoreResult<DeleteOutcome> {
        let mut store = self.store.write().await;
        let deleted_count = match store.get_mut(collection) {
            Some(rows) => {
                let before = rows.len();
                rows.retain(|doc| !has_id(doc, &id));
                (before - rows.len()) as u64
            }
            None => 0,
        };

        Ok(DeleteOutcome { acknowledged: true, deleted_count })
    }

    async fn ping(&self) -> DocumentStoreResult<()> {
        Ok(())
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
///
/// By default every build yields a fresh, empty store. Use [`InMemoryStoreBuilder::shared`]
/// to hand out clones of an existing store instead, e.g. one seeded by a test.
///
/// # Example
///
/// ```ignore
/// use usergraph_memory::InMemoryStore;
/// use usergraph_core::backend::StoreBackendBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryStore::builder().build().await.unwrap();
/// }
/// ```
#[derive(Default, Debug, Clone)]
pub struct InMemoryStoreBuilder {
    shared: Option<InMemoryStore>,
}

impl InMemoryStoreBuilder {
    /// Makes every build return a clone of `store`.
    pub fn shared(mut self, store: InMemoryStore) -> Self {
        self.shared = Some(store);
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns an [`InMemoryStore`]. This always succeeds.
    async fn build(&self) -> DocumentStoreResult<Self::Backend> {
        Ok(self.shared.clone().unwrap_or_default())
    }
}
