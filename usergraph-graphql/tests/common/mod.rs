#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_graphql::Request;
use async_trait::async_trait;
use bson::{Document, oid::ObjectId};
use serde_json::Value;
use usergraph_core::{
    backend::{DeleteOutcome, StoreBackend, StoreBackendBuilder},
    error::{DocumentStoreError, DocumentStoreResult},
    query::Query,
};
use usergraph_graphql::{ConnectionProvider, Dispatcher, build_schema};
use usergraph_memory::InMemoryStore;

pub const USERS: &str = "users";

pub fn dispatcher(store: &InMemoryStore) -> Dispatcher {
    Dispatcher::new(
        build_schema(USERS),
        ConnectionProvider::new(InMemoryStore::builder().shared(store.clone())),
    )
}

pub async fn execute(dispatcher: &Dispatcher, query: impl Into<String>) -> Value {
    let response = dispatcher.dispatch(Request::new(query)).await;

    serde_json::to_value(&response).unwrap()
}

pub fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|error| error["extensions"]["code"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub async fn seed(store: &InMemoryStore, document: Document) -> ObjectId {
    store.insert_document(document, USERS).await.unwrap()
}

/// In-memory backend that counts every store call made through it.
#[derive(Debug, Clone, Default)]
pub struct CountingStore {
    pub inner: InMemoryStore,
    pub calls: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreBackend for CountingStore {
    async fn find_documents(&self, query: Query, collection: &str) -> DocumentStoreResult<Vec<Document>> {
        self.hit();
        self.inner.find_documents(query, collection).await
    }

    async fn find_document(&self, id: ObjectId, collection: &str) -> DocumentStoreResult<Option<Document>> {
        self.hit();
        self.inner.find_document(id, collection).await
    }

    async fn insert_document(&self, document: Document, collection: &str) -> DocumentStoreResult<ObjectId> {
        self.hit();
        self.inner.insert_document(document, collection).await
    }

    async fn update_document(&self, id: ObjectId, set: Document, collection: &str) -> DocumentStoreResult<Option<Document>> {
        self.hit();
        self.inner.update_document(id, set, collection).await
    }

    async fn delete_document(&self, id: ObjectId, collection: &str) -> DocumentStoreResult<DeleteOutcome> {
        self.hit();
        self.inner.delete_document(id, collection).await
    }

    async fn ping(&self) -> DocumentStoreResult<()> {
        self.inner.ping().await
    }
}

#[async_trait]
impl StoreBackendBuilder for CountingStore {
    type Backend = CountingStore;

    async fn build(&self) -> DocumentStoreResult<Self::Backend> {
        Ok(self.clone())
    }
}

/// Builder that fails the first `failures` attempts, then connects to `store`.
#[derive(Debug, Clone, Default)]
pub struct FlakyBuilder {
    pub store: InMemoryStore,
    pub failures: usize,
    pub attempts: Arc<AtomicUsize>,
}

impl FlakyBuilder {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreBackendBuilder for FlakyBuilder {
    type Backend = InMemoryStore;

    async fn build(&self) -> DocumentStoreResult<Self::Backend> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);

        if attempt < self.failures {
            return Err(DocumentStoreError::Initialization("connection refused (127.0.0.1:27017)".into()));
        }

        Ok(self.store.clone())
    }
}

/// In-memory backend whose listings always fail.
#[derive(Debug, Clone, Default)]
pub struct BrokenListingStore {
    pub inner: InMemoryStore,
}

#[async_trait]
impl StoreBackend for BrokenListingStore {
    async fn find_documents(&self, _query: Query, _collection: &str) -> DocumentStoreResult<Vec<Document>> {
        Err(DocumentStoreError::Backend("cursor 8812 not found on 10.0.0.4".into()))
    }

    async fn find_document(&self, id: ObjectId, collection: &str) -> DocumentStoreResult<Option<Document>> {
        self.inner.find_document(id, collection).await
    }

    async fn insert_document(&self, document: Document, collection: &str) -> DocumentStoreResult<ObjectId> {
        self.inner.insert_document(document, collection).await
    }

    async fn update_document(&self, id: ObjectId, set: Document, collection: &str) -> DocumentStoreResult<Option<Document>> {
        self.inner.update_document(id, set, collection).await
    }

    async fn delete_document(&self, id: ObjectId, collection: &str) -> DocumentStoreResult<DeleteOutcome> {
        self.inner.delete_document(id, collection).await
    }

    async fn ping(&self) -> DocumentStoreResult<()> {
        self.inner.ping().await
    }
}

#[async_trait]
impl StoreBackendBuilder for BrokenListingStore {
    type Backend = BrokenListingStore;

    async fn build(&self) -> DocumentStoreResult<Self::Backend> {
        Ok(self.clone())
    }
}
