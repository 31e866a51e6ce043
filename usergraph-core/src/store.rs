//! Cloneable handle to a connected document store.
//!
//! A [`DocumentStore`] owns a shared reference to a backend. Cloning it is cheap and
//! every clone talks to the same backend, which is what a request-scoped context holds.
//!
//! # Example
//!
//! ```ignore
//! use usergraph_core::{store::DocumentStore, user::UserRecord};
//!
//! let store = DocumentStore::new(backend);
//! let users = store.typed_collection::<UserRecord>();
//! ```

use std::sync::Arc;

use crate::{
    backend::StoreBackend,
    collection::TypedCollection,
    document::Document,
    error::DocumentStoreResult,
};

/// A document store bound to a dynamically dispatched backend.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    backend: Arc<dyn StoreBackend>,
}

impl DocumentStore {
    /// Creates a new document store with the given backend.
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Creates a document store over an already shared backend.
    pub fn from_shared(backend: Arc<dyn StoreBackend>) -> Self {
        Self { backend }
    }

    /// Gets a typed collection under the record type's default collection name.
    pub fn typed_collection<D: Document>(&self) -> TypedCollection<'_, D> {
        TypedCollection::new(D::collection_name().to_string(), self.backend.as_ref())
    }

    /// Gets a typed collection under an explicit collection name.
    pub fn typed_collection_named<D: Document>(&self, name: &str) -> TypedCollection<'_, D> {
        TypedCollection::new(name.to_string(), self.backend.as_ref())
    }

    /// Checks that the backend is reachable.
    pub async fn ping(&self) -> DocumentStoreResult<()> {
        self.backend.ping().await
    }

    /// Shuts down the backend and releases its resources.
    pub async fn shutdown(&self) -> DocumentStoreResult<()> {
        self.backend.shutdown().await
    }
}
