//! Storage backend abstraction for the document store.
//!
//! This module defines the traits that abstract over storage implementations, allowing
//! the document store to run against MongoDB in production and in memory in tests.
//!
//! # Overview
//!
//! The [`StoreBackend`] trait provides one async method per single-document store call
//! (find, find-one, insert-one, update-one, delete-one) plus a connectivity check.
//! Implementations are required to be thread-safe (`Send + Sync`) and the trait is
//! object safe, so handles are passed around as `Arc<dyn StoreBackend>`.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//! - [`DynStoreBackendBuilder`]: A trait for dynamic dispatch over builders
//!
//! # Examples
//!
//! ```ignore
//! use usergraph_core::backend::StoreBackend;
//! use bson::doc;
//!
//! let id = backend.insert_document(doc! { "name": "Alice" }, "users").await?;
//! let found = backend.find_document(id, "users").await?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use bson::oid::ObjectId;
use std::{fmt::Debug, sync::Arc};

use crate::{error::DocumentStoreResult, query::Query};

/// Outcome of a single-document delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Whether the store acknowledged the delete. A delete that matched nothing is
    /// still acknowledged.
    pub acknowledged: bool,
    /// Number of documents removed, 0 or 1.
    pub deleted_count: u64,
}

/// Abstract interface for document storage backends.
///
/// Documents are raw BSON documents keyed by an [`ObjectId`] under `_id`.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from multiple
/// async tasks. No method spans more than one store operation, and none is
/// transactional with respect to any other.
///
/// # Error Handling
///
/// Operations return [`DocumentStoreResult<T>`](crate::error::DocumentStoreResult).
/// A missing document is never an error at this level; methods report it through
/// their return value instead.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Lists documents of a collection in natural insertion order.
    ///
    /// # Arguments
    ///
    /// * `query` - The [`Query`] carrying the offset and limit
    /// * `collection` - The name of the collection to list
    async fn find_documents(
        &self,
        query: Query,
        collection: &str,
    ) -> DocumentStoreResult<Vec<bson::Document>>;

    /// Retrieves the document with the given id, or `None` if there is none.
    async fn find_document(
        &self,
        id: ObjectId,
        collection: &str,
    ) -> DocumentStoreResult<Option<bson::Document>>;

    /// Inserts a new document and returns the identifier assigned to it.
    ///
    /// The backend assigns the identifier when the document has no `_id`.
    async fn insert_document(
        &self,
        document: bson::Document,
        collection: &str,
    ) -> DocumentStoreResult<ObjectId>;

    /// Atomically overwrites the fields in `set` on the document with the given id.
    ///
    /// Fields not present in `set` are left untouched. Returns the document as it is
    /// after the update, or `None` when no document has that id. Nothing is upserted.
    async fn update_document(
        &self,
        id: ObjectId,
        set: bson::Document,
        collection: &str,
    ) -> DocumentStoreResult<Option<bson::Document>>;

    /// Deletes the document with the given id.
    ///
    /// Deleting a document that does not exist is acknowledged with a
    /// `deleted_count` of 0.
    async fn delete_document(&self, id: ObjectId, collection: &str) -> DocumentStoreResult<DeleteOutcome>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> DocumentStoreResult<()>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op, but backends with external connections
    /// should override this.
    async fn shutdown(&self) -> DocumentStoreResult<()> {
        Ok(())
    }
}

/// Factory for a concrete backend.
///
/// Building takes `&self` so that a failed connection attempt can be retried with the
/// same builder.
#[async_trait]
pub trait StoreBackendBuilder: Send + Sync {
    type Backend: StoreBackend + 'static;

    async fn build(&self) -> DocumentStoreResult<Self::Backend>;
}

/// Object safe form of [`StoreBackendBuilder`].
#[async_trait]
pub trait DynStoreBackendBuilder: Send + Sync {
    async fn build_dyn(&self) -> DocumentStoreResult<Arc<dyn StoreBackend>>;
}

#[async_trait]
impl<B: StoreBackendBuilder> DynStoreBackendBuilder for B {
    async fn build_dyn(&self) -> DocumentStoreResult<Arc<dyn StoreBackend>> {
        Ok(Arc::new(self.build().await?))
    }
}
