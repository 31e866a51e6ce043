//! Typed access to a single collection.
//!
//! A [`TypedCollection`] wraps a backend reference and a collection name, converting
//! raw BSON documents to and from a [`Document`] type on every call. Each method issues
//! exactly one backend operation.
//!
//! # Example
//!
//! ```ignore
//! use usergraph_core::{store::DocumentStore, user::{NewUser, UserRecord}};
//!
//! let users = store.typed_collection::<UserRecord>();
//! let alice = users.insert(NewUser::new(Some("Alice".into()), None)?).await?;
//! let found = users.get(alice.id).await?;
//! ```

use bson::oid::ObjectId;
use std::marker::PhantomData;

use crate::{
    backend::{DeleteOutcome, StoreBackend},
    document::Document,
    error::DocumentStoreResult,
    query::Query,
};

/// A collection of `D` records on a dynamically dispatched backend.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the backend reference
/// * `D` - The record type
#[derive(Debug)]
pub struct TypedCollection<'a, D: Document> {
    name: String,
    backend: &'a dyn StoreBackend,
    _marker: PhantomData<D>,
}

impl<'a, D: Document> TypedCollection<'a, D> {
    /// Creates a new typed collection reference (internal use).
    pub(crate) fn new(name: String, backend: &'a dyn StoreBackend) -> Self {
        Self { name, backend, _marker: PhantomData }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lists records in natural insertion order, narrowed by `query`.
    ///
    /// Each stored document converts into `D` on its own, so one malformed document
    /// only fails its own entry.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentStoreError`](crate::error::DocumentStoreError) if the query fails.
    pub async fn query(&self, query: Query) -> DocumentStoreResult<Vec<DocumentStoreResult<D>>> {
        Ok(self.backend
            .find_documents(query, self.name())
            .await?
            .into_iter()
            .map(D::try_from)
            .collect())
    }

    /// Retrieves the record with the given id. A missing record is `Ok(None)`.
    pub async fn get(&self, id: ObjectId) -> DocumentStoreResult<Option<D>> {
        self.backend
            .find_document(id, self.name())
            .await?
            .map(D::try_from)
            .transpose()
    }

    /// Inserts a new record built from `fields` and returns it with its assigned id.
    pub async fn insert(&self, fields: impl Into<bson::Document>) -> DocumentStoreResult<D> {
        let mut document = fields.into();
        let id = self.backend
            .insert_document(document.clone(), self.name())
            .await?;

        document.insert("_id", id);
        D::try_from(document)
    }

    /// Overwrites the fields in `set` on the record with the given id.
    ///
    /// Returns the merged record, or `Ok(None)` when no record has that id.
    pub async fn update(&self, id: ObjectId, set: bson::Document) -> DocumentStoreResult<Option<D>> {
        self.backend
            .update_document(id, set, self.name())
            .await?
            .map(D::try_from)
            .transpose()
    }

    /// Deletes the record with the given id.
    pub async fn delete(&self, id: ObjectId) -> DocumentStoreResult<DeleteOutcome> {
        self.backend
            .delete_document(id, self.name())
            .await
    }
}
