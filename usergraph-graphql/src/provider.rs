//! Process-wide, lazily initialized store connection.

use tokio::sync::OnceCell;
use usergraph_core::{
    backend::{DynStoreBackendBuilder, StoreBackendBuilder},
    error::{DocumentStoreError, UserError, UserResult},
    store::DocumentStore,
};

/// Hands out the store handle, connecting on first use.
///
/// The first successful connection is kept for the lifetime of the provider and every
/// later [`acquire`](ConnectionProvider::acquire) returns a clone of it. A failed attempt
/// is reported as [`UserError::Connection`] and not remembered, so the next call tries
/// again. Concurrent callers during the first connection wait for the same attempt.
pub struct ConnectionProvider {
    builder: Box<dyn DynStoreBackendBuilder>,
    store: OnceCell<DocumentStore>,
}

impl ConnectionProvider {
    pub fn new(builder: impl StoreBackendBuilder + 'static) -> Self {
        Self {
            builder: Box::new(builder),
            store: OnceCell::new(),
        }
    }

    /// Returns the store handle, connecting first if needed.
    pub async fn acquire(&self) -> UserResult<DocumentStore> {
        self.store
            .get_or_try_init(|| self.connect())
            .await
            .cloned()
            .map_err(|err| {
                tracing::error!(error = %err, "failed to connect to the document store");
                UserError::Connection(err)
            })
    }

    /// The handle if a connection has been made.
    pub fn get(&self) -> Option<&DocumentStore> {
        self.store.get()
    }

    async fn connect(&self) -> Result<DocumentStore, DocumentStoreError> {
        let backend = self.builder.build_dyn().await?;
        backend.ping().await?;

        tracing::info!("connected to the document store");

        Ok(DocumentStore::from_shared(backend))
    }
}
