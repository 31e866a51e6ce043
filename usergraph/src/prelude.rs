//! Convenient re-exports of commonly used types from usergraph.
//!
//! ```ignore
//! use usergraph::prelude::*;
//! ```

pub use usergraph_core::{
    backend::{DeleteOutcome, StoreBackend, StoreBackendBuilder},
    collection::TypedCollection,
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult, InvalidIdentifier, UserError, UserResult},
    identity::IdentityTranslator,
    query::{Query, QueryBuilder},
    store::DocumentStore,
    user::{NewUser, User, UserPatch, UserRecord},
};
pub use usergraph_graphql::{ConnectionProvider, Dispatcher, UserSchema, build_schema};
