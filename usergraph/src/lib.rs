//! GraphQL user service over a thin document store layer.
//!
//! This crate is the entry point of the usergraph workspace. It re-exports the core
//! types from the sub-crates, the storage backends and the GraphQL surface, and hosts
//! the HTTP server the `usergraph` binary runs.
//!
//! # Features
//!
//! - **User CRUD over GraphQL** - `users`, `user`, `userCreate`, `userUpdate`, `userDelete`
//! - **Identifier translation** - Store `_id` object ids surface as string `id`s
//! - **Partial updates** - Only supplied fields change, atomically in the store
//! - **Multiple backends** - MongoDB for real data, in memory for development and tests
//!
//! # Quick Start
//!
//! ```ignore
//! use usergraph::{graphql::{ConnectionProvider, Dispatcher, build_schema}, memory::InMemoryStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dispatcher = Dispatcher::new(
//!         build_schema("users"),
//!         ConnectionProvider::new(InMemoryStore::builder()),
//!     );
//!
//!     let response = dispatcher
//!         .dispatch(r#"mutation { userCreate(input: { name: "Alice" }) { id name } }"#.into())
//!         .await;
//!
//!     println!("{}", serde_json::to_string(&response).unwrap());
//! }
//! ```
//!
//! # Serving
//!
//! [`server::serve`] binds an axum router with `POST /graphql` and, when enabled, the
//! GraphiQL explorer on `GET /graphql`. It returns after Ctrl-C once in-flight requests
//! are done and the store has been shut down.
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage for development and testing
//! - [`mongodb`] - MongoDB backend (requires the `mongodb` feature, on by default)

pub mod prelude;
pub mod server;

pub use usergraph_core::{backend, collection, document, error, identity, query, store, user};

// Re-export BSON types for convenience
pub use bson;

/// GraphQL schema, resolvers and request dispatch.
pub mod graphql {
    pub use usergraph_graphql::{
        ConnectionProvider, Dispatcher, UserSchema, UsersCollection, build_schema, error, export_schema_sdl,
        types,
    };
}

/// In-memory storage backend implementations.
pub mod memory {
    pub use usergraph_memory::{InMemoryStore, InMemoryStoreBuilder};
}

/// MongoDB storage backend implementations.
///
/// This module is only available when the `mongodb` feature is enabled.
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use usergraph_mongodb::{MongoDbStore, MongoDbStoreBuilder};
}
