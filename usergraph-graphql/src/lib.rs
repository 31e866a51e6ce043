//! GraphQL surface of the user service.
//!
//! This crate defines the schema, its resolvers, and the request plumbing around them:
//!
//! - **Schema** ([`schema`]) - `users`, `user`, `userCreate`, `userUpdate`, `userDelete`
//! - **Resolvers** ([`resolvers`]) - One store call per field, reshaped through the identity translator
//! - **Connection provider** ([`provider`]) - Memoized store connection with explicit failures
//! - **Dispatcher** ([`dispatch`]) - Acquires the store and executes a request against the schema
//! - **Errors** ([`error`]) - Error entries carrying a stable `extensions.code`
//!
//! The HTTP transport lives in the `usergraph` binary; this crate only speaks
//! `async_graphql::Request` and `async_graphql::Response`.
//!
//! # Example
//!
//! ```ignore
//! use usergraph_graphql::{ConnectionProvider, Dispatcher, build_schema};
//! use usergraph_memory::InMemoryStore;
//!
//! let dispatcher = Dispatcher::new(
//!     build_schema("users"),
//!     ConnectionProvider::new(InMemoryStore::builder()),
//! );
//! let response = dispatcher.dispatch("{ users { id name } }".into()).await;
//! ```

#[allow(unused_extern_crates)]
extern crate self as usergraph_graphql;

pub mod dispatch;
pub mod error;
pub mod extension;
pub mod provider;
pub mod resolvers;
pub mod schema;
pub mod types;

pub use dispatch::Dispatcher;
pub use provider::ConnectionProvider;
pub use schema::{UserSchema, UsersCollection, build_schema, export_schema_sdl};
