//! In-memory document storage backend for usergraph.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It uses async-aware read-write locks for concurrent access and is meant for
//! development and testing.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes using async-aware RwLock
//! - **Natural order** - Listings come back in insertion order, like an unsorted MongoDB find
//! - **Atomic updates** - A `$set` style update runs inside a single write lock
//!
//! # Quick Start
//!
//! ```ignore
//! use usergraph_core::{store::DocumentStore, user::{NewUser, UserRecord}};
//! use usergraph_memory::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DocumentStore::new(InMemoryStore::new());
//!     let users = store.typed_collection::<UserRecord>();
//!
//!     users.insert(NewUser::new(Some("Alice".into()), None)?).await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as usergraph_memory;

pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
