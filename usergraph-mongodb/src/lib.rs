//! MongoDB backend implementation for usergraph.
//!
//! This crate provides a MongoDB-based implementation of the `StoreBackend` trait on top
//! of the official async driver.
//!
//! To use this backend, include the `mongodb` feature of the `usergraph` crate (on by
//! default):
//!
//! ```toml
//! [dependencies]
//! usergraph = { version = "x.y.z", features = ["mongodb"] }
//! ```
//!
//! # Features
//!
//! - **Natural order listings** - Unsorted finds with skip and limit
//! - **Atomic partial updates** - `find_one_and_update` with `$set`, returning the updated document
//! - **Idempotent deletes** - Deleting a missing document is acknowledged
//! - **Connectivity check** - `ping` against the `admin` database
//!
//! # Example
//!
//! ```ignore
//! use usergraph_core::backend::{StoreBackend, StoreBackendBuilder};
//! use usergraph_mongodb::MongoDbStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MongoDbStore::builder("mongodb://localhost:27017", "wtf")
//!         .build()
//!         .await?;
//!     store.ping().await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as usergraph_mongodb;

pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
