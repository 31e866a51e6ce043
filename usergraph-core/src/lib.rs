//! Core types for a user service on top of a document store.
//!
//! This crate provides:
//!
//! - **Records** ([`user`]) - The stored and external shapes of a user, and its merge-patch
//! - **Identity translation** ([`identity`]) - Mapping between `_id` object ids and external `id` strings
//! - **Document traits** ([`document`]) - The contract for typed records
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Queries** ([`query`]) - Offset and limit over natural order
//! - **Collections interface** ([`collection`]) - Typed single-operation access to a collection
//! - **Document store** ([`store`]) - Shared handle to a connected backend
//! - **Error handling** ([`error`]) - Store faults and the client-facing error taxonomy
//!
//! # Example
//!
//! ```ignore
//! use usergraph_core::{identity::IdentityTranslator, store::DocumentStore, user::{NewUser, UserRecord}};
//!
//! let store = DocumentStore::new(backend);
//! let record = store
//!     .typed_collection::<UserRecord>()
//!     .insert(NewUser::new(Some("Alice".into()), None)?)
//!     .await?;
//! let user = IdentityTranslator::to_external(record);
//! ```

#[allow(unused_extern_crates)]
extern crate self as usergraph_core;

pub mod backend;
pub mod collection;
pub mod document;
pub mod error;
pub mod identity;
pub mod query;
pub mod store;
pub mod user;
