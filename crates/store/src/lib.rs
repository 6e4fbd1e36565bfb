//! Document-store boundary and entity persistence.
//!
//! - [`DocumentStore`] -- the key-document store the repositories talk to.
//!   Implementations: [`FirestoreStore`] (production) and [`MemoryStore`]
//!   (deterministic test double). The client is constructed once at
//!   startup and injected; nothing in this crate holds global state.
//! - [`models`] -- entity records and their create/update DTOs.
//! - [`repositories`] -- per-entity CRUD over the store.

pub mod collections;
pub mod firestore;
pub mod memory;
pub mod models;
pub mod repositories;
mod store;

pub use self::firestore::FirestoreStore;
pub use memory::MemoryStore;
pub use store::{Direction, Document, DocumentStore, Query, StoreError};

/// Shared handle to the injected store implementation.
pub type DynStore = std::sync::Arc<dyn DocumentStore>;
