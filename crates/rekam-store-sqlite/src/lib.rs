//! SQLite backend for the Rekam record store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. That thread's command channel
//! is also the serialisation boundary for the shared connection: concurrent
//! callers queue one statement at a time instead of interleaving.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
