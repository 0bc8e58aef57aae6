//! Core types and trait definitions for the Rekam record service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// The store trait returns `impl Future + Send` so it can be used in
// multi-threaded async runtimes. Suppress the advisory lint about `Send`
// bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod classify;
pub mod error;
pub mod record;
pub mod store;
pub mod timestamp;

pub use error::{Error, Result};
