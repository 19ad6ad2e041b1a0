//! Statement-level data access
//!
//! Each function issues one statement against the connection (or
//! transaction) it is given. Lifecycle logging is owned by `SnippetStore`;
//! this layer only emits `tracing::debug!`.

pub mod snippet_repo;

pub use snippet_repo::{InsertOutcome, SnippetRepo};
