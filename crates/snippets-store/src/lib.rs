//! Snippets Store - SQLite persistence for snippets
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed schema migrations
//! - `SnippetRepo`: statement-level data access with typed conflict classification
//! - `SnippetStore`: the store / retrieve / list / search operations

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod store;

// Re-export key types
pub use errors::Result;
pub use repo::{InsertOutcome, SnippetRepo};
pub use store::SnippetStore;
