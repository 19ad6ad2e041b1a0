//! Snippet store: the operations exposed to callers, with boundary logging
//!
//! ## Logging Ownership
//!
//! Each public operation emits `log_op_start!` on entry and exactly one of
//! `log_op_end!` / `log_op_error!` on exit. `SnippetRepo` below it only
//! logs at debug level.

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use crate::repo::{InsertOutcome, SnippetRepo};
use rusqlite::{Connection, TransactionBehavior};
use snippets_core::errors::{ExError, ExErrorKind};
use snippets_core::{log_op_end, log_op_error, log_op_start, Snippet, StoreOutcome};
use std::path::Path;
use std::time::Instant;

/// Name-addressed snippet storage backed by one SQLite connection
///
/// The store owns its connection for its whole lifetime. Every operation
/// scopes its own unit of work, so an error in one call never leaves a
/// transaction open for the next.
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open (or create) the database at `path` and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// Open a private in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, applying pending migrations
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Read access to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Store `content` under `name`, creating the snippet or replacing its content
    ///
    /// A create is attempted first; if the name already exists the create
    /// is discarded and the existing row updated instead. Both statements
    /// run in one IMMEDIATE transaction, which takes the write lock before
    /// the create, so a concurrent writer cannot slip in between them.
    /// Any text is a valid name, the empty string included.
    ///
    /// # Errors
    ///
    /// `Persistence` for any database failure other than the name conflict.
    pub fn store(&mut self, name: &str, content: &str) -> Result<StoreOutcome> {
        log_op_start!("store", name = name, content_len = content.len());
        let start = Instant::now();

        let outcome = self.store_impl(name, content).map_err(|e| {
            let e = e.with_op("store").with_name(name);
            log_op_error!(
                "store",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                name = name
            );
            e
        })?;

        log_op_end!(
            "store",
            duration_ms = start.elapsed().as_millis() as u64,
            name = name,
            created = outcome.created
        );

        Ok(outcome)
    }

    fn store_impl(&mut self, name: &str, content: &str) -> Result<StoreOutcome> {
        // Rolled back on drop if anything below returns early
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite)?;

        let created = match SnippetRepo::insert(&tx, name, content)? {
            InsertOutcome::Inserted => true,
            InsertOutcome::UniqueConflict => {
                let updated = SnippetRepo::update_content(&tx, name, content)?;
                if updated != 1 {
                    return Err(ExError::new(ExErrorKind::Persistence).with_message(format!(
                        "insert reported a conflict but update touched {} rows",
                        updated
                    )));
                }
                false
            }
        };

        tx.commit().map_err(from_rusqlite)?;

        let snippet = Snippet::new(name, content);
        Ok(if created {
            StoreOutcome::created(snippet)
        } else {
            StoreOutcome::updated(snippet)
        })
    }

    /// Retrieve the content stored under `name`
    ///
    /// A missing snippet is `Ok(None)`, not an error.
    pub fn retrieve(&self, name: &str) -> Result<Option<String>> {
        log_op_start!("retrieve", name = name);
        let start = Instant::now();

        let content = SnippetRepo::get_content(&self.conn, name).map_err(|e| {
            let e = e.with_op("retrieve").with_name(name);
            log_op_error!(
                "retrieve",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                name = name
            );
            e
        })?;

        log_op_end!(
            "retrieve",
            duration_ms = start.elapsed().as_millis() as u64,
            name = name,
            found = content.is_some()
        );

        Ok(content)
    }

    /// Names of all stored snippets, in name order
    pub fn list_names(&self) -> Result<Vec<String>> {
        log_op_start!("list_names");
        let start = Instant::now();

        let names = SnippetRepo::list_names(&self.conn).map_err(|e| {
            let e = e.with_op("list_names");
            log_op_error!(
                "list_names",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "list_names",
            duration_ms = start.elapsed().as_millis() as u64,
            result_len = names.len()
        );

        Ok(names)
    }

    /// Every snippet whose content contains `substring`, in name order
    pub fn search(&self, substring: &str) -> Result<Vec<Snippet>> {
        log_op_start!("search", query = substring);
        let start = Instant::now();

        let hits = SnippetRepo::search_content(&self.conn, substring).map_err(|e| {
            let e = e.with_op("search");
            log_op_error!(
                "search",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                query = substring
            );
            e
        })?;

        log_op_end!(
            "search",
            duration_ms = start.elapsed().as_millis() as u64,
            query = substring,
            result_len = hits.len()
        );

        Ok(hits)
    }
}
