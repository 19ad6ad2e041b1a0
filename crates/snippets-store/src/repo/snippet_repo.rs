//! SQLite repository for snippets

use crate::errors::{from_rusqlite, Result};
use rusqlite::{ffi, Connection, ErrorCode, OptionalExtension};
use snippets_core::Snippet;

/// Outcome of an insert attempt
///
/// A uniqueness conflict is an expected result, not an error: the caller
/// decides how to resolve it. Every other failure comes back as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    UniqueConflict,
}

/// SQLite repository for the `snippets` table
pub struct SnippetRepo;

impl SnippetRepo {
    /// Insert a new snippet row
    ///
    /// Returns `UniqueConflict` when a row with the same name already exists.
    /// The failed statement is aborted on its own, so an enclosing
    /// transaction stays usable.
    pub fn insert(conn: &Connection, name: &str, content: &str) -> Result<InsertOutcome> {
        match conn.execute(
            "INSERT INTO snippets (name, content) VALUES (?1, ?2)",
            rusqlite::params![name, content],
        ) {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(name = name, "insert hit existing name");
                Ok(InsertOutcome::UniqueConflict)
            }
            Err(err) => Err(from_rusqlite(err)),
        }
    }

    /// Replace the content of an existing snippet, returning the rows affected
    pub fn update_content(conn: &Connection, name: &str, content: &str) -> Result<usize> {
        conn.execute(
            "UPDATE snippets SET content = ?2 WHERE name = ?1",
            rusqlite::params![name, content],
        )
        .map_err(from_rusqlite)
    }

    /// Get the content stored under `name`
    pub fn get_content(conn: &Connection, name: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT content FROM snippets WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All snippet names, ordered by name
    pub fn list_names(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare("SELECT name FROM snippets ORDER BY name")
            .map_err(from_rusqlite)?;

        let names = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(from_rusqlite)?;

        Ok(names)
    }

    /// All snippets whose content contains `needle`, ordered by name
    ///
    /// Matching is a literal, case-sensitive substring test (`instr`), so
    /// LIKE wildcards in the needle carry no special meaning. An empty
    /// needle matches every snippet.
    pub fn search_content(conn: &Connection, needle: &str) -> Result<Vec<Snippet>> {
        let mut stmt = conn
            .prepare(
                "SELECT name, content FROM snippets
                 WHERE ?1 = '' OR instr(content, ?1) > 0
                 ORDER BY name",
            )
            .map_err(from_rusqlite)?;

        let snippets = stmt
            .query_map([needle], |row| {
                Ok(Snippet {
                    name: row.get(0)?,
                    content: row.get(1)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(snippets)
    }

    /// Number of rows stored under `name` (0 or 1 while the primary key holds)
    pub fn count_by_name(conn: &Connection, name: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM snippets WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }
}

/// Whether `err` is a primary-key or UNIQUE constraint violation
///
/// Other constraint failures (NOT NULL, CHECK, ...) are not conflicts.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && (e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE)
        }
        _ => false,
    }
}
