//! Schema migrations
//!
//! SQL files are embedded at compile time, applied in order inside a
//! transaction each, and recorded in `schema_version` with a SHA-256 of
//! their text. Re-running is a no-op; a recorded migration whose text has
//! changed since it was applied is rejected.

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
