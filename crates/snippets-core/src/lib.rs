//! Snippets Core - domain model, error facility and logging facility
//!
//! This crate provides:
//! - The `Snippet` model and the `StoreOutcome` returned by a store
//! - Snippet name validation
//! - The canonical structured error type (`ExError`) and domain errors
//! - The logging facility (profiles, `log_op_*` macros, test capture)
//!
//! Persistence lives in `snippets-store`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Used by the exported logging macros
#[doc(hidden)]
pub use snippets_core_types as core_types;

pub use errors::{ExError, ExErrorKind, Result, SnippetError};
pub use model::{Snippet, StoreOutcome};
