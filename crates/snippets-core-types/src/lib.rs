//! Core types shared across the snippets crates
//!
//! - **Correlation**: `RequestId` for grouping the events of one invocation
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
