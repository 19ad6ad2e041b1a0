//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Operation boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for asserting on emitted events
//!
//! # Usage
//!
//! ```rust
//! use snippets_core::logging_facility::{init, Profile};
//!
//! // Once, at process start
//! init(Profile::Development);
//! ```
//!
//! The component that owns an operation (the snippet store) emits exactly one
//! start event and one end or end_error event for it. Lower layers use
//! `tracing::debug!` only.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
