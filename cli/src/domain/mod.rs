//! Domain layer — pure parsing, argument building and error types.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod classify;
pub mod create;
pub mod env;
pub mod error;
pub mod keys;
pub mod listing;

pub use classify::{AlreadyPattern, ErrorClass, classify};
pub use error::{MachineError, MachineResult, ProcessError};
pub use listing::{LIST_COLUMNS, MachineRecord};
