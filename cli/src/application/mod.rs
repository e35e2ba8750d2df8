//! Application layer — machine operations written against ports.
//!
//! Imports only from `crate::domain` and its own `ports`; infrastructure is
//! injected by the caller.

pub mod handle;
pub mod ports;
pub mod services;
