//! Command implementations

pub mod create;
pub mod env;
pub mod inspect;
pub mod lifecycle;
pub mod ls;
pub mod ssh;
