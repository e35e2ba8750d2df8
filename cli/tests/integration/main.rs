//! Integration tests for the machine CLI
//!
//! These tests spawn the actual binary against a fake `docker-machine`
//! script placed first on `PATH`.

#![cfg(unix)]

mod cli_tests;
