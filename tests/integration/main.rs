//! Integration tests for `fluent-scope`.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;
mod scoped;
