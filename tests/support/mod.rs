//! Shared helpers for binary-level tests

pub mod harness;
