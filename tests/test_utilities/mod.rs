//! Shared helpers for integration tests
#![allow(dead_code)]

#[cfg(unix)]
pub mod fake_otool;
pub mod mocks;
