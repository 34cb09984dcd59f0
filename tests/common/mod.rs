//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory store implementations with the same contracts as the
//!   Mongo-backed ones
//! - Test server construction over the full router
//! - Register/login walkthroughs and session cookie handling
#![allow(dead_code)]

pub mod helpers;
pub mod memory;

// Re-export commonly used utilities
pub use helpers::*;
pub use memory::*;
