//! Test helpers module
//!
//! This module provides utilities and helpers for testing the EduLMS client:
//! context setup over memory or file storage and seeded test data.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
