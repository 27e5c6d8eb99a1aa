//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests:
//! - The stylized correction corpus
//! - Custom assertions

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
