//! Display models for CLI output
//!
//! This module converts API response types into the rows and documents that
//! the output layer prints.

pub mod display;
