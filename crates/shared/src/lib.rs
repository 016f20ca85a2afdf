//! Shared utilities and common types for the MK Events backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Record id generation
//! - Calendar date helpers used in export file names
//! - Common validation logic

pub mod dates;
pub mod ids;
pub mod validation;
