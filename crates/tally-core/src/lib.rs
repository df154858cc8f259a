//! # tally-core
//!
//! Core types and error types for Tally.
//!
//! This crate provides the foundational types shared across all Tally crates:
//! - Board snapshot input types and their structural validation
//! - The tagged `NormalizedValue` cell variant
//! - Cleaned board, record, and quality report artifacts
//! - Column role and board kind enums
//! - Role bindings and grouped summaries
//! - Cross-cutting error types

pub mod board;
pub mod cleaned;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod summary;
pub mod value;
