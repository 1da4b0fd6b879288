//! Core utilities and types for ngwrite.
//!
//! This crate provides the file-writing and naming helpers shared by the
//! generator and the CLI.

mod file;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{expression_identifiers, file_stem, leading_identifier, to_kebab_case};
