//! Text writing primitives for ngwrite.
//!
//! This crate is language-agnostic: it knows about lines, indentation and
//! blocks, not about Angular.
//!
//! # Module Organization
//!
//! - [`builder`] - The [`TextWriter`] seam, its [`CodeBuilder`] implementation and [`CodeFragment`]s
//! - [`imports`] - Insertion-ordered import bookkeeping

pub mod builder;
pub mod imports;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable, TextWriter};
pub use imports::ImportCollector;
