//! Code generation building blocks.
//!
//! - [`TextWriter`] - The writer abstraction emitters are generic over
//! - [`CodeBuilder`] - In-memory writer with configurable indentation
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for nodes that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;
mod writer;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use writer::TextWriter;
