//! TypeScript builders for the pieces of a generated Angular file.
//!
//! Literal builders return strings; statement builders implement
//! [`Renderable`](ngwrite_codegen::Renderable) so they can be emitted into a
//! [`CodeBuilder`](ngwrite_codegen::CodeBuilder).

mod arrays;
mod class;
mod imports;
mod literal;
mod objects;

pub use arrays::JsArray;
pub use class::Class;
pub use imports::Import;
pub use literal::string_literal;
pub use objects::JsObject;
