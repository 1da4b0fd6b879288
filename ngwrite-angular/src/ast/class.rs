use ngwrite_codegen::{CodeFragment, Renderable};

/// An exported class declaration with an empty body.
///
/// The decorator is written separately, directly above it.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("export class {} {{}}", self.name))]
    }
}
