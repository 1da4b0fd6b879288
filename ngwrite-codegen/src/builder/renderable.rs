//! Nodes that describe themselves as lines of code.
//!
//! AST nodes produce [`CodeFragment`]s; a [`CodeBuilder`](super::CodeBuilder)
//! writes them at its current indentation.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line, indented, newline appended.
    Line(String),
    /// Text written verbatim, already laid out.
    Raw(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }
}

/// Types that can be emitted into a [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
