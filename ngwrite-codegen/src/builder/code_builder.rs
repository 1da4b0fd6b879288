//! In-memory [`TextWriter`] that builds properly indented code.

use super::{CodeFragment, Indent, Renderable, TextWriter};

/// Fluent API for building code with proper indentation.
///
/// `CodeBuilder` is the default [`TextWriter`]: every emitter in the
/// workspace can write into it, and [`Renderable`] nodes can be emitted into
/// it directly.
///
/// # Example
///
/// ```
/// use ngwrite_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export const routes: Routes = [")
///     .push_indent()
///     .push_line("{ path: '', component: HomeComponent },")
///     .push_dedent()
///     .push_line("];");
///
/// assert_eq!(
///     builder.build(),
///     "export const routes: Routes = [\n  { path: '', component: HomeComponent },\n];\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.push_indentation();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Check whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn push_indentation(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl TextWriter for CodeBuilder {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_indent(&mut self) {
        self.push_indentation();
    }

    fn write_end_of_line(&mut self) {
        self.buffer.push('\n');
    }

    fn increase_indent(&mut self) {
        self.push_indent();
    }

    fn decrease_indent(&mut self) {
        self.push_dedent();
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::typescript();
        builder.push_line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("function foo() {")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_wide_indent() {
        let mut builder = CodeBuilder::new(Indent::WIDE);
        builder.push_indent().push_line("x;");
        assert_eq!(builder.build(), "    x;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_dedent();
        assert_eq!(builder.current_indent(), 0);
        builder.push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_text_writer_primitives() {
        let mut builder = CodeBuilder::typescript();
        builder.increase_indent();
        builder.write_indent();
        builder.write("selector: 'app-root'");
        builder.write(",");
        builder.write_end_of_line();
        builder.decrease_indent();
        builder.write_line("done");
        assert_eq!(builder.build(), "  selector: 'app-root',\ndone\n");
    }

    #[test]
    fn test_decorator_block() {
        let mut builder = CodeBuilder::typescript();
        let result: Result<(), ()> = builder.write_decorator_block("Component", |w| {
            w.write_line("selector: 'app-root'");
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(
            builder.build(),
            "@Component({\n  selector: 'app-root'\n})\n"
        );
    }

    #[test]
    fn test_decorator_block_propagates_body_error() {
        let mut builder = CodeBuilder::typescript();
        let result = builder.write_decorator_block("NgModule", |_| Err("boom"));
        assert_eq!(result, Err("boom"));
        assert_eq!(builder.as_str(), "@NgModule({\n");
    }

    #[test]
    fn test_emit_fragments_at_current_indent() {
        struct Entry;
        impl Renderable for Entry {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("{ path: '', component: HomeComponent },"),
                    CodeFragment::raw("  // raw text keeps its own layout\n"),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.push_line("[").push_indent().emit(&Entry).push_dedent().push_line("]");
        assert_eq!(
            builder.build(),
            "[\n  { path: '', component: HomeComponent },\n  // raw text keeps its own layout\n]\n"
        );
    }
}
