//! The writer seam between emitters and whatever collects their output.

/// An indentation-aware sink for generated source text.
///
/// Emitters only ever talk to this trait, so callers can plug in their own
/// writer (a file, a buffer shared with other generators, ...) as long as it
/// keeps track of the current indentation level.
pub trait TextWriter {
    /// Write raw text without indentation or newline.
    fn write(&mut self, text: &str);

    /// Write the indentation for the current level.
    fn write_indent(&mut self);

    /// Terminate the current line.
    fn write_end_of_line(&mut self);

    /// Increase the indentation level by one.
    fn increase_indent(&mut self);

    /// Decrease the indentation level by one. Never goes below zero.
    fn decrease_indent(&mut self);

    /// Write an indented line followed by a newline.
    fn write_line(&mut self, text: &str) {
        self.write_indent();
        self.write(text);
        self.write_end_of_line();
    }

    /// Write a named decorator block: `@name({`, the indented body, `})`.
    ///
    /// The body's error is returned as-is; the closing line is only written
    /// when the body succeeds.
    fn write_decorator_block<E, F>(&mut self, name: &str, body: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.write_line(&format!("@{}({{", name));
        self.increase_indent();
        body(self)?;
        self.decrease_indent();
        self.write_line("})");
        Ok(())
    }
}
