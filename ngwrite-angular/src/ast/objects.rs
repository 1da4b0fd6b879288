//! Inline object literal builder.

use super::literal::string_literal;

/// Builder for single-line object literals with quoted keys.
///
/// Keys are always quoted so host bindings such as `(click)` or
/// `[class.active]` stay valid property names.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    entries: Vec<(String, String)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.entries
            .push((key.into(), string_literal(value.as_ref())));
        self
    }

    /// Build the object literal: `{ 'k': v, ... }`, or `{}` when empty.
    pub fn build(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }
        let entries = self
            .entries
            .iter()
            .map(|(k, v)| format!("{}: {}", string_literal(k), v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", entries)
    }
}
