//! Validation context and identifier rules for manifest parsing.

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Nested sections push a path segment so error messages can say where a
/// name came from ("route component in 'routes[2]'").
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<String>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &SourceContext {
        self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            source: self.source,
            path,
        }
    }

    /// Get a context description for error messages.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    /// Validate that a name is a usable TypeScript identifier.
    ///
    /// `span` points at the name in the source when it can be located.
    pub fn validate_name(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if is_reserved_word(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }
}

/// TypeScript reserved words that cannot name a class or binding.
pub(crate) const TS_RESERVED_WORDS: &[&str] = &[
    // Reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode reserved words
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield",
    // Contextual, but never valid as a class name in a module
    "await",
];

pub(crate) fn is_reserved_word(name: &str) -> bool {
    TS_RESERVED_WORDS.contains(&name)
}

/// Validate that a name is a TypeScript identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return Some("name must start with a letter, '_' or '$'");
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("name contains invalid characters");
    }

    None
}

/// Find every place `name` is used as a key in the source.
///
/// Matches table headers (`[components.Name]`), dotted keys, inline keys
/// (`Name = ...`) and JSON object keys (`"Name": ...`).
pub(crate) fn find_key_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    if name.is_empty() {
        return Vec::new();
    }

    src.match_indices(name)
        .filter(|(pos, _)| {
            let before = src[..*pos].chars().next_back();
            let after = &src[pos + name.len()..];

            // Table header or dotted key: `[components.Name]`, `components.Name.x`
            if matches!(before, Some('.' | '[')) && (after.starts_with(']') || after.starts_with('.'))
            {
                return true;
            }

            // Bare, quoted or JSON key followed by `=` or `:`
            let opens_key = match before {
                None => true,
                Some(c) => matches!(c, '"' | '\'' | '\n' | ' ' | '\t'),
            };
            let rest = after
                .strip_prefix('"')
                .or_else(|| after.strip_prefix('\''))
                .unwrap_or(after)
                .trim_start_matches([' ', '\t']);
            opens_key && (rest.starts_with('=') || rest.starts_with(':'))
        })
        .map(|(pos, _)| SourceSpan::from((pos, name.len())))
        .collect()
}

/// Find the first place `value` appears as a quoted string.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .filter_map(|pattern| src.find(pattern.as_str()))
        .min()
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("AppComponent"), None);
        assert_eq!(validate_identifier("_private"), None);
        assert_eq!(validate_identifier("$store"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1Component").is_some());
        assert!(validate_identifier("app-component").is_some());
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("interface"));
        assert!(!is_reserved_word("Component"));
    }

    #[test]
    fn test_find_key_spans_in_toml() {
        let src = "[components.AppComponent]\nselector = \"app-root\"\n\n[modules.AppComponent]\n";
        let spans = find_key_spans(src, "AppComponent");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], SourceSpan::from((12, 12)));
    }

    #[test]
    fn test_find_key_spans_ignores_values() {
        let src = "[[routes]]\npath = \"home\"\ncomponent = \"HomeComponent\"\n";
        assert!(find_key_spans(src, "HomeComponent").is_empty());
        assert_eq!(
            find_value_span(src, "HomeComponent"),
            Some(SourceSpan::from((38, 13)))
        );
    }

    #[test]
    fn test_find_key_spans_ignores_list_items() {
        let src = "[modules.AppModule]\ndeclarations = [\"AppComponent\"]\n";
        assert!(find_key_spans(src, "AppComponent").is_empty());
    }

    #[test]
    fn test_find_key_spans_in_json() {
        let src = r#"{"components": {"AppComponent": {"selector": "app-root"}}}"#;
        let spans = find_key_spans(src, "AppComponent");
        assert_eq!(spans, vec![SourceSpan::from((17, 12))]);
    }

    #[test]
    fn test_context_for() {
        let source = SourceContext::new("", "ngwrite.toml");
        let ctx = ParseContext::new(&source);
        assert_eq!(ctx.context_for("component"), "component");
        assert_eq!(
            ctx.push("routes[1]").context_for("route component"),
            "route component in 'routes[1]'"
        );
    }
}
