/// Quote text as a single-quoted TypeScript string literal.
///
/// Backslashes, single quotes and line breaks are escaped.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(string_literal("app-root"), "'app-root'");
        assert_eq!(string_literal(""), "''");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(string_literal("it's"), r"'it\'s'");
        assert_eq!(string_literal(r"C:\tmp"), r"'C:\\tmp'");
        assert_eq!(string_literal("<h1>\n</h1>"), r"'<h1>\n</h1>'");
        assert_eq!(string_literal("a\r\nb"), r"'a\r\nb'");
    }
}
