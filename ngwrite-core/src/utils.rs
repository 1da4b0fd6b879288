//! Shared naming helpers for generated files.

/// Convert a string to kebab-case (e.g., "HeroDetail" -> "hero-detail").
///
/// Runs of capitals are kept together, so "HTTPClient" becomes "http-client".
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('-') {
                result.push('-');
            }
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// File stem for a class, following the Angular style guide.
///
/// The kind suffix is dropped from the class name before converting:
/// `("HeroDetailComponent", "component")` -> `"hero-detail.component"`.
pub fn file_stem(class_name: &str, kind: &str) -> String {
    let suffix_len = kind.len();
    let split = class_name.len().saturating_sub(suffix_len);
    let base = if class_name.len() > suffix_len
        && class_name.is_char_boundary(split)
        && class_name[split..].eq_ignore_ascii_case(kind)
    {
        &class_name[..split]
    } else {
        class_name
    };
    format!("{}.{}", to_kebab_case(base), kind)
}

/// The identifier an expression starts with.
///
/// `provideRouter(routes)` -> `provideRouter`, `RouterModule.forRoot(routes)`
/// -> `RouterModule`. Returns `None` when the expression does not start with
/// an identifier.
pub fn leading_identifier(expr: &str) -> Option<&str> {
    let expr = expr.trim_start();
    let end = expr
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$'))
        .map(|(i, _)| i)
        .unwrap_or(expr.len());
    let ident = &expr[..end];
    match ident.chars().next() {
        Some(c) if !c.is_ascii_digit() => Some(ident),
        _ => None,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Literal keywords that look like identifiers but never need an import.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "true", "false", "null", "undefined", "new", "this", "typeof", "void",
];

/// Free identifiers referenced by an expression, in order of appearance.
///
/// Member names (`forRoot` in `RouterModule.forRoot`), object keys
/// (`provide` in `{ provide: A }`), string contents and keywords are skipped.
/// A spread (`...SHARED`) and both branches of a conditional are references.
/// Duplicates are kept.
pub fn expression_identifiers(expr: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = expr.char_indices().collect();
    let mut idents = Vec::new();
    let mut prev_significant: Option<char> = None;
    // Length of the run of '.' right before the current position.
    let mut dots = 0;
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if matches!(c, '\'' | '"' | '`') {
            i += 1;
            while i < chars.len() && chars[i].1 != c {
                if chars[i].1 == '\\' {
                    i += 1;
                }
                i += 1;
            }
            i += 1;
            prev_significant = Some(c);
            dots = 0;
            continue;
        }

        if !is_identifier_char(c) {
            if c == '.' {
                dots += 1;
            } else if !c.is_whitespace() {
                dots = 0;
            }
            if !c.is_whitespace() {
                prev_significant = Some(c);
            }
            i += 1;
            continue;
        }

        let mut j = i;
        while j < chars.len() && is_identifier_char(chars[j].1) {
            j += 1;
        }
        let end = chars.get(j).map(|(pos, _)| *pos).unwrap_or(expr.len());
        let token = &expr[start..end];

        let is_member = prev_significant == Some('.') && dots == 1;
        let is_key = matches!(prev_significant, None | Some('{' | ','))
            && expr[end..].trim_start().starts_with(':');
        let is_number = c.is_ascii_digit();
        if !(is_member || is_key || is_number || EXPRESSION_KEYWORDS.contains(&token)) {
            idents.push(token);
        }

        prev_significant = chars.get(j - 1).map(|(_, c)| *c);
        dots = 0;
        i = j;
    }

    idents
}
