//! TypeScript array literal builder.

use super::literal::string_literal;

/// An element in an array literal.
#[derive(Debug, Clone)]
enum ArrayElement {
    /// Quoted as a string literal.
    String(String),
    /// Written as-is.
    Raw(String),
}

/// Builder for single-line array literals.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<ArrayElement>,
}

impl JsArray {
    /// Create an array of string literals.
    pub fn from_strings<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter
                .into_iter()
                .map(|s| ArrayElement::String(s.into()))
                .collect(),
        }
    }

    /// Create an array of bare expressions.
    pub fn from_raw<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter
                .into_iter()
                .map(|s| ArrayElement::Raw(s.into()))
                .collect(),
        }
    }

    /// Build the array literal as a string.
    pub fn build(&self) -> String {
        let elements = self
            .elements
            .iter()
            .map(|e| match e {
                ArrayElement::String(s) => string_literal(s),
                ArrayElement::Raw(s) => s.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array() {
        assert_eq!(JsArray::default().build(), "[]");
        assert_eq!(JsArray::from_raw(Vec::<String>::new()).build(), "[]");
    }

    #[test]
    fn test_string_array() {
        let arr = JsArray::from_strings(["./a.css", "it's.css"]).build();
        assert_eq!(arr, "['./a.css', 'it\\'s.css']");
    }

    #[test]
    fn test_raw_array() {
        let arr = JsArray::from_raw(["BrowserModule", "RouterModule.forRoot(routes)"]).build();
        assert_eq!(arr, "[BrowserModule, RouterModule.forRoot(routes)]");
    }
}
