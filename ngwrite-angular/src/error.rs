use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning configuration values into source text.
///
/// Only enum-typed keys can fail; every other value has a textual form.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{value} is not a valid {table} ordinal for '{key}'")]
    #[diagnostic(
        code(ngwrite::enum_out_of_range),
        help("use one of: {choices}")
    )]
    EnumOrdinalOutOfRange {
        key: String,
        table: &'static str,
        value: i64,
        choices: String,
    },

    #[error("'{value}' is not a member of {table} (used by '{key}')")]
    #[diagnostic(
        code(ngwrite::unknown_enum_member),
        help("use one of: {choices}")
    )]
    UnknownEnumSymbol {
        key: String,
        table: &'static str,
        value: String,
        choices: String,
    },

    #[error("'{key}' expects a {table} ordinal or member name, found a {found}")]
    #[diagnostic(code(ngwrite::invalid_enum_value))]
    InvalidEnumValue {
        key: String,
        table: &'static str,
        found: &'static str,
    },

    #[error("cannot generate {kind} '{name}'")]
    #[diagnostic(code(ngwrite::class_config))]
    InClass {
        kind: &'static str,
        name: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the class a serialization error came from.
    pub fn in_class(self, kind: &'static str, name: impl Into<String>) -> Self {
        Self::InClass {
            kind,
            name: name.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_class_keeps_cause_in_source_chain() {
        let cause = Error::EnumOrdinalOutOfRange {
            key: "encapsulation".to_string(),
            table: "ViewEncapsulation",
            value: 7,
            choices: "Emulated, Native, None, ShadowDom".to_string(),
        };
        let err = cause.in_class("component", "AppComponent");

        assert_eq!(err.to_string(), "cannot generate component 'AppComponent'");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.to_string(),
            "7 is not a valid ViewEncapsulation ordinal for 'encapsulation'"
        );
        let code = Diagnostic::code(&err).unwrap().to_string();
        assert_eq!(code, "ngwrite::class_config");
    }
}
