//! Fixed ordinal-to-symbol tables for enum-typed keys.

use ngwrite_manifest::ConfigValue;

use crate::{Error, Result};

/// A framework enum: its type name and member names in ordinal order.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumTable {
    name: &'static str,
    symbols: &'static [&'static str],
}

/// `ChangeDetectionStrategy` from `@angular/core`.
pub static CHANGE_DETECTION_STRATEGY: EnumTable =
    EnumTable::new("ChangeDetectionStrategy", &["OnPush", "Default"]);

/// `ViewEncapsulation` from `@angular/core`.
pub static VIEW_ENCAPSULATION: EnumTable =
    EnumTable::new("ViewEncapsulation", &["Emulated", "Native", "None", "ShadowDom"]);

impl EnumTable {
    pub const fn new(name: &'static str, symbols: &'static [&'static str]) -> Self {
        Self { name, symbols }
    }

    /// The enum's type name, which is also what gets imported.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    /// Member name for an ordinal, or `None` when out of range.
    pub fn symbol(&self, ordinal: i64) -> Option<&'static str> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| self.symbols.get(i))
            .copied()
    }

    /// Ordinal of a member name, plain (`OnPush`) or qualified
    /// (`ChangeDetectionStrategy.OnPush`).
    pub fn ordinal(&self, symbol: &str) -> Option<usize> {
        let member = symbol
            .strip_prefix(self.name)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(symbol);
        self.symbols.iter().position(|s| *s == member)
    }

    /// Render a value stored under `key` as `Table.Member`.
    pub fn render(&self, key: &str, value: &ConfigValue) -> Result<String> {
        let symbol = match value {
            ConfigValue::Int(ordinal) => {
                self.symbol(*ordinal)
                    .ok_or_else(|| Error::EnumOrdinalOutOfRange {
                        key: key.to_string(),
                        table: self.name,
                        value: *ordinal,
                        choices: self.choices(),
                    })?
            }
            ConfigValue::String(name) => self
                .ordinal(name)
                .map(|i| self.symbols[i])
                .ok_or_else(|| Error::UnknownEnumSymbol {
                    key: key.to_string(),
                    table: self.name,
                    value: name.clone(),
                    choices: self.choices(),
                })?,
            other => {
                return Err(Error::InvalidEnumValue {
                    key: key.to_string(),
                    table: self.name,
                    found: other.kind_name(),
                });
            }
        };
        Ok(format!("{}.{}", self.name, symbol))
    }

    /// `0 (OnPush), 1 (Default)`
    fn choices(&self) -> String {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{} ({})", i, s))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ordinal_renders_in_table_order() {
        for table in [&CHANGE_DETECTION_STRATEGY, &VIEW_ENCAPSULATION] {
            for (i, symbol) in table.symbols().iter().enumerate() {
                let rendered = table.render("key", &ConfigValue::Int(i as i64)).unwrap();
                assert_eq!(rendered, format!("{}.{}", table.name(), symbol));
            }
        }
    }

    #[test]
    fn test_view_encapsulation_ordinals() {
        assert_eq!(VIEW_ENCAPSULATION.symbol(0), Some("Emulated"));
        assert_eq!(VIEW_ENCAPSULATION.symbol(3), Some("ShadowDom"));
        assert_eq!(VIEW_ENCAPSULATION.symbol(4), None);
        assert_eq!(VIEW_ENCAPSULATION.symbol(-1), None);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let err = CHANGE_DETECTION_STRATEGY
            .render("changeDetection", &ConfigValue::Int(2))
            .unwrap_err();
        match err {
            Error::EnumOrdinalOutOfRange {
                key,
                table,
                value,
                choices,
            } => {
                assert_eq!(key, "changeDetection");
                assert_eq!(table, "ChangeDetectionStrategy");
                assert_eq!(value, 2);
                assert_eq!(choices, "0 (OnPush), 1 (Default)");
            }
            other => panic!("expected out of range error, got {:?}", other),
        }
    }

    #[test]
    fn test_member_names() {
        assert_eq!(
            CHANGE_DETECTION_STRATEGY
                .render("changeDetection", &ConfigValue::from("OnPush"))
                .unwrap(),
            "ChangeDetectionStrategy.OnPush"
        );
        assert_eq!(
            VIEW_ENCAPSULATION
                .render("encapsulation", &ConfigValue::from("ViewEncapsulation.None"))
                .unwrap(),
            "ViewEncapsulation.None"
        );
        assert!(matches!(
            VIEW_ENCAPSULATION.render("encapsulation", &ConfigValue::from("Shadow")),
            Err(Error::UnknownEnumSymbol { .. })
        ));
    }

    #[test]
    fn test_wrong_value_kind() {
        let err = CHANGE_DETECTION_STRATEGY
            .render("changeDetection", &ConfigValue::Bool(true))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidEnumValue { found: "boolean", .. }));
    }
}
