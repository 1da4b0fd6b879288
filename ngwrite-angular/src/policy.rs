//! Per-shape tables naming the keys that get special formatting.

use ngwrite_manifest::{ClassKind, Config, ConfigValue};

use crate::enums::{CHANGE_DETECTION_STRATEGY, EnumTable, VIEW_ENCAPSULATION};

/// How the value under a key is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Integer ordinal (or member name) rendered as `Table.Member`.
    Enum(&'static EnumTable),
    /// Map rendered as an inline object with quoted keys and values.
    KeyValueMap,
    /// List of source identifiers, rendered unquoted.
    References,
}

/// The special keys of one configuration shape.
///
/// Keys not listed here use the generic rules.
#[derive(Debug)]
pub struct PropertyPolicy {
    shape: &'static str,
    decorator: Option<&'static str>,
    keys: &'static [(&'static str, KeyPolicy)],
}

pub static COMPONENT: PropertyPolicy = PropertyPolicy {
    shape: "component",
    decorator: Some("Component"),
    keys: &[
        ("changeDetection", KeyPolicy::Enum(&CHANGE_DETECTION_STRATEGY)),
        ("encapsulation", KeyPolicy::Enum(&VIEW_ENCAPSULATION)),
        ("host", KeyPolicy::KeyValueMap),
        ("entryComponents", KeyPolicy::References),
        ("providers", KeyPolicy::References),
        ("viewProviders", KeyPolicy::References),
    ],
};

pub static DIRECTIVE: PropertyPolicy = PropertyPolicy {
    shape: "directive",
    decorator: Some("Directive"),
    keys: &[
        ("host", KeyPolicy::KeyValueMap),
        ("providers", KeyPolicy::References),
    ],
};

pub static MODULE: PropertyPolicy = PropertyPolicy {
    shape: "module",
    decorator: Some("NgModule"),
    keys: &[
        ("bootstrap", KeyPolicy::References),
        ("declarations", KeyPolicy::References),
        ("entryComponents", KeyPolicy::References),
        ("imports", KeyPolicy::References),
        ("exports", KeyPolicy::References),
        ("providers", KeyPolicy::References),
        ("schemas", KeyPolicy::References),
    ],
};

pub static APPLICATION: PropertyPolicy = PropertyPolicy {
    shape: "application",
    decorator: None,
    keys: &[("providers", KeyPolicy::References)],
};

impl PropertyPolicy {
    /// Policy for the decorator of a class kind.
    pub fn for_class(kind: ClassKind) -> &'static PropertyPolicy {
        match kind {
            ClassKind::Component => &COMPONENT,
            ClassKind::Directive => &DIRECTIVE,
            ClassKind::Module => &MODULE,
        }
    }

    pub fn shape(&self) -> &'static str {
        self.shape
    }

    /// Decorator wrapping this shape, if it has one.
    pub fn decorator(&self) -> Option<&'static str> {
        self.decorator
    }

    pub fn lookup(&self, key: &str) -> Option<KeyPolicy> {
        self.keys
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, policy)| *policy)
    }

    /// Enum tables referenced by the keys present in `config`.
    pub fn enum_tables<'c>(
        &'c self,
        config: &'c Config,
    ) -> impl Iterator<Item = &'static EnumTable> + 'c {
        config.keys().filter_map(|key| match self.lookup(key) {
            Some(KeyPolicy::Enum(table)) => Some(table),
            _ => None,
        })
    }

    /// Items of every reference-list key in `config`, in order.
    pub fn references<'c>(&'c self, config: &'c Config) -> impl Iterator<Item = &'c ConfigValue> {
        config
            .iter()
            .filter(|(key, _)| self.lookup(key) == Some(KeyPolicy::References))
            .filter_map(|(_, value)| value.as_list())
            .flatten()
    }
}
