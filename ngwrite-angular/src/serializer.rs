//! Stringifies configuration values into TypeScript property values.

use ngwrite_manifest::{Config, ConfigValue};

use crate::{
    Result,
    ast::{JsArray, JsObject, string_literal},
    policy::{APPLICATION, COMPONENT, DIRECTIVE, KeyPolicy, MODULE, PropertyPolicy},
};

/// A serialized `key: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: String,
    value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value's source text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Turns config entries into source text using a shape's policy.
///
/// Keys the policy names get special formatting; all other keys, and
/// special keys whose value does not have the expected shape, use the
/// generic rules: booleans bare, lists as arrays of string literals, and
/// anything else as the string literal of its default text.
#[derive(Debug, Clone, Copy)]
pub struct PropertySerializer {
    policy: &'static PropertyPolicy,
}

impl PropertySerializer {
    pub const fn new(policy: &'static PropertyPolicy) -> Self {
        Self { policy }
    }

    pub const fn component() -> Self {
        Self::new(&COMPONENT)
    }

    pub const fn directive() -> Self {
        Self::new(&DIRECTIVE)
    }

    pub const fn module() -> Self {
        Self::new(&MODULE)
    }

    pub const fn application() -> Self {
        Self::new(&APPLICATION)
    }

    pub fn policy(&self) -> &'static PropertyPolicy {
        self.policy
    }

    /// The source text placed after `key:`.
    pub fn stringify(&self, key: &str, value: &ConfigValue) -> Result<String> {
        match (self.policy.lookup(key), value) {
            (Some(KeyPolicy::Enum(table)), value) => table.render(key, value),
            (Some(KeyPolicy::KeyValueMap), ConfigValue::Map(entries)) => Ok(entries
                .iter()
                .fold(JsObject::new(), |obj, (k, v)| obj.string(k.as_str(), v.to_string()))
                .build()),
            (Some(KeyPolicy::References), ConfigValue::List(items)) => {
                Ok(JsArray::from_raw(items.iter().map(ToString::to_string)).build())
            }
            (_, value) => Ok(stringify_default(value)),
        }
    }

    /// Serialize every entry of `config`, in order.
    ///
    /// Fails on the first entry that cannot be serialized.
    pub fn serialize(&self, config: &Config) -> Result<Vec<Property>> {
        let properties = config
            .iter()
            .map(|(key, value)| Ok(Property::new(key, self.stringify(key, value)?)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            shape = self.policy.shape(),
            properties = properties.len(),
            "serialized config"
        );
        Ok(properties)
    }
}

fn stringify_default(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::List(items) => {
            JsArray::from_strings(items.iter().map(ToString::to_string)).build()
        }
        other => string_literal(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn component(key: &str, value: impl Into<ConfigValue>) -> String {
        PropertySerializer::component()
            .stringify(key, &value.into())
            .unwrap()
    }

    #[test]
    fn test_booleans_are_bare() {
        assert_eq!(component("standalone", true), "true");
        assert_eq!(component("preserveWhitespaces", false), "false");
    }

    #[test]
    fn test_scalars_are_quoted() {
        assert_eq!(component("selector", "app-root"), "'app-root'");
        assert_eq!(component("exportAs", 42), "'42'");
        assert_eq!(component("interpolation", 1.5), "'1.5'");
        assert_eq!(component("template", "<p>it's</p>"), r"'<p>it\'s</p>'");
    }

    #[test]
    fn test_generic_lists_are_string_arrays() {
        assert_eq!(
            component("styleUrls", ["./a.css", "./b.css"]),
            "['./a.css', './b.css']"
        );
        assert_eq!(component("styles", Vec::<&str>::new()), "[]");
        assert_eq!(component("inputs", [1, 2]), "['1', '2']");
    }

    #[test]
    fn test_reference_lists_are_bare() {
        assert_eq!(
            component("providers", ["HeroService", "LoggerService"]),
            "[HeroService, LoggerService]"
        );
        assert_eq!(component("viewProviders", Vec::<&str>::new()), "[]");
        assert_eq!(
            PropertySerializer::module()
                .stringify("imports", &ConfigValue::from(["BrowserModule"]))
                .unwrap(),
            "[BrowserModule]"
        );
    }

    #[test]
    fn test_reference_key_with_scalar_falls_through() {
        assert_eq!(component("providers", "HeroService"), "'HeroService'");
    }

    #[test]
    fn test_policy_is_per_shape() {
        // `declarations` is only a reference list for modules
        assert_eq!(component("declarations", ["AppComponent"]), "['AppComponent']");
        assert_eq!(
            PropertySerializer::module()
                .stringify("declarations", &ConfigValue::from(["AppComponent"]))
                .unwrap(),
            "[AppComponent]"
        );
        // enum keys only exist on components
        assert_eq!(
            PropertySerializer::directive()
                .stringify("changeDetection", &ConfigValue::Int(0))
                .unwrap(),
            "'0'"
        );
    }

    #[test]
    fn test_host_map() {
        let host = ConfigValue::map([("role", "button"), ("(click)", "toggle()")]);
        assert_eq!(
            component("host", host),
            "{ 'role': 'button', '(click)': 'toggle()' }"
        );
        assert_eq!(component("host", ConfigValue::map(Vec::<(&str, &str)>::new())), "{}");
        assert_eq!(component("host", "role"), "'role'");
    }

    #[test]
    fn test_enum_keys() {
        assert_eq!(
            component("changeDetection", 0),
            "ChangeDetectionStrategy.OnPush"
        );
        assert_eq!(component("encapsulation", 3), "ViewEncapsulation.ShadowDom");
        assert_eq!(component("encapsulation", "None"), "ViewEncapsulation.None");
    }

    #[test]
    fn test_serialize_keeps_order() {
        let config = Config::new()
            .with("selector", "app-root")
            .with("changeDetection", 0)
            .with("standalone", true);
        let properties = PropertySerializer::component().serialize(&config).unwrap();
        assert_eq!(
            properties,
            [
                Property::new("selector", "'app-root'"),
                Property::new("changeDetection", "ChangeDetectionStrategy.OnPush"),
                Property::new("standalone", "true"),
            ]
        );
    }

    #[test]
    fn test_serialize_fails_on_bad_enum() {
        let config = Config::new()
            .with("selector", "app-root")
            .with("encapsulation", 7);
        let err = PropertySerializer::component().serialize(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::EnumOrdinalOutOfRange { value: 7, table: "ViewEncapsulation", .. }
        ));
    }
}
