//! The open configuration mapping handed to the emitters.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Serialize,
    de::{self, Deserializer, MapAccess, SeqAccess, Visitor},
};

/// Key under which the TOML deserializer hands out date-time values.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// A single configuration value.
///
/// Values carry no formatting intent of their own: whether a string ends up
/// quoted or as a bare identifier is decided by the key it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(IndexMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Build a list value.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ConfigValue>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map value, keeping the iteration order of `entries`.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Human-readable name of the value's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, ConfigValue>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Accepts any self-describing value.
///
/// TOML date-times (`released = 1979-05-27`) become strings holding their
/// TOML text.
impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = ConfigValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean, number, string, list or table")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ConfigValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ConfigValue::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(match i64::try_from(value) {
                    Ok(value) => ConfigValue::Int(value),
                    Err(_) => ConfigValue::Float(value as f64),
                })
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ConfigValue::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ConfigValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ConfigValue::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(ConfigValue::List(items))
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = IndexMap::new();
                let Some(first) = map.next_key::<String>()? else {
                    return Ok(ConfigValue::Map(entries));
                };
                if first == TOML_DATETIME_KEY {
                    let text: String = map.next_value()?;
                    return Ok(ConfigValue::String(text));
                }
                entries.insert(first, map.next_value()?);
                while let Some((key, value)) = map.next_entry()? {
                    entries.insert(key, value);
                }
                Ok(ConfigValue::Map(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// The default textual form of a value.
///
/// Lists join their items with `,`; maps render as `{k: v, ...}`.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(value: Vec<T>) -> Self {
        Self::list(value)
    }
}

impl<T: Into<ConfigValue>, const N: usize> From<[T; N]> for ConfigValue {
    fn from(value: [T; N]) -> Self {
        Self::list(value)
    }
}

impl From<IndexMap<String, ConfigValue>> for ConfigValue {
    fn from(value: IndexMap<String, ConfigValue>) -> Self {
        Self::Map(value)
    }
}

/// A configuration object: string keys to values, in insertion order.
///
/// # Example
///
/// ```
/// use ngwrite_manifest::Config;
///
/// let config = Config::new()
///     .with("selector", "app-root")
///     .with("standalone", true)
///     .with("imports", ["RouterOutlet"]);
///
/// let keys: Vec<&str> = config.keys().collect();
/// assert_eq!(keys, ["selector", "standalone", "imports"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    entries: IndexMap<String, ConfigValue>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry and return the config, for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an entry. Re-inserting a key keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Config
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let config = Config::new()
            .with("templateUrl", "./app.component.html")
            .with("selector", "app-root")
            .with("changeDetection", 0);
        let keys: Vec<&str> = config.keys().collect();
        assert_eq!(keys, ["templateUrl", "selector", "changeDetection"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut config = Config::new().with("a", 1).with("b", 2);
        let previous = config.insert("a", 3);
        assert_eq!(previous, Some(ConfigValue::Int(1)));
        let entries: Vec<(&str, String)> =
            config.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(entries, [("a", "3".to_string()), ("b", "2".to_string())]);
    }

    #[test]
    fn test_display_default_text() {
        assert_eq!(ConfigValue::from(true).to_string(), "true");
        assert_eq!(ConfigValue::from(42).to_string(), "42");
        assert_eq!(ConfigValue::from(1.5).to_string(), "1.5");
        assert_eq!(ConfigValue::from("x").to_string(), "x");
        assert_eq!(ConfigValue::from(["a", "b"]).to_string(), "a,b");
        assert_eq!(
            ConfigValue::map([("role", "button"), ("tabindex", "0")]).to_string(),
            "{role: button, tabindex: 0}"
        );
        assert_eq!(ConfigValue::list(Vec::<&str>::new()).to_string(), "");
    }

    #[test]
    fn test_untagged_deserialize_from_json() {
        let config: Config = serde_json::from_str(
            r#"{"standalone": true, "changeDetection": 1, "styles": ["a"], "host": {"role": "button"}}"#,
        )
        .unwrap();
        assert_eq!(config.get("standalone"), Some(&ConfigValue::Bool(true)));
        assert_eq!(config.get("changeDetection"), Some(&ConfigValue::Int(1)));
        assert_eq!(
            config.get("styles").and_then(ConfigValue::as_list).map(<[_]>::len),
            Some(1)
        );
        assert!(config.get("host").and_then(ConfigValue::as_map).is_some());
    }

    #[test]
    fn test_toml_datetime_becomes_string() {
        let config: Config = toml::from_str(
            "released = 1979-05-27\nstamp = 1979-05-27T07:32:00Z\nhost = { role = \"button\" }\n",
        )
        .unwrap();
        assert_eq!(
            config.get("released"),
            Some(&ConfigValue::String("1979-05-27".to_string()))
        );
        assert_eq!(
            config.get("stamp"),
            Some(&ConfigValue::String("1979-05-27T07:32:00Z".to_string()))
        );
        assert_eq!(
            config.get("host"),
            Some(&ConfigValue::map([("role", "button")]))
        );
    }

    #[test]
    fn test_large_unsigned_falls_back_to_float() {
        let config: Config = serde_json::from_str(r#"{"big": 18446744073709551615}"#).unwrap();
        assert_eq!(config.get("big").map(ConfigValue::kind_name), Some("float"));
    }

    #[test]
    fn test_from_iterator() {
        let config: Config = [("selector", "app-hero"), ("exportAs", "hero")]
            .into_iter()
            .collect();
        assert_eq!(config.len(), 2);
        assert!(config.contains_key("exportAs"));
        assert_eq!(
            config.get("selector").and_then(ConfigValue::as_str),
            Some("app-hero")
        );
    }
}
