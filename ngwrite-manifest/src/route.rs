use serde::{Deserialize, Serialize};

/// A navigation route: a URL path bound to a component class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route {
    /// URL path segment, without a leading slash (may be empty).
    pub path: String,
    /// Class name of the routed component, emitted as an identifier.
    #[serde(rename = "component", alias = "componentName")]
    pub component_name: String,
}

impl Route {
    pub fn new(path: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            component_name: component_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name_alias() {
        let route: Route =
            serde_json::from_str(r#"{"path": "home", "componentName": "HomeComponent"}"#).unwrap();
        assert_eq!(route, Route::new("home", "HomeComponent"));

        let route: Route = toml::from_str("path = ''\ncomponent = 'DashboardComponent'").unwrap();
        assert_eq!(route, Route::new("", "DashboardComponent"));
    }
}
