//! Import collection for generated files.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep first-use order; symbols within a module are sorted.
///
/// # Example
///
/// ```
/// use ngwrite_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("@angular/core", "NgModule");
/// imports.add("@angular/platform-browser", "BrowserModule");
/// imports.add("@angular/core", "Component");
///
/// let modules: Vec<&str> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["@angular/core", "@angular/platform-browser"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Check if a symbol is imported from any module.
    pub fn provides(&self, symbol: &str) -> bool {
        self.imports.values().any(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("@angular/core", "Component");
        imports.add("@angular/core", "ViewEncapsulation");
        imports.add("@angular/router", "Routes");

        assert!(imports.has_symbol("@angular/core", "Component"));
        assert!(!imports.has_symbol("@angular/core", "NgModule"));
        assert!(!imports.has_symbol("@angular/common", "Component"));
        assert!(imports.provides("Routes"));
        assert!(!imports.provides("RouterOutlet"));
    }

    #[test]
    fn test_symbols_sorted_and_deduplicated() {
        let mut imports = ImportCollector::new();
        imports.add("@angular/core", "ViewEncapsulation");
        imports.add("@angular/core", "Component");
        imports.add("@angular/core", "Component");

        let (_, symbols) = imports.iter().next().unwrap();
        let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
        assert_eq!(symbols, ["Component", "ViewEncapsulation"]);
    }

    #[test]
    fn test_modules_keep_first_use_order() {
        let mut imports = ImportCollector::new();
        imports.add("./hero.service", "HeroService");
        imports.add("@angular/core", "NgModule");
        imports.add("./hero.service", "HERO_TOKEN");

        let modules: Vec<&str> = imports.iter().map(|(module, _)| module).collect();
        assert_eq!(modules, ["./hero.service", "@angular/core"]);
    }
}
