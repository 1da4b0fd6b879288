use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    path::Path,
    str::FromStr,
};

use indexmap::IndexMap;
use ngwrite_core::file_stem;
use serde::Deserialize;

use crate::{
    Config, Error, Result, Route,
    error::SourceContext,
    validate::{ParseContext, find_key_spans, find_value_span},
};

/// Kind of Angular class a config is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Component,
    Directive,
    Module,
}

impl ClassKind {
    /// Lower-case name, as used in file names (`app.component.ts`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Directive => "directive",
            Self::Module => "module",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project metadata from `[project]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Root manifest for ngwrite.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project metadata
    pub project: ProjectConfig,

    /// Identifier -> module it is imported from, for symbols the manifest
    /// does not declare itself
    #[serde(default)]
    pub symbols: IndexMap<String, String>,

    #[serde(default)]
    pub components: IndexMap<String, Config>,

    #[serde(default)]
    pub directives: IndexMap<String, Config>,

    #[serde(default)]
    pub modules: IndexMap<String, Config>,

    /// Config for `bootstrapApplication`
    #[serde(default)]
    pub application: Option<Config>,

    #[serde(default)]
    pub routes: Vec<Route>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, crate::DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a manifest file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    ///
    /// Filenames ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let is_json = Path::new(filename)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let manifest: Self = if is_json {
            serde_json::from_str(content).map_err(|e| source.json_error(e))?
        } else {
            toml::from_str(content).map_err(|e| source.parse_error(e))?
        };

        manifest.validate(&ParseContext::new(&source))?;
        Ok(manifest)
    }

    /// Every declared class with its kind, components first.
    pub fn classes(&self) -> impl Iterator<Item = (ClassKind, &str, &Config)> {
        self.components
            .iter()
            .map(|(name, config)| (ClassKind::Component, name.as_str(), config))
            .chain(
                self.directives
                    .iter()
                    .map(|(name, config)| (ClassKind::Directive, name.as_str(), config)),
            )
            .chain(
                self.modules
                    .iter()
                    .map(|(name, config)| (ClassKind::Module, name.as_str(), config)),
            )
    }

    /// Look up the kind of a declared class.
    pub fn class_kind(&self, name: &str) -> Option<ClassKind> {
        self.classes()
            .find(|(_, class, _)| *class == name)
            .map(|(kind, _, _)| kind)
    }

    /// Validate the manifest after parsing
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        let src = ctx.source().src();

        if self.project.name.trim().is_empty() {
            return Err(ctx
                .source()
                .validation_error("project name cannot be empty", None));
        }

        let mut seen: HashMap<&str, ClassKind> = HashMap::new();
        let mut stems: HashMap<String, &str> = HashMap::new();
        for (kind, name, _) in self.classes() {
            let spans = find_key_spans(src, name);
            ctx.validate_name(name, kind.as_str(), spans.first().copied())?;

            if let Some(first_kind) = seen.insert(name, kind) {
                return Err(ctx.source().duplicate_class_error(
                    name,
                    first_kind.as_str(),
                    kind.as_str(),
                    &spans,
                ));
            }

            match stems.entry(file_stem(name, kind.as_str())) {
                Entry::Occupied(entry) => {
                    let first = *entry.get();
                    return Err(ctx.source().file_collision_error(
                        first,
                        name,
                        format!("{}.ts", entry.key()),
                        find_key_spans(src, first).first().copied(),
                        spans.first().copied(),
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(name);
                }
            }
        }

        for symbol in self.symbols.keys() {
            let span = find_key_spans(src, symbol).first().copied();
            ctx.push("symbols").validate_name(symbol, "symbol", span)?;
        }

        for (i, route) in self.routes.iter().enumerate() {
            let span = find_value_span(src, &route.component_name);
            ctx.push(format!("routes[{}]", i)).validate_name(
                &route.component_name,
                "route component",
                span,
            )?;
        }

        Ok(())
    }
}
