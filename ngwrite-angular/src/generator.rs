//! Turns a manifest into Angular source files.

use std::path::Path;

use ngwrite_codegen::{CodeBuilder, ImportCollector, Indent};
use ngwrite_core::{File, Overwrite, WriteResult, expression_identifiers, file_stem, leading_identifier};
use ngwrite_manifest::{ClassKind, Config, Manifest};

use crate::{
    CodeFile, Result, Snippet,
    ast::{Class, Import},
    emit::{
        write_application_config, write_component_decorator, write_directive_decorator,
        write_module_decorator, write_routes,
    },
    policy::{APPLICATION, PropertyPolicy},
    symbols::{ANGULAR_CORE, ANGULAR_ROUTER, well_known_module},
};

const ROUTES_STEM: &str = "app.routes";
const CONFIG_STEM: &str = "app.config";

/// A generated file, rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    pub content: String,
}

/// Outcome of writing generated files.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<String>,
    /// Files left alone because they already exist
    pub skipped: Vec<String>,
}

/// Angular source generator for a manifest.
///
/// One file per component, directive and module, plus `app.routes.ts` and
/// `app.config.ts` when the manifest declares routes or an application
/// config.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    indent: Indent,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            indent: Indent::TYPESCRIPT,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Render every file without touching the disk, sorted by path.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let mut files = Vec::new();

        for (kind, name, config) in self.manifest.classes() {
            let file = self
                .class_file(kind, name, config)
                .map_err(|e| e.in_class(kind.as_str(), name))?;
            files.push(file);
        }

        if !self.manifest.routes.is_empty() {
            files.push(self.routes_file());
        }

        if let Some(config) = &self.manifest.application {
            let file = self
                .config_file(config)
                .map_err(|e| e.in_class("application config", "appConfig"))?;
            files.push(file);
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    /// Write every file below `output_dir`.
    pub fn generate(&self, output_dir: &Path, overwrite: Overwrite) -> eyre::Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for PreviewFile { path, content } in self.preview()? {
            let file = File::new(output_dir.join(&path), content).overwrite(overwrite);
            match file.write()? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => result.skipped.push(path),
            }
        }

        tracing::debug!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            "generation finished"
        );
        Ok(result)
    }

    fn class_file(&self, kind: ClassKind, name: &str, config: &Config) -> Result<PreviewFile> {
        let mut body = CodeBuilder::new(self.indent);
        match kind {
            ClassKind::Component => write_component_decorator(&mut body, config)?,
            ClassKind::Directive => write_directive_decorator(&mut body, config)?,
            ClassKind::Module => write_module_decorator(&mut body, config)?,
        }
        body.emit(&Class::new(name));

        let policy = PropertyPolicy::for_class(kind);
        let mut imports = ImportCollector::new();
        if let Some(decorator) = policy.decorator() {
            imports.add(ANGULAR_CORE, decorator);
        }
        for table in policy.enum_tables(config) {
            imports.add(ANGULAR_CORE, table.name());
        }
        for reference in policy.references(config) {
            self.resolve(&reference.to_string(), name, &mut imports);
        }

        let path = format!("{}.ts", file_stem(name, kind.as_str()));
        tracing::debug!(kind = kind.as_str(), class = name, path = %path, "rendered class");
        Ok(PreviewFile {
            content: self.render(&imports, body),
            path,
        })
    }

    fn routes_file(&self) -> PreviewFile {
        let mut imports = ImportCollector::new();
        imports.add(ANGULAR_ROUTER, "Routes");
        for route in &self.manifest.routes {
            self.resolve(&route.component_name, "routes", &mut imports);
        }

        let mut body = CodeBuilder::new(self.indent);
        write_routes(&mut body, &self.manifest.routes);

        tracing::debug!(routes = self.manifest.routes.len(), "rendered routes");
        PreviewFile {
            path: format!("{}.ts", ROUTES_STEM),
            content: self.render(&imports, body),
        }
    }

    fn config_file(&self, config: &Config) -> Result<PreviewFile> {
        let mut body = CodeBuilder::new(self.indent);
        body.push_line("export const appConfig: ApplicationConfig = {");
        body.push_indent();
        write_application_config(&mut body, config)?;
        body.push_dedent();
        body.push_line("};");

        let mut imports = ImportCollector::new();
        imports.add(ANGULAR_CORE, "ApplicationConfig");
        for reference in APPLICATION.references(config) {
            self.resolve(&reference.to_string(), "appConfig", &mut imports);
        }

        tracing::debug!("rendered application config");
        Ok(PreviewFile {
            path: format!("{}.ts", CONFIG_STEM),
            content: self.render(&imports, body),
        })
    }

    fn render(&self, imports: &ImportCollector, body: CodeBuilder) -> String {
        CodeFile::new()
            .imports(Import::from_collector(imports))
            .add(Snippet::new(body.build()))
            .render_with_indent(self.indent)
    }

    /// Add imports for the identifiers an expression uses.
    ///
    /// `current` is the binding the file declares; it is never imported.
    fn resolve(&self, expr: &str, current: &str, imports: &mut ImportCollector) {
        let leading = leading_identifier(expr);
        for ident in expression_identifiers(expr) {
            if ident == current {
                continue;
            }
            match self.module_for(ident) {
                Some(module) => imports.add(&module, ident),
                None if leading == Some(ident) => {
                    tracing::warn!(
                        symbol = ident,
                        file = current,
                        "no import source for symbol, declare it under [symbols]"
                    );
                }
                None => {}
            }
        }
    }

    fn module_for(&self, ident: &str) -> Option<String> {
        if let Some(kind) = self.manifest.class_kind(ident) {
            return Some(format!("./{}", file_stem(ident, kind.as_str())));
        }
        if ident == "routes" && !self.manifest.routes.is_empty() {
            return Some(format!("./{}", ROUTES_STEM));
        }
        if let Some(module) = self.manifest.symbols.get(ident) {
            return Some(module.clone());
        }
        well_known_module(ident).map(str::to_string)
    }
}
