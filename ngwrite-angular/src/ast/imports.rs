//! TypeScript import statement builder.

use ngwrite_codegen::{CodeFragment, ImportCollector, Renderable};

/// A named import: `import { A, B } from 'module';`
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// One import per module of the collector, in collector order.
    pub fn from_collector(imports: &ImportCollector) -> Vec<Import> {
        imports
            .iter()
            .map(|(module, symbols)| Import {
                from: module.to_string(),
                named: symbols.iter().cloned().collect(),
            })
            .collect()
    }

    /// Build the import as a string, without trailing newline.
    pub fn build(&self) -> String {
        if self.named.is_empty() {
            format!("import '{}';", self.from)
        } else {
            format!(
                "import {{ {} }} from '{}';",
                self.named.join(", "),
                self.from
            )
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}
