use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ngwrite_angular::Generator;
use ngwrite_manifest::{DEFAULT_FILENAME, Manifest, ManifestFile};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the manifest
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Parse the manifest and serialize every config it declares
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let manifest = file.manifest();

        let files = Generator::new(manifest).preview().unwrap_or_exit();

        println!("✓ {} is valid\n", file.path().display());
        println!("  {}", manifest.project.name);
        if let Some(desc) = &manifest.project.description {
            println!("  {}", desc);
        }
        println!();

        for line in summary(manifest) {
            println!("  {}", line);
        }
        println!(
            "\n  {} file{} would be generated",
            files.len(),
            plural(files.len())
        );

        Ok(())
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// One line per non-empty section of the manifest.
fn summary(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    for (label, names) in [
        ("component", manifest.components.keys()),
        ("directive", manifest.directives.keys()),
        ("module", manifest.modules.keys()),
    ] {
        let names: Vec<&str> = names.map(String::as_str).collect();
        if !names.is_empty() {
            lines.push(format!(
                "{} {}{}: {}",
                names.len(),
                label,
                plural(names.len()),
                names.join(", ")
            ));
        }
    }
    if !manifest.routes.is_empty() {
        lines.push(format!(
            "{} route{}",
            manifest.routes.len(),
            plural(manifest.routes.len())
        ));
    }
    if manifest.application.is_some() {
        lines.push("application config".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let manifest: Manifest = r#"
            [project]
            name = "shop"

            [components.AppComponent]
            [components.CartComponent]
            [modules.AppModule]

            [[routes]]
            path = "cart"
            component = "CartComponent"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            summary(&manifest),
            [
                "2 components: AppComponent, CartComponent",
                "1 module: AppModule",
                "1 route",
            ]
        );
    }
}
