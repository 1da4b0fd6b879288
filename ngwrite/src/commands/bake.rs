use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use ngwrite_angular::{GenerateResult, Generator};
use ngwrite_core::Overwrite;
use ngwrite_manifest::{DEFAULT_FILENAME, ManifestFile};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct BakeCommand {
    /// Path to the manifest
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Directory the files are written to
    #[arg(short, long, default_value = "src/app")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let generator = Generator::new(file.manifest());
        tracing::debug!(
            manifest = %file.path().display(),
            output = %self.output.display(),
            dry_run = self.dry_run,
            force = self.force,
            "baking"
        );

        if self.dry_run {
            return self.run_preview(&generator);
        }

        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };
        // Surface config errors as diagnostics before anything is written
        generator.preview().unwrap_or_exit();
        let result = generator
            .generate(&self.output, overwrite)
            .wrap_err("Failed to generate code")?;

        Self::print_summary(&file.manifest().project.name, &self.output, &result);
        Ok(())
    }

    fn run_preview(&self, generator: &Generator<'_>) -> Result<()> {
        let files = generator.preview().unwrap_or_exit();

        for file in &files {
            println!("── {} ──", self.output.join(&file.path).display());
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }

    fn print_summary(project: &str, output: &Path, result: &GenerateResult) {
        println!("{}", project);
        println!();
        println!("Generated: {}/", output.display());
        for path in &result.written {
            println!("  + {}", path);
        }

        if !result.skipped.is_empty() {
            println!();
            println!("Unchanged (already exist, use --force to overwrite):");
            for path in &result.skipped {
                println!("  = {}", path);
            }
        }
    }
}
