use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ngwrite_core::{File, WriteResult};
use ngwrite_manifest::{DEFAULT_FILENAME, STARTER_MANIFEST};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub path: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        match File::new(&self.path, STARTER_MANIFEST).write()? {
            WriteResult::Written => {
                println!("Created {}", self.path.display());
                println!();
                println!("Next steps:");
                println!("  ngwrite check --config {}", self.path.display());
                println!("  ngwrite bake --config {}", self.path.display());
                Ok(())
            }
            WriteResult::Skipped => {
                eyre::bail!("{} already exists", self.path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_starter_once() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = InitCommand {
            path: dir.path().join("ngwrite.toml"),
        };

        cmd.run().unwrap();
        assert_eq!(std::fs::read_to_string(&cmd.path).unwrap(), STARTER_MANIFEST);

        let err = cmd.run().unwrap_err();
        assert!(err.to_string().ends_with("already exists"));
    }
}
